use crate::ports::outbound::ActorProvider;
use parking_lot::RwLock;
use shared_types::Actor;

/// Actor provider returning whoever was last signed in.
///
/// Used by the runtime wiring and in tests.
pub struct StaticActor {
    actor: RwLock<Actor>,
}

impl StaticActor {
    pub fn new(actor: Actor) -> Self {
        Self {
            actor: RwLock::new(actor),
        }
    }

    pub fn sign_in(&self, actor: Actor) {
        *self.actor.write() = actor;
    }
}

impl ActorProvider for StaticActor {
    fn current_actor(&self) -> Actor {
        self.actor.read().clone()
    }
}
