//! Author and tag lookups for display.

use super::repository::ArticleRepository;
use crate::domain::errors::StoreError;
use shared_types::{EditorialTeamMember, MemberId, Tag, TagId};
use std::collections::{BTreeSet, HashMap};

/// Snapshot of the editorial team and tag collections.
///
/// References from articles are weak: an unknown author or tag id simply has
/// no label.
#[derive(Clone, Debug, Default)]
pub struct ReferenceDirectory {
    team: Vec<EditorialTeamMember>,
    tags: Vec<Tag>,
    tag_index: HashMap<TagId, usize>,
}

impl ReferenceDirectory {
    pub fn new(mut team: Vec<EditorialTeamMember>, tags: Vec<Tag>) -> Self {
        team.sort_by_key(|member| member.order.unwrap_or(0));
        let tag_index = tags
            .iter()
            .enumerate()
            .map(|(i, tag)| (tag.id.clone(), i))
            .collect();
        Self {
            team,
            tags,
            tag_index,
        }
    }

    pub async fn load(repository: &ArticleRepository) -> Result<Self, StoreError> {
        let team = repository.list_team().await?;
        let tags = repository.list_tags().await?;
        Ok(Self::new(team, tags))
    }

    /// Display label for an author, active or not.
    pub fn author_label(&self, id: &MemberId) -> Option<String> {
        self.team
            .iter()
            .find(|member| &member.id == id)
            .map(EditorialTeamMember::display_label)
    }

    /// Members offered as authors, in team order.
    pub fn author_options(&self) -> impl Iterator<Item = &EditorialTeamMember> {
        self.team.iter().filter(|member| member.is_active())
    }

    pub fn tag_name(&self, id: &TagId) -> Option<&str> {
        self.tag_index
            .get(id)
            .map(|&i| self.tags[i].name.as_str())
    }

    /// Names of the known tags in `ids`; unknown ids are skipped.
    pub fn tag_labels(&self, ids: &BTreeSet<TagId>) -> Vec<&str> {
        ids.iter().filter_map(|id| self.tag_name(id)).collect()
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }
}
