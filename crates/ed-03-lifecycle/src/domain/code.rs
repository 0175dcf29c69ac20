//! Human-facing article codes: `ART-<unix millis>-<9 base-36 chars>`.

use chrono::{DateTime, Utc};
use rand::Rng;

pub const CODE_PREFIX: &str = "ART";
pub const CODE_SUFFIX_LEN: usize = 9;

const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Build an article code from a timestamp and a random source.
pub fn article_code<R: Rng + ?Sized>(prefix: &str, now: DateTime<Utc>, rng: &mut R) -> String {
    let suffix: String = (0..CODE_SUFFIX_LEN)
        .map(|_| char::from(BASE36[rng.gen_range(0..BASE36.len())]))
        .collect();
    format!("{prefix}-{}-{suffix}", now.timestamp_millis())
}
