//! Random minions from the third-party item API.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lowest id the item API serves.
pub const MIN_MINION_ID: u32 = 1;

/// Highest id the item API serves.
pub const MAX_MINION_ID: u32 = 1025;

/// One item as returned by the API. Only the fields the dashboard shows are
/// decoded; everything else in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minion {
    pub name: String,
    pub sprites: Sprites,
}

/// Image references for a minion. The API sends `null` for missing images.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
}

/// Pick a minion id uniformly from the served range.
pub fn random_minion_id() -> u32 {
    rand::thread_rng().gen_range(MIN_MINION_ID..=MAX_MINION_ID)
}
