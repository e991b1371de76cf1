use serde::{Deserialize, Serialize};

/// A participant in a round. The handicap index is fixed for the duration
/// of any round the player appears in; settlement snapshots it onto the
/// player's score record.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub handicap_index: f64,
}
