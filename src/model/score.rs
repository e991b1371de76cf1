use crate::handicap::StrokeSheet;
use crate::model::Player;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One gross score on one hole, as exchanged with the score-entry layer.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoleScore {
    pub hole_number: u8,
    pub gross: u32,
}

/// A player's scorecard within one round.
///
/// Gross strokes are keyed by hole number, so a card holds at most one
/// score per hole and re-recording a hole replaces the earlier entry (the
/// correction path for quick-entry and live-scoring flows). Aggregates are
/// derived from the map on demand; `winnings_cents` is the only settled
/// field and is overwritten by every settlement run.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlayerScore {
    pub player_id: i64,
    pub handicap_index: f64,
    pub gross_by_hole: BTreeMap<u8, u32>,
    pub winnings_cents: i64,
}

impl PlayerScore {
    #[must_use]
    pub fn new(player: &Player) -> Self {
        Self {
            player_id: player.id,
            handicap_index: player.handicap_index,
            gross_by_hole: BTreeMap::new(),
            winnings_cents: 0,
        }
    }

    /// Record or correct the gross score for one hole.
    pub fn record(&mut self, score: HoleScore) {
        self.gross_by_hole.insert(score.hole_number, score.gross);
    }

    #[must_use]
    pub fn gross_for(&self, hole_number: u8) -> Option<u32> {
        self.gross_by_hole.get(&hole_number).copied()
    }

    #[must_use]
    pub fn holes_played(&self) -> usize {
        self.gross_by_hole.len()
    }

    #[must_use]
    pub fn gross_total(&self) -> i64 {
        self.gross_by_hole.values().map(|&g| i64::from(g)).sum()
    }

    /// Net total over played holes: gross minus strokes received, hole by
    /// hole. Holes with no score contribute nothing.
    #[must_use]
    pub fn net_total(&self, sheet: &StrokeSheet) -> i64 {
        self.gross_by_hole
            .iter()
            .map(|(&hole, &gross)| {
                i64::from(gross) - i64::from(sheet.strokes(self.player_id, hole))
            })
            .sum()
    }

    #[must_use]
    pub fn hole_scores(&self) -> Vec<HoleScore> {
        self.gross_by_hole
            .iter()
            .map(|(&hole_number, &gross)| HoleScore { hole_number, gross })
            .collect()
    }
}
