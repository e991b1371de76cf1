use crate::handicap::StrokeSheet;
use crate::model::PlayerScore;

/// Result of one hole between two players, net of handicap strokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoleOutcome {
    FirstWon,
    SecondWon,
    Halved,
    NotPlayed,
}

/// Net score for one player on one hole, or `None` when the hole has no
/// recorded gross score.
#[must_use]
pub fn net_score(player: &PlayerScore, hole_number: u8, sheet: &StrokeSheet) -> Option<i64> {
    player
        .gross_for(hole_number)
        .map(|gross| i64::from(gross) - i64::from(sheet.strokes(player.player_id, hole_number)))
}

/// Compare two players on one hole. `NotPlayed` when either side has no
/// score; otherwise the lower net wins and equal nets halve.
#[must_use]
pub fn compare_hole(
    first: &PlayerScore,
    second: &PlayerScore,
    hole_number: u8,
    sheet: &StrokeSheet,
) -> HoleOutcome {
    let (Some(first_net), Some(second_net)) = (
        net_score(first, hole_number, sheet),
        net_score(second, hole_number, sheet),
    ) else {
        return HoleOutcome::NotPlayed;
    };

    match first_net.cmp(&second_net) {
        std::cmp::Ordering::Less => HoleOutcome::FirstWon,
        std::cmp::Ordering::Greater => HoleOutcome::SecondWon,
        std::cmp::Ordering::Equal => HoleOutcome::Halved,
    }
}
