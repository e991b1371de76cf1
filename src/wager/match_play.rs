use crate::handicap::StrokeSheet;
use crate::model::PlayerScore;
use crate::wager::compare::{HoleOutcome, compare_hole};

/// Holes won by each player over the given holes. Halved and unplayed
/// holes count for neither side.
#[must_use]
pub(crate) fn hole_wins(
    first: &PlayerScore,
    second: &PlayerScore,
    holes: &[u8],
    sheet: &StrokeSheet,
) -> (u32, u32) {
    let mut wins = (0, 0);
    for &hole in holes {
        match compare_hole(first, second, hole, sheet) {
            HoleOutcome::FirstWon => wins.0 += 1,
            HoleOutcome::SecondWon => wins.1 += 1,
            HoleOutcome::Halved | HoleOutcome::NotPlayed => {}
        }
    }
    wins
}

/// Sign of the match for the first player: +1 won, -1 lost, 0 all square.
/// Shared by Nassau, which settles every sub-bet through this.
#[must_use]
pub(crate) fn pair_sign(
    first: &PlayerScore,
    second: &PlayerScore,
    holes: &[u8],
    sheet: &StrokeSheet,
) -> i64 {
    let (first_wins, second_wins) = hole_wins(first, second, holes, sheet);
    match first_wins.cmp(&second_wins) {
        std::cmp::Ordering::Greater => 1,
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
    }
}

/// Match play settlement: the player winning more holes takes the stake.
/// No-op unless exactly two players are in the round.
pub fn settle(players: &mut [PlayerScore], holes: &[u8], bet_cents: i64, sheet: &StrokeSheet) {
    if players.len() != 2 {
        return;
    }
    let sign = pair_sign(&players[0], &players[1], holes, sheet);
    players[0].winnings_cents += sign * bet_cents;
    players[1].winnings_cents -= sign * bet_cents;
}
