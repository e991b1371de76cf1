use crate::handicap::StrokeSheet;
use crate::model::{NassauSegment, PlayerScore, Press};
use crate::wager::match_play::pair_sign;

const BASE_BETS: [NassauSegment; 3] = [
    NassauSegment::Front,
    NassauSegment::Back,
    NassauSegment::Overall,
];

fn segment_holes(scoped: &[u8], segment: NassauSegment, from_hole: u8) -> Vec<u8> {
    scoped
        .iter()
        .copied()
        .filter(|&h| segment.contains(h) && h >= from_hole)
        .collect()
}

/// Nassau settlement: three independent match-play bets (front nine, back
/// nine, overall) each at the round stake, plus every press recorded on
/// the round as a further match-play bet over the rest of its segment at
/// its own stake. Total winnings are the sum across sub-bets. No-op
/// unless exactly two players are in the round.
pub fn settle(
    players: &mut [PlayerScore],
    scoped: &[u8],
    presses: &[Press],
    bet_cents: i64,
    sheet: &StrokeSheet,
) {
    if players.len() != 2 {
        return;
    }

    for segment in BASE_BETS {
        let holes = segment_holes(scoped, segment, 0);
        apply_sub_bet(players, &holes, bet_cents, sheet);
    }

    for press in presses {
        let holes = segment_holes(scoped, press.segment, press.start_hole);
        apply_sub_bet(players, &holes, press.stake_cents, sheet);
    }
}

fn apply_sub_bet(players: &mut [PlayerScore], holes: &[u8], stake_cents: i64, sheet: &StrokeSheet) {
    let sign = pair_sign(&players[0], &players[1], holes, sheet);
    players[0].winnings_cents += sign * stake_cents;
    players[1].winnings_cents -= sign * stake_cents;
}
