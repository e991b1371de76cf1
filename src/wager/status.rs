use crate::handicap::StrokeSheet;
use crate::model::{NassauSegment, PlayerScore, Press};
use crate::wager::compare::{HoleOutcome, compare_hole};
use crate::wager::skins::{SkinsLedger, ledger};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Running state of a two-player match for interim display. Never part of
/// money settlement.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchStatus {
    pub wins_first: u32,
    pub wins_second: u32,
    pub holes_remaining: u32,
}

impl MatchStatus {
    #[must_use]
    pub fn margin(&self) -> u32 {
        self.wins_first.abs_diff(self.wins_second)
    }

    /// The match is over once the margin exceeds the holes left.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        self.margin() > self.holes_remaining
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let margin = self.margin();
        if margin == 0 {
            write!(f, "all square")
        } else if self.is_decided() {
            write!(f, "wins {margin} & {}", self.holes_remaining)
        } else if margin == 1 {
            write!(f, "1 hole up")
        } else {
            write!(f, "{margin} holes up")
        }
    }
}

/// Match status between two players over the given holes. Halved holes
/// count for neither; unplayed holes count as remaining.
#[must_use]
pub fn match_status(
    first: &PlayerScore,
    second: &PlayerScore,
    holes: &[u8],
    sheet: &StrokeSheet,
) -> MatchStatus {
    let mut status = MatchStatus {
        wins_first: 0,
        wins_second: 0,
        holes_remaining: 0,
    };
    for &hole in holes {
        match compare_hole(first, second, hole, sheet) {
            HoleOutcome::FirstWon => status.wins_first += 1,
            HoleOutcome::SecondWon => status.wins_second += 1,
            HoleOutcome::NotPlayed => status.holes_remaining += 1,
            HoleOutcome::Halved => {}
        }
    }
    status
}

/// Per-segment match status for a Nassau round.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct NassauStatus {
    pub front: MatchStatus,
    pub back: MatchStatus,
    pub overall: MatchStatus,
}

#[must_use]
pub fn nassau_status(
    first: &PlayerScore,
    second: &PlayerScore,
    scoped: &[u8],
    sheet: &StrokeSheet,
) -> NassauStatus {
    let in_segment = |segment: NassauSegment| -> Vec<u8> {
        scoped
            .iter()
            .copied()
            .filter(|&h| segment.contains(h))
            .collect()
    };
    NassauStatus {
        front: match_status(first, second, &in_segment(NassauSegment::Front), sheet),
        back: match_status(first, second, &in_segment(NassauSegment::Back), sheet),
        overall: match_status(first, second, &in_segment(NassauSegment::Overall), sheet),
    }
}

/// Live skins view: skins decided so far, the pot riding on the next
/// undecided hole, and which hole that is.
#[must_use]
pub fn skins_status(players: &[PlayerScore], holes: &[u8], sheet: &StrokeSheet) -> SkinsLedger {
    ledger(players, holes, sheet)
}

/// Propose a press on a Nassau segment: the trailing player is two or
/// more holes down with holes left in the segment, and no press already
/// starts at the suggested hole. The suggestion only enters settlement
/// once the caller records it on the round.
#[must_use]
pub fn suggest_press(
    first: &PlayerScore,
    second: &PlayerScore,
    scoped: &[u8],
    existing: &[Press],
    segment: NassauSegment,
    stake_cents: i64,
    sheet: &StrokeSheet,
) -> Option<Press> {
    let holes: Vec<u8> = scoped
        .iter()
        .copied()
        .filter(|&h| segment.contains(h))
        .collect();
    let status = match_status(first, second, &holes, sheet);
    if status.margin() < 2 || status.holes_remaining == 0 {
        return None;
    }

    let start_hole = holes
        .iter()
        .copied()
        .find(|&h| compare_hole(first, second, h, sheet) == HoleOutcome::NotPlayed)?;

    if existing
        .iter()
        .any(|p| p.segment == segment && p.start_hole == start_hole)
    {
        return None;
    }

    Some(Press {
        segment,
        start_hole,
        stake_cents,
    })
}
