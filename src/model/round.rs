use crate::error::EngineError;
use crate::model::{Course, Gender, HoleScore, PlayerScore, Tee};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Betting format for a round. Consumed by exactly one dispatch point in
/// the settlement engine.
///
/// `Skins` is hole-by-hole with carry-over; `TotalSkins` is the
/// whole-round lowest-net variant. `Wolf`, `BestBall`, `Scramble`, and
/// `Custom` are recognized formats that settle as stroke play.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WagerFormat {
    Skins,
    TotalSkins,
    MatchPlay,
    StrokePlay,
    Nassau,
    Wolf,
    BestBall,
    Scramble,
    Custom,
}

impl fmt::Display for WagerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WagerFormat::Skins => "skins",
            WagerFormat::TotalSkins => "total skins",
            WagerFormat::MatchPlay => "match play",
            WagerFormat::StrokePlay => "stroke play",
            WagerFormat::Nassau => "nassau",
            WagerFormat::Wolf => "wolf",
            WagerFormat::BestBall => "best ball",
            WagerFormat::Scramble => "scramble",
            WagerFormat::Custom => "custom",
        };
        write!(f, "{s}")
    }
}

/// Which holes a round covers. Settlement only looks at holes inside the
/// scope, whatever has been scored elsewhere.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum RoundScope {
    Front9,
    Back9,
    Full18,
    SingleHole(u8),
    Custom(Vec<u8>),
}

impl RoundScope {
    /// Hole numbers in the scope, ascending and deduplicated.
    #[must_use]
    pub fn hole_numbers(&self) -> Vec<u8> {
        match self {
            RoundScope::Front9 => (1..=9).collect(),
            RoundScope::Back9 => (10..=18).collect(),
            RoundScope::Full18 => (1..=18).collect(),
            RoundScope::SingleHole(n) => vec![*n],
            RoundScope::Custom(holes) => {
                let mut sorted = holes.clone();
                sorted.sort_unstable();
                sorted.dedup();
                sorted
            }
        }
    }

    #[must_use]
    pub fn contains(&self, hole_number: u8) -> bool {
        match self {
            RoundScope::Front9 => (1..=9).contains(&hole_number),
            RoundScope::Back9 => (10..=18).contains(&hole_number),
            RoundScope::Full18 => (1..=18).contains(&hole_number),
            RoundScope::SingleHole(n) => *n == hole_number,
            RoundScope::Custom(holes) => holes.contains(&hole_number),
        }
    }
}

/// The three base Nassau bets, doubling as the segment a press belongs to.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NassauSegment {
    Front,
    Back,
    Overall,
}

impl NassauSegment {
    #[must_use]
    pub fn bounds(self) -> (u8, u8) {
        match self {
            NassauSegment::Front => (1, 9),
            NassauSegment::Back => (10, 18),
            NassauSegment::Overall => (1, 18),
        }
    }

    #[must_use]
    pub fn contains(self, hole_number: u8) -> bool {
        let (first, last) = self.bounds();
        (first..=last).contains(&hole_number)
    }
}

impl fmt::Display for NassauSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NassauSegment::Front => "front nine",
            NassauSegment::Back => "back nine",
            NassauSegment::Overall => "overall",
        };
        write!(f, "{s}")
    }
}

/// A side bet pressed onto a Nassau segment. Covers the holes from
/// `start_hole` through the end of the segment and settles like any other
/// match-play sub-bet at its own stake. Persisted on the round; only
/// presses attached here participate in settlement.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Press {
    pub segment: NassauSegment,
    pub start_hole: u8,
    pub stake_cents: i64,
}

/// One wagered round of golf.
///
/// The rating/slope/par used for handicap math come from the selected
/// course, tee, and gender when present, and fall back to the flat fields
/// carried on the round itself (legacy rounds recorded before course
/// selection existed).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Round {
    pub id: i64,
    pub format: WagerFormat,
    pub scope: RoundScope,
    pub bet_cents: i64,
    pub course: Option<Course>,
    pub tee: Option<Tee>,
    pub tee_gender: Gender,
    pub rating: f64,
    pub slope: f64,
    pub par: i32,
    pub presses: Vec<Press>,
    pub players: Vec<PlayerScore>,
    pub played_on: NaiveDate,
}

impl Round {
    #[must_use]
    pub fn effective_rating(&self) -> f64 {
        self.tee
            .as_ref()
            .map_or(self.rating, |tee| tee.rating_for(self.tee_gender).rating)
    }

    #[must_use]
    pub fn effective_slope(&self) -> f64 {
        self.tee
            .as_ref()
            .map_or(self.slope, |tee| tee.rating_for(self.tee_gender).slope)
    }

    #[must_use]
    pub fn effective_par(&self) -> i32 {
        self.course.as_ref().map_or(self.par, Course::par)
    }

    /// Scoped hole numbers, restricted to holes actually on the card when
    /// a course is selected.
    #[must_use]
    pub fn scoped_holes(&self) -> Vec<u8> {
        let holes = self.scope.hole_numbers();
        match &self.course {
            Some(course) => holes
                .into_iter()
                .filter(|&n| course.hole(n).is_some())
                .collect(),
            None => holes,
        }
    }

    #[must_use]
    pub fn player(&self, player_id: i64) -> Option<&PlayerScore> {
        self.players.iter().find(|p| p.player_id == player_id)
    }

    /// Record or correct one player's gross score on one hole.
    ///
    /// # Errors
    /// Returns `EngineError::NotFound` if the player is not in the round.
    pub fn record_score(&mut self, player_id: i64, score: HoleScore) -> Result<(), EngineError> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.player_id == player_id)
            .ok_or_else(|| EngineError::NotFound(format!("player {player_id} not in round")))?;
        player.record(score);
        Ok(())
    }
}
