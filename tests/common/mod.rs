#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use golf_wagers::model::{
    Course, Gender, Hole, HoleScore, Player, PlayerScore, Round, RoundScope, Tee, TeeRating,
    WagerFormat,
};
use golf_wagers::storage::{RoundStore, StoreError};
use std::collections::HashMap;
use std::sync::Mutex;

const PARS: [u8; 18] = [4, 4, 3, 5, 4, 3, 4, 5, 4, 4, 5, 3, 4, 4, 5, 3, 4, 4];
const RANKS: [u8; 18] = [5, 1, 17, 9, 3, 15, 7, 11, 13, 8, 2, 16, 12, 4, 10, 18, 6, 14];
const YARDS: [u16; 18] = [
    388, 421, 164, 520, 402, 175, 390, 545, 410, 395, 530, 158, 415, 433, 510, 180, 401, 376,
];

pub fn standard_course() -> Course {
    let holes = (0..18)
        .map(|i| Hole {
            number: i as u8 + 1,
            par: PARS[i],
            difficulty_rank: RANKS[i],
            yards: YARDS[i],
        })
        .collect();
    Course {
        id: 1,
        name: "Juniper Creek".to_string(),
        holes,
    }
}

pub fn standard_tee() -> Tee {
    Tee {
        name: "Blue".to_string(),
        men: TeeRating {
            rating: 71.8,
            slope: 128.0,
        },
        women: TeeRating {
            rating: 73.4,
            slope: 131.0,
        },
    }
}

pub fn player(id: i64, name: &str, handicap_index: f64) -> Player {
    Player {
        id,
        name: name.to_string(),
        handicap_index,
    }
}

/// A full-18 round on the standard course with a 10.00 stake.
pub fn round_with(format: WagerFormat, players: &[Player]) -> Round {
    Round {
        id: 42,
        format,
        scope: RoundScope::Full18,
        bet_cents: 10_00,
        course: Some(standard_course()),
        tee: Some(standard_tee()),
        tee_gender: Gender::Men,
        rating: 0.0,
        slope: 0.0,
        par: 0,
        presses: Vec::new(),
        players: players.iter().map(PlayerScore::new).collect(),
        played_on: NaiveDate::from_ymd_opt(2025, 6, 14).expect("valid date"),
    }
}

/// A round with no course/tee selection, using the flat legacy fields.
pub fn flat_round(format: WagerFormat, players: &[Player]) -> Round {
    Round {
        id: 43,
        format,
        scope: RoundScope::Full18,
        bet_cents: 10_00,
        course: None,
        tee: None,
        tee_gender: Gender::Men,
        rating: 72.0,
        slope: 113.0,
        par: 72,
        presses: Vec::new(),
        players: players.iter().map(PlayerScore::new).collect(),
        played_on: NaiveDate::from_ymd_opt(2025, 6, 14).expect("valid date"),
    }
}

/// Record gross scores starting at hole 1, one per entry.
pub fn record_from_first(round: &mut Round, player_id: i64, grosses: &[u32]) {
    for (i, &gross) in grosses.iter().enumerate() {
        round
            .record_score(
                player_id,
                HoleScore {
                    hole_number: i as u8 + 1,
                    gross,
                },
            )
            .expect("player in round");
    }
}

/// Record all 18 holes at par, with the listed holes adjusted by the
/// given stroke delta (negative for birdies, positive for bogeys).
pub fn record_par_round_with(round: &mut Round, player_id: i64, adjustments: &[(u8, i32)]) {
    for i in 0..18u8 {
        let hole = i + 1;
        let par = i32::from(PARS[usize::from(i)]);
        let delta = adjustments
            .iter()
            .find(|&&(h, _)| h == hole)
            .map_or(0, |&(_, d)| d);
        let gross = u32::try_from(par + delta).expect("gross stays positive");
        round
            .record_score(
                player_id,
                HoleScore {
                    hole_number: hole,
                    gross,
                },
            )
            .expect("player in round");
    }
}

/// Record all 18 holes at par, with bogeys on the listed holes.
pub fn record_even_round(round: &mut Round, player_id: i64, bogeys_on: &[u8]) {
    let adjustments: Vec<(u8, i32)> = bogeys_on.iter().map(|&h| (h, 1)).collect();
    record_par_round_with(round, player_id, &adjustments);
}

pub fn winnings_of(round: &Round, player_id: i64) -> i64 {
    round
        .player(player_id)
        .expect("player in round")
        .winnings_cents
}

pub fn assert_zero_sum(round: &Round) {
    let total: i64 = round.players.iter().map(|p| p.winnings_cents).sum();
    assert_eq!(
        total, 0,
        "winnings must sum to zero, got {total} for {}",
        round.format
    );
}

/// In-memory stand-in for the app's round aggregator.
pub struct MemoryStore {
    rounds: Mutex<HashMap<i64, Round>>,
}

impl MemoryStore {
    pub fn with_round(round: Round) -> Self {
        let mut rounds = HashMap::new();
        rounds.insert(round.id, round);
        Self {
            rounds: Mutex::new(rounds),
        }
    }

    pub fn winnings(&self, round_id: i64, player_id: i64) -> Option<i64> {
        let rounds = self.rounds.lock().expect("store lock");
        rounds
            .get(&round_id)
            .and_then(|r| r.player(player_id))
            .map(|p| p.winnings_cents)
    }
}

#[async_trait]
impl RoundStore for MemoryStore {
    async fn load_round(&self, round_id: i64) -> Result<Round, StoreError> {
        let rounds = self.rounds.lock().expect("store lock");
        rounds
            .get(&round_id)
            .cloned()
            .ok_or_else(|| StoreError::new(format!("round {round_id} not found")))
    }

    async fn store_winnings(
        &self,
        round_id: i64,
        winnings: &[(i64, i64)],
    ) -> Result<(), StoreError> {
        let mut rounds = self.rounds.lock().expect("store lock");
        let round = rounds
            .get_mut(&round_id)
            .ok_or_else(|| StoreError::new(format!("round {round_id} not found")))?;
        for &(player_id, cents) in winnings {
            if let Some(player) = round.players.iter_mut().find(|p| p.player_id == player_id) {
                player.winnings_cents = cents;
            }
        }
        Ok(())
    }
}
