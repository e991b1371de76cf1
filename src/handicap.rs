use crate::model::Round;
use ahash::RandomState;
use std::collections::HashMap;

/// Course handicap from handicap index, tee rating, slope, and par, per
/// the standard formula `index * slope / 113 + (rating - par)`, rounded
/// half away from zero.
///
/// Total over all inputs. Negative results are meaningful: a low index on
/// an easy card yields a handicap that never receives a stroke.
#[must_use]
pub fn course_handicap(handicap_index: f64, rating: f64, slope: f64, par: i32) -> i32 {
    let exact = handicap_index * slope / 113.0 + (rating - f64::from(par));
    exact.round() as i32
}

/// Strokes received on a hole of the given difficulty rank.
///
/// One stroke when the course handicap meets the rank. With `allow_double`
/// set, on an 18-hole card a handicap above 18 adds a second stroke on
/// holes ranked `1..=handicap - 18`.
#[must_use]
pub fn strokes_received(
    course_handicap: i32,
    difficulty_rank: u8,
    hole_count: u8,
    allow_double: bool,
) -> u32 {
    let rank = i32::from(difficulty_rank);
    let mut strokes = 0;
    if course_handicap >= rank {
        strokes += 1;
    }
    if allow_double && hole_count == 18 && course_handicap > 18 && course_handicap - 18 >= rank {
        strokes += 1;
    }
    strokes
}

/// Per-round stroke entitlement cache: every player's strokes on every
/// hole of the card, computed once per settlement and shared by all
/// strategies so net scores agree everywhere.
#[derive(Debug, Clone)]
pub struct StrokeSheet {
    strokes: HashMap<(i64, u8), u32, RandomState>,
    course_handicaps: HashMap<i64, i32, RandomState>,
}

impl StrokeSheet {
    /// Build the sheet for a round. Allocation runs over the selected
    /// course card; without one, an 18-hole card with difficulty rank
    /// equal to hole number stands in.
    #[must_use]
    pub fn for_round(round: &Round, allow_double: bool) -> Self {
        let rating = round.effective_rating();
        let slope = round.effective_slope();
        let par = round.effective_par();

        let card: Vec<(u8, u8)> = match &round.course {
            Some(course) => course
                .holes
                .iter()
                .map(|h| (h.number, h.difficulty_rank))
                .collect(),
            None => (1..=18).map(|n| (n, n)).collect(),
        };
        let hole_count = u8::try_from(card.len()).unwrap_or(u8::MAX);

        let mut strokes: HashMap<(i64, u8), u32, RandomState> = HashMap::default();
        let mut course_handicaps: HashMap<i64, i32, RandomState> = HashMap::default();

        for player in &round.players {
            let handicap = course_handicap(player.handicap_index, rating, slope, par);
            course_handicaps.insert(player.player_id, handicap);
            for &(number, rank) in &card {
                let received = strokes_received(handicap, rank, hole_count, allow_double);
                if received > 0 {
                    strokes.insert((player.player_id, number), received);
                }
            }
        }

        Self {
            strokes,
            course_handicaps,
        }
    }

    /// Strokes the player receives on the hole; 0 for unknown players or
    /// holes off the card.
    #[must_use]
    pub fn strokes(&self, player_id: i64, hole_number: u8) -> u32 {
        self.strokes
            .get(&(player_id, hole_number))
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn course_handicap_for(&self, player_id: i64) -> Option<i32> {
        self.course_handicaps.get(&player_id).copied()
    }
}
