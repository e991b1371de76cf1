use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Men,
    Women,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Men => "men",
            Gender::Women => "women",
        };
        write!(f, "{s}")
    }
}

/// Rating and slope for one gender on one tee.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct TeeRating {
    pub rating: f64,
    pub slope: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Tee {
    pub name: String,
    pub men: TeeRating,
    pub women: TeeRating,
}

impl Tee {
    #[must_use]
    pub fn rating_for(&self, gender: Gender) -> TeeRating {
        match gender {
            Gender::Men => self.men,
            Gender::Women => self.women,
        }
    }
}

/// One hole on a course card. `difficulty_rank` 1 is the hardest hole and
/// receives a handicap stroke first. Yardage is carried for display only.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct Hole {
    pub number: u8,
    pub par: u8,
    pub difficulty_rank: u8,
    pub yards: u16,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub holes: Vec<Hole>,
}

impl Course {
    #[must_use]
    pub fn par(&self) -> i32 {
        self.holes.iter().map(|h| i32::from(h.par)).sum()
    }

    #[must_use]
    pub fn hole(&self, number: u8) -> Option<&Hole> {
        self.holes.iter().find(|h| h.number == number)
    }

    #[must_use]
    pub fn hole_count(&self) -> u8 {
        u8::try_from(self.holes.len()).unwrap_or(u8::MAX)
    }

    /// Check the card invariants stroke allocation depends on: hole numbers
    /// unique, difficulty ranks a permutation of 1..=N.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidCourse` describing the first violation.
    pub fn validate(&self) -> Result<(), EngineError> {
        let n = self.holes.len();
        let mut seen_numbers = vec![false; n + 1];
        let mut seen_ranks = vec![false; n + 1];

        for hole in &self.holes {
            let number = usize::from(hole.number);
            if number == 0 || number > n {
                return Err(EngineError::InvalidCourse(format!(
                    "hole number {number} out of range for {n} holes"
                )));
            }
            if seen_numbers[number] {
                return Err(EngineError::InvalidCourse(format!(
                    "duplicate hole number {number}"
                )));
            }
            seen_numbers[number] = true;

            let rank = usize::from(hole.difficulty_rank);
            if rank == 0 || rank > n {
                return Err(EngineError::InvalidCourse(format!(
                    "difficulty rank {rank} out of range on hole {number}"
                )));
            }
            if seen_ranks[rank] {
                return Err(EngineError::InvalidCourse(format!(
                    "duplicate difficulty rank {rank}"
                )));
            }
            seen_ranks[rank] = true;
        }

        Ok(())
    }
}
