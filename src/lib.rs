pub mod error;
pub mod handicap;
pub mod model;
pub mod storage;
pub mod wager;

pub use error::EngineError;
pub use handicap::{StrokeSheet, course_handicap, strokes_received};
pub use wager::{SettlementConfig, settle, try_settle};
