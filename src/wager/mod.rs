pub mod compare;
pub mod match_play;
pub mod nassau;
pub mod skins;
pub mod status;
pub mod stroke_play;

pub use compare::*;
pub use skins::{SkinWin, SkinsLedger};
pub use status::*;

use crate::error::EngineError;
use crate::handicap::StrokeSheet;
use crate::model::{Round, WagerFormat};

/// Engine-wide settlement options.
///
/// `allow_double_strokes`: on an 18-hole card, give a second stroke on the
/// hardest holes to course handicaps above 18. Off by default; the default
/// caps every hole at one stroke.
///
/// `reject_non_positive_bets`: refuse to settle a zero or negative stake
/// instead of computing with it. Off by default, matching the permissive
/// behavior the surrounding app always had.
#[derive(Clone, Copy, Debug)]
pub struct SettlementConfig {
    pub allow_double_strokes: bool,
    pub reject_non_positive_bets: bool,
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self {
            allow_double_strokes: false,
            reject_non_positive_bets: false,
        }
    }
}

/// Settle a round: reset every player's winnings, build the stroke sheet,
/// and dispatch once on the wager format. Precondition mismatches (wrong
/// player count for a two-player format, too few scored players, no scored
/// holes) leave all winnings at the freshly reset zero. Re-running on
/// unchanged scores is idempotent.
pub fn settle(round: &mut Round, config: &SettlementConfig) {
    for player in &mut round.players {
        player.winnings_cents = 0;
    }
    if config.reject_non_positive_bets && round.bet_cents <= 0 {
        return;
    }

    let sheet = StrokeSheet::for_round(round, config.allow_double_strokes);
    let holes = round.scoped_holes();
    let bet = round.bet_cents;
    let presses = round.presses.clone();

    match round.format {
        WagerFormat::Skins => skins::settle_carryover(&mut round.players, &holes, bet, &sheet),
        WagerFormat::TotalSkins => skins::settle_total(&mut round.players, bet, &sheet),
        WagerFormat::MatchPlay => match_play::settle(&mut round.players, &holes, bet, &sheet),
        WagerFormat::Nassau => {
            nassau::settle(&mut round.players, &holes, &presses, bet, &sheet);
        }
        WagerFormat::StrokePlay
        | WagerFormat::Wolf
        | WagerFormat::BestBall
        | WagerFormat::Scramble
        | WagerFormat::Custom => stroke_play::settle(&mut round.players, bet, &sheet),
    }
}

/// Settle, but surface the stricter stake check as an error instead of a
/// silent no-op.
///
/// # Errors
/// Returns `EngineError::InvalidWager` when `reject_non_positive_bets` is
/// set and the round's stake is zero or negative; winnings are still reset.
pub fn try_settle(round: &mut Round, config: &SettlementConfig) -> Result<(), EngineError> {
    if config.reject_non_positive_bets && round.bet_cents <= 0 {
        for player in &mut round.players {
            player.winnings_cents = 0;
        }
        return Err(EngineError::InvalidWager(format!(
            "stake must be positive, got {}",
            round.bet_cents
        )));
    }
    settle(round, config);
    Ok(())
}
