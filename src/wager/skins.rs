use crate::handicap::StrokeSheet;
use crate::model::PlayerScore;
use crate::wager::compare::net_score;
use serde::{Deserialize, Serialize};

/// One decided skin: the hole, who took it, and how many stakes it was
/// worth (1 plus any carried from tied holes).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkinWin {
    pub hole_number: u8,
    pub player_id: i64,
    pub skins: u32,
}

/// Outcome of walking the scoped holes in order: skins decided so far,
/// the count still riding on the next hole, and the first hole the walk
/// could not evaluate (not yet played by everyone), if any.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SkinsLedger {
    pub wins: Vec<SkinWin>,
    pub carried: u32,
    pub next_hole: Option<u8>,
}

/// Walk holes in play order. A hole counts only once every player has a
/// score on it; the walk stops at the first hole where that is not yet
/// true, so a partial round settles its early holes and leaves the rest
/// riding. Strict lowest net takes the hole; any tie carries the stake.
#[must_use]
pub fn ledger(players: &[PlayerScore], holes: &[u8], sheet: &StrokeSheet) -> SkinsLedger {
    if players.is_empty() {
        return SkinsLedger {
            wins: Vec::new(),
            carried: 0,
            next_hole: holes.first().copied(),
        };
    }

    let mut wins = Vec::new();
    let mut carried: u32 = 0;

    for &hole in holes {
        let mut nets = Vec::with_capacity(players.len());
        for player in players {
            match net_score(player, hole, sheet) {
                Some(net) => nets.push((player.player_id, net)),
                None => {
                    return SkinsLedger {
                        wins,
                        carried,
                        next_hole: Some(hole),
                    };
                }
            }
        }

        let min_net = nets.iter().map(|&(_, net)| net).min().unwrap_or(0);
        let mut holders = nets.iter().filter(|&&(_, net)| net == min_net);
        let first_holder = holders.next();
        if let (Some(&(player_id, _)), None) = (first_holder, holders.next()) {
            wins.push(SkinWin {
                hole_number: hole,
                player_id,
                skins: carried + 1,
            });
            carried = 0;
        } else {
            carried += 1;
        }
    }

    SkinsLedger {
        wins,
        carried,
        next_hole: None,
    }
}

/// Hole-by-hole skins with carry-over, the canonical skins settlement.
/// Each decided skin pays its holder one stake per skin from every other
/// player. A pot still riding when the holes run out is won by nobody.
/// No-op with fewer than two players.
pub fn settle_carryover(
    players: &mut [PlayerScore],
    holes: &[u8],
    bet_cents: i64,
    sheet: &StrokeSheet,
) {
    if players.len() < 2 {
        return;
    }
    let decided = ledger(players, holes, sheet);
    let others = players.len() as i64 - 1;

    for win in &decided.wins {
        let value = i64::from(win.skins) * bet_cents;
        for player in players.iter_mut() {
            if player.player_id == win.player_id {
                player.winnings_cents += value * others;
            } else {
                player.winnings_cents -= value;
            }
        }
    }
}

/// Round-total skins, the whole-round variant: the strict lowest net total
/// among players with any recorded hole wins one stake from every other
/// listed player; a tie for the minimum voids the pot. No-op unless at
/// least two players have scores.
pub fn settle_total(players: &mut [PlayerScore], bet_cents: i64, sheet: &StrokeSheet) {
    let nets: Vec<(usize, i64)> = (0..players.len())
        .filter(|&i| players[i].holes_played() > 0)
        .map(|i| (i, players[i].net_total(sheet)))
        .collect();
    if nets.len() < 2 {
        return;
    }

    let min_net = nets.iter().map(|&(_, net)| net).min().unwrap_or(0);
    let mut holders = nets.iter().filter(|&&(_, net)| net == min_net);
    let first_holder = holders.next();
    let (Some(&(winner, _)), None) = (first_holder, holders.next()) else {
        return;
    };

    let others = players.len() as i64 - 1;
    for (i, player) in players.iter_mut().enumerate() {
        if i == winner {
            player.winnings_cents += bet_cents * others;
        } else {
            player.winnings_cents -= bet_cents;
        }
    }
}
