use crate::handicap::StrokeSheet;
use crate::model::PlayerScore;

/// Stroke play settlement: lowest net total over played holes takes the
/// pot of one stake per listed player. A k-way tie splits the pot across
/// the tied players; indivisible cents go to the earliest tied players in
/// round order so the settlement stays exactly zero-sum.
///
/// Also the documented fallback for Wolf, Best Ball, Scramble, and Custom
/// rounds. No-op unless at least two players have a recorded hole.
pub fn settle(players: &mut [PlayerScore], bet_cents: i64, sheet: &StrokeSheet) {
    let scored: Vec<usize> = (0..players.len())
        .filter(|&i| players[i].holes_played() > 0)
        .collect();
    if scored.len() < 2 {
        return;
    }

    let nets: Vec<(usize, i64)> = scored
        .iter()
        .map(|&i| (i, players[i].net_total(sheet)))
        .collect();
    let min_net = nets.iter().map(|&(_, net)| net).min().unwrap_or(0);
    let winners: Vec<usize> = nets
        .iter()
        .filter(|&&(_, net)| net == min_net)
        .map(|&(i, _)| i)
        .collect();

    let player_count = players.len() as i64;
    let pot = bet_cents * player_count;
    let tied = winners.len() as i64;
    // div_euclid keeps the remainder non-negative, so the split stays
    // exact even for a negative pot.
    let share = pot.div_euclid(tied);
    let remainder = pot.rem_euclid(tied);

    for (rank, &winner) in winners.iter().enumerate() {
        let extra = i64::from((rank as i64) < remainder);
        players[winner].winnings_cents += share + extra - bet_cents;
    }
    for i in 0..players.len() {
        if !winners.contains(&i) {
            players[i].winnings_cents -= bet_cents;
        }
    }
}
