mod common;

use common::{
    assert_zero_sum, player, record_from_first, record_par_round_with, round_with, winnings_of,
};
use golf_wagers::model::WagerFormat;
use golf_wagers::wager::{SettlementConfig, settle};

#[test]
fn lone_low_net_takes_the_pot() {
    let players = [
        player(1, "Ash", 0.0),
        player(2, "Blake", 0.0),
        player(3, "Casey", 0.0),
    ];
    let mut round = round_with(WagerFormat::StrokePlay, &players);

    record_par_round_with(&mut round, 1, &[(2, -1), (11, -1)]);
    record_par_round_with(&mut round, 2, &[(6, 1)]);
    record_par_round_with(&mut round, 3, &[(1, 1), (9, 1)]);

    settle(&mut round, &SettlementConfig::default());

    // Pot 30.00; winner keeps pot minus own stake.
    assert_eq!(winnings_of(&round, 1), 20_00);
    assert_eq!(winnings_of(&round, 2), -10_00);
    assert_eq!(winnings_of(&round, 3), -10_00);
    assert_zero_sum(&round);
}

#[test]
fn tied_low_nets_split_the_pot() {
    let players = [
        player(1, "Ash", 0.0),
        player(2, "Blake", 0.0),
        player(3, "Casey", 0.0),
    ];
    let mut round = round_with(WagerFormat::StrokePlay, &players);

    // Nets 70 / 70 / 75: pot 30.00 splits 15.00 each to the tied pair.
    record_par_round_with(&mut round, 1, &[(1, -1), (8, -1)]);
    record_par_round_with(&mut round, 2, &[(4, -1), (13, -1)]);
    record_par_round_with(&mut round, 3, &[(2, 1), (5, 1), (10, 1)]);

    settle(&mut round, &SettlementConfig::default());

    assert_eq!(winnings_of(&round, 1), 5_00);
    assert_eq!(winnings_of(&round, 2), 5_00);
    assert_eq!(winnings_of(&round, 3), -10_00);
    assert_zero_sum(&round);
}

#[test]
fn indivisible_pot_splits_to_the_cent() {
    let players = [
        player(1, "Ash", 0.0),
        player(2, "Blake", 0.0),
        player(3, "Casey", 0.0),
    ];
    let mut round = round_with(WagerFormat::StrokePlay, &players);
    round.bet_cents = 10_01;

    record_par_round_with(&mut round, 1, &[(1, -1)]);
    record_par_round_with(&mut round, 2, &[(4, -1)]);
    record_par_round_with(&mut round, 3, &[]);

    settle(&mut round, &SettlementConfig::default());

    // Pot 30.03 across two winners: 15.02 to the first in round order,
    // 15.01 to the second, each minus the 10.01 stake.
    assert_eq!(winnings_of(&round, 1), 5_01);
    assert_eq!(winnings_of(&round, 2), 5_00);
    assert_eq!(winnings_of(&round, 3), -10_01);
    assert_zero_sum(&round);
}

#[test]
fn handicap_strokes_rank_net_not_gross() {
    let players = [player(1, "Ash", 0.0), player(2, "Blake", 11.0)];
    let mut round = round_with(WagerFormat::StrokePlay, &players);

    // Blake's 12 course strokes turn a gross 80 into a net 68 against
    // Ash's even-par 72.
    record_par_round_with(&mut round, 1, &[]);
    record_par_round_with(
        &mut round,
        2,
        &[
            (1, 1),
            (2, 1),
            (4, 1),
            (6, 1),
            (9, 1),
            (12, 1),
            (15, 1),
            (18, 1),
        ],
    );

    settle(&mut round, &SettlementConfig::default());

    assert_eq!(winnings_of(&round, 1), -10_00);
    assert_eq!(winnings_of(&round, 2), 10_00);
    assert_zero_sum(&round);
}

#[test]
fn team_formats_fall_back_to_stroke_play() {
    for format in [
        WagerFormat::Wolf,
        WagerFormat::BestBall,
        WagerFormat::Scramble,
        WagerFormat::Custom,
    ] {
        let players = [
            player(1, "Ash", 0.0),
            player(2, "Blake", 0.0),
            player(3, "Casey", 0.0),
        ];
        let mut round = round_with(format, &players);
        record_par_round_with(&mut round, 1, &[(2, -1), (11, -1)]);
        record_par_round_with(&mut round, 2, &[(6, 1)]);
        record_par_round_with(&mut round, 3, &[(1, 1), (9, 1)]);

        settle(&mut round, &SettlementConfig::default());

        assert_eq!(winnings_of(&round, 1), 20_00, "{format} winner");
        assert_eq!(winnings_of(&round, 2), -10_00, "{format} loser");
        assert_eq!(winnings_of(&round, 3), -10_00, "{format} loser");
        assert_zero_sum(&round);
    }
}

#[test]
fn fewer_than_two_scored_players_is_a_no_op() {
    let players = [
        player(1, "Ash", 0.0),
        player(2, "Blake", 0.0),
        player(3, "Casey", 0.0),
    ];
    let mut round = round_with(WagerFormat::StrokePlay, &players);
    record_par_round_with(&mut round, 1, &[]);

    settle(&mut round, &SettlementConfig::default());

    for score in &round.players {
        assert_eq!(score.winnings_cents, 0);
    }
}

#[test]
fn unscored_players_still_ante_into_the_pot() {
    let players = [
        player(1, "Ash", 0.0),
        player(2, "Blake", 0.0),
        player(3, "Casey", 0.0),
    ];
    let mut round = round_with(WagerFormat::StrokePlay, &players);

    // Casey never recorded a hole but is listed in the round, so the
    // pot still counts three stakes.
    record_from_first(&mut round, 1, &[4, 4, 3, 5, 4]);
    record_from_first(&mut round, 2, &[5, 4, 3, 5, 4]);

    settle(&mut round, &SettlementConfig::default());

    assert_eq!(winnings_of(&round, 1), 20_00);
    assert_eq!(winnings_of(&round, 2), -10_00);
    assert_eq!(winnings_of(&round, 3), -10_00);
    assert_zero_sum(&round);
}
