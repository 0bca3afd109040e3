use broadside::{
    AttackOutcome, Cell, Coord, GameError, HuntAi, Match, Orientation, Phase, Side, BOARD_SIZE,
    FLEET, NUM_SHIPS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn started(seed: u64) -> (Match, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Match::new();
    game.randomize_human_fleet(&mut rng).unwrap();
    game.start(&mut rng).unwrap();
    (game, rng)
}

fn first_cell(game: &Match, side: Side, want_ship: bool) -> Coord {
    let board = game.player(side).board();
    (0..BOARD_SIZE)
        .flat_map(|y| (0..BOARD_SIZE).map(move |x| Coord::new(x, y)))
        .find(|&at| matches!(board.cell(at).unwrap(), Cell::Occupied(_)) == want_ship)
        .unwrap()
}

#[test]
fn test_new_match_is_in_placement() {
    let game = Match::new();
    assert_eq!(game.phase(), Phase::Placement);
    assert_eq!(game.turn(), Side::Human);
    assert_eq!(game.turn_count(), 0);
    assert_eq!(game.winner(), None);
    assert_eq!(game.next_ship_to_place(), Some(FLEET[0]));
}

#[test]
fn test_cannot_attack_during_placement() {
    let mut game = Match::new();
    assert_eq!(
        game.human_attack(Coord::new(0, 0)),
        Err(GameError::WrongPhase {
            expected: Phase::Active,
            actual: Phase::Placement
        })
    );
}

#[test]
fn test_start_requires_full_fleet() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut game = Match::new();
    game.place_next_ship(Coord::new(0, 0), Orientation::Horizontal)
        .unwrap();
    assert_eq!(
        game.start(&mut rng),
        Err(GameError::FleetIncomplete {
            placed: 1,
            required: NUM_SHIPS
        })
    );
    assert_eq!(game.phase(), Phase::Placement);
}

#[test]
fn test_manual_placement_walks_the_fleet() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut game = Match::new();
    let spots = [(0, 0), (0, 2), (0, 4), (0, 6), (0, 8)];
    for (i, (x, y)) in spots.into_iter().enumerate() {
        assert_eq!(game.next_ship_to_place(), Some(FLEET[i]));
        game.place_next_ship(Coord::new(x, y), Orientation::Horizontal)
            .unwrap();
    }
    assert_eq!(game.next_ship_to_place(), None);
    assert_eq!(
        game.place_next_ship(Coord::new(9, 0), Orientation::Vertical),
        Err(GameError::FleetComplete)
    );
    game.start(&mut rng).unwrap();
    assert_eq!(game.phase(), Phase::Active);
    assert_eq!(game.computer().board().ships().len(), NUM_SHIPS);
}

#[test]
fn test_rejected_placement_keeps_cursor() {
    let mut game = Match::new();
    game.place_next_ship(Coord::new(0, 0), Orientation::Horizontal)
        .unwrap();
    let err = game
        .place_next_ship(Coord::new(0, 1), Orientation::Horizontal)
        .unwrap_err();
    assert!(matches!(err, GameError::Board(_)));
    assert_eq!(game.next_ship_to_place(), Some(FLEET[1]));
}

#[test]
fn test_randomize_replaces_partial_fleet() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut game = Match::new();
    game.place_next_ship(Coord::new(0, 0), Orientation::Horizontal)
        .unwrap();
    game.randomize_human_fleet(&mut rng).unwrap();
    assert_eq!(game.human().board().ships().len(), NUM_SHIPS);
    assert_eq!(game.next_ship_to_place(), None);
}

#[test]
fn test_miss_passes_turn_and_counts() {
    let (mut game, _) = started(4);
    let water = first_cell(&game, Side::Computer, false);
    let shot = game.human_attack(water).unwrap();
    assert_eq!(shot.outcome, AttackOutcome::Miss);
    assert_eq!(game.turn(), Side::Computer);
    assert_eq!(game.turn_count(), 1);
    assert_eq!(
        game.human_attack(Coord::new(0, 0)),
        Err(GameError::NotYourTurn(Side::Human))
    );
}

#[test]
fn test_hit_keeps_turn_and_repeat_is_free() {
    let (mut game, _) = started(5);
    let target = first_cell(&game, Side::Computer, true);
    assert!(game.human_attack(target).unwrap().outcome.is_hit());
    assert_eq!(game.turn(), Side::Human);

    let again = game.human_attack(target).unwrap();
    assert_eq!(again.outcome, AttackOutcome::AlreadyAttacked);
    assert_eq!(game.turn(), Side::Human);
    assert_eq!(game.turn_count(), 0);
}

#[test]
fn test_computer_turn_fires_until_miss() {
    let (mut game, mut rng) = started(6);
    let water = first_cell(&game, Side::Computer, false);
    game.human_attack(water).unwrap();
    assert_eq!(game.turn_count(), 1);

    let shots = game.computer_turn(&mut rng).unwrap();
    assert_eq!(game.turn_count(), 1);
    let (last, rest) = shots.split_last().unwrap();
    assert!(rest.iter().all(|s| s.outcome.is_hit()));
    if game.phase() == Phase::Active {
        assert_eq!(last.outcome, AttackOutcome::Miss);
        assert_eq!(game.turn(), Side::Human);
    }
    assert_eq!(game.human().board().shots_fired(), shots.len());
    assert_eq!(
        game.computer_turn(&mut rng),
        Err(GameError::NotYourTurn(Side::Computer))
    );
}

#[test]
fn test_turn_count_only_grows_on_pass_to_computer() {
    for seed in 0..30 {
        let (mut game, mut rng) = started(seed);
        let mut stand_in = HuntAi::new();
        while game.phase() == Phase::Active {
            let before = game.turn_count();
            match game.turn() {
                Side::Human => {
                    let shots = game.human_turn(&mut stand_in, &mut rng).unwrap();
                    let passed = shots.last().map(|s| s.outcome) == Some(AttackOutcome::Miss);
                    let expected = if passed { before + 1 } else { before };
                    assert_eq!(game.turn_count(), expected);
                }
                Side::Computer => {
                    let shots = game.computer_turn(&mut rng).unwrap();
                    assert_eq!(game.turn_count(), before);
                    if shots.last().map(|s| s.outcome) == Some(AttackOutcome::Miss) {
                        assert_eq!(game.turn(), Side::Human);
                    }
                }
            }
        }
    }
}

#[test]
fn test_sinking_last_ship_ends_match_immediately() {
    let (mut game, mut rng) = started(7);
    let targets: Vec<Coord> = game
        .computer()
        .board()
        .ships()
        .iter()
        .flat_map(|s| s.coordinates().to_vec())
        .collect();
    let (last, rest) = targets.split_last().unwrap();
    for &at in rest {
        game.human_attack(at).unwrap();
        assert_eq!(game.phase(), Phase::Active);
        assert_eq!(game.turn(), Side::Human);
    }
    let shot = game.human_attack(*last).unwrap();
    assert_eq!(shot.outcome, AttackOutcome::Sunk);
    assert_eq!(game.phase(), Phase::Ended);
    assert_eq!(game.winner(), Some(Side::Human));

    // Ended is terminal
    assert!(matches!(
        game.human_attack(Coord::new(0, 0)),
        Err(GameError::WrongPhase { .. })
    ));
    assert!(matches!(
        game.computer_attack(&mut rng),
        Err(GameError::WrongPhase { .. })
    ));
    assert_eq!(game.winner(), Some(Side::Human));
}

#[test]
fn test_full_match_between_hunters() {
    for seed in 0..20 {
        let (mut game, mut rng) = started(seed);
        let mut stand_in = HuntAi::new();
        let mut rounds = 0;
        while game.phase() == Phase::Active {
            match game.turn() {
                Side::Human => {
                    game.human_turn(&mut stand_in, &mut rng).unwrap();
                }
                Side::Computer => {
                    game.computer_turn(&mut rng).unwrap();
                }
            }
            rounds += 1;
            assert!(rounds < 400, "match did not finish");
        }
        let winner = game.winner().unwrap();
        assert!(game.player(winner.opponent()).board().all_ships_sunk());
        assert!(!game.player(winner).board().all_ships_sunk());
    }
}
