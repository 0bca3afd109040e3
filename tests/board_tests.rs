use broadside::{AttackOutcome, Board, BoardError, Cell, Coord, Orientation, ShipDef, FLEET};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn def(len: usize) -> ShipDef {
    ShipDef::new("Test", len)
}

#[test]
fn test_horizontal_cruiser_scenario() {
    let mut board = Board::new();
    board
        .place_ship(def(3), Coord::new(2, 2), Orientation::Horizontal)
        .unwrap();

    assert_eq!(board.resolve_attack(Coord::new(2, 2)).unwrap(), AttackOutcome::Hit);
    assert_eq!(board.resolve_attack(Coord::new(3, 2)).unwrap(), AttackOutcome::Hit);
    assert_eq!(board.resolve_attack(Coord::new(4, 2)).unwrap(), AttackOutcome::Sunk);
    assert_eq!(
        board.resolve_attack(Coord::new(4, 2)).unwrap(),
        AttackOutcome::AlreadyAttacked
    );
    assert!(board.all_ships_sunk());
}

#[test]
fn test_ship_directly_below_is_rejected() {
    let mut board = Board::new();
    board
        .place_ship(def(5), Coord::new(0, 0), Orientation::Horizontal)
        .unwrap();
    assert_eq!(
        board.place_ship(def(2), Coord::new(0, 1), Orientation::Horizontal),
        Err(BoardError::TooClose)
    );
    assert!(!board.can_place(2, Coord::new(0, 1), Orientation::Horizontal));
    assert_eq!(board.ships().len(), 1);
}

#[test]
fn test_diagonal_contact_is_rejected() {
    let mut board = Board::new();
    board
        .place_ship(def(2), Coord::new(3, 3), Orientation::Horizontal)
        .unwrap();
    // touches (4, 3) at the corner
    assert!(!board.can_place(3, Coord::new(5, 4), Orientation::Vertical));
    // one column further is fine
    assert!(board.can_place(3, Coord::new(6, 4), Orientation::Vertical));
}

#[test]
fn test_overlap_is_rejected() {
    let mut board = Board::new();
    board
        .place_ship(def(4), Coord::new(5, 0), Orientation::Vertical)
        .unwrap();
    assert_eq!(
        board.place_ship(def(4), Coord::new(5, 0), Orientation::Vertical),
        Err(BoardError::TooClose)
    );
    assert_eq!(
        board.place_ship(def(3), Coord::new(4, 2), Orientation::Horizontal),
        Err(BoardError::TooClose)
    );
}

#[test]
fn test_out_of_bounds_placement_leaves_board_untouched() {
    let mut board = Board::new();
    assert_eq!(
        board.place_ship(def(5), Coord::new(6, 0), Orientation::Horizontal),
        Err(BoardError::OutOfBounds { x: 10, y: 0 })
    );
    assert_eq!(
        board.place_ship(def(2), Coord::new(0, 9), Orientation::Vertical),
        Err(BoardError::OutOfBounds { x: 0, y: 10 })
    );
    assert!(board.ships().is_empty());
    for y in 0..10 {
        for x in 0..10 {
            assert_eq!(board.cell(Coord::new(x, y)).unwrap(), Cell::Empty);
        }
    }
    // fits exactly against the edge
    assert!(board.can_place(5, Coord::new(5, 0), Orientation::Horizontal));
}

#[test]
fn test_placement_records_coordinates() {
    let mut board = Board::new();
    let id = board
        .place_ship(FLEET[2], Coord::new(1, 6), Orientation::Vertical)
        .unwrap();
    let ship = board.ship(id).unwrap();
    assert_eq!(
        ship.coordinates(),
        &[Coord::new(1, 6), Coord::new(1, 7), Coord::new(1, 8)]
    );
    assert_eq!(ship.name(), "Cruiser");
    assert_eq!(board.cell(Coord::new(1, 7)).unwrap(), Cell::Occupied(id));
}

#[test]
fn test_footprint_clips_preview() {
    let board = Board::new();
    let cells = board.footprint(4, Coord::new(8, 3), Orientation::Horizontal);
    assert_eq!(cells, vec![Coord::new(8, 3), Coord::new(9, 3)]);
}

#[test]
fn test_footprint_far_off_board_is_empty() {
    let mut board = Board::new();
    assert!(board
        .footprint(3, Coord::new(usize::MAX, 0), Orientation::Horizontal)
        .is_empty());
    assert!(board
        .footprint(3, Coord::new(0, usize::MAX - 1), Orientation::Vertical)
        .is_empty());
    assert_eq!(
        board.place_ship(def(3), Coord::new(usize::MAX, 0), Orientation::Horizontal),
        Err(BoardError::OutOfBounds {
            x: usize::MAX,
            y: 0
        })
    );
    assert!(board.ships().is_empty());
}

#[test]
fn test_zero_length_ship_is_rejected() {
    let mut board = Board::new();
    assert!(!board.can_place(0, Coord::new(0, 0), Orientation::Horizontal));
    assert!(matches!(
        board.place_ship(def(0), Coord::new(0, 0), Orientation::Horizontal),
        Err(BoardError::InvariantViolation(_))
    ));
    assert!(board.ships().is_empty());
    assert_eq!(board.cell(Coord::new(0, 0)).unwrap(), Cell::Empty);
}

#[test]
fn test_miss_then_repeat() {
    let mut board = Board::new();
    assert_eq!(board.resolve_attack(Coord::new(7, 7)).unwrap(), AttackOutcome::Miss);
    assert_eq!(
        board.resolve_attack(Coord::new(7, 7)).unwrap(),
        AttackOutcome::AlreadyAttacked
    );
    assert_eq!(board.cell(Coord::new(7, 7)).unwrap(), Cell::Miss);
    assert_eq!(board.shots_fired(), 1);
}

#[test]
fn test_attack_off_board_is_an_error() {
    let mut board = Board::new();
    assert_eq!(
        board.resolve_attack(Coord::new(10, 0)),
        Err(BoardError::OutOfBounds { x: 10, y: 0 })
    );
    assert!(!board.is_attacked(Coord::new(10, 0)));
}

#[test]
fn test_hit_cells_keep_ship_reference() {
    let mut board = Board::new();
    let id = board
        .place_ship(def(2), Coord::new(0, 0), Orientation::Vertical)
        .unwrap();
    board.resolve_attack(Coord::new(0, 0)).unwrap();
    assert_eq!(board.cell(Coord::new(0, 0)).unwrap(), Cell::Hit(id));
    assert_eq!(board.sunk_ships().count(), 0);

    board.resolve_attack(Coord::new(0, 1)).unwrap();
    let sunk: Vec<_> = board.sunk_ships().collect();
    assert_eq!(sunk.len(), 1);
    assert_eq!(sunk[0].coordinates(), &[Coord::new(0, 0), Coord::new(0, 1)]);
}

#[test]
fn test_all_ships_sunk_tracks_live_state() {
    let mut board = Board::new();
    board
        .place_ship(def(2), Coord::new(0, 0), Orientation::Horizontal)
        .unwrap();
    board
        .place_ship(def(2), Coord::new(0, 5), Orientation::Horizontal)
        .unwrap();
    board.resolve_attack(Coord::new(0, 0)).unwrap();
    board.resolve_attack(Coord::new(1, 0)).unwrap();
    assert!(!board.all_ships_sunk());
    board.resolve_attack(Coord::new(0, 5)).unwrap();
    assert!(!board.all_ships_sunk());
    assert_eq!(board.resolve_attack(Coord::new(1, 5)).unwrap(), AttackOutcome::Sunk);
    assert!(board.all_ships_sunk());
}

#[test]
fn test_place_random_full_fleet() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);
    for def in FLEET {
        board.place_randomly(def, &mut rng).unwrap();
    }
    let cells: usize = board.ships().iter().map(|s| s.coordinates().len()).sum();
    assert_eq!(cells, broadside::TOTAL_SHIP_CELLS);
}
