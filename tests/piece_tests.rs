//! Active-piece movement and rotation tests

use frametris::core::{ActiveFrame, LcgRng, Playfield, SHAPES, STRAIGHT};
use frametris::types::{Cell, RotateDir};

#[test]
fn test_piece_falls_to_the_floor_and_stops() {
    let mut field = Playfield::new(10, 20);
    assert!(field.spawn(&SHAPES[STRAIGHT].mask, 4));
    let mut steps = 0;
    while field.can_fall() {
        field.fall();
        steps += 1;
    }
    // Vertical bar spans rows 0..=3 at spawn, so it falls 16 rows.
    assert_eq!(steps, 16);
    for y in 16..20 {
        assert_eq!(field.board().get(4, y), Some(Cell::Active));
    }
    assert_eq!(field.frame(), Some(ActiveFrame { x: 4, y: 16 }));
}

#[test]
fn test_wall_kick_shifts_rotation_off_the_wall() {
    let mut field = Playfield::new(10, 20);
    // Vertical bar in column 7: the horizontal orientation would need
    // columns 7..=10, so the in-place candidate fails and the (-1, 0) kick
    // is the first that fits.
    field.spawn(&SHAPES[STRAIGHT].mask, 7);
    for _ in 0..5 {
        field.fall();
    }
    let y = field.frame().unwrap().y;
    field.rotate(RotateDir::Right);
    assert_eq!(field.frame(), Some(ActiveFrame { x: 6, y }));
    for x in 6..10 {
        assert_eq!(field.board().get(x, y), Some(Cell::Active));
    }
}

#[test]
fn test_rotation_never_changes_cell_count() {
    for shape in &SHAPES {
        let mut field = Playfield::new(10, 20);
        field.spawn(&shape.mask, 3);
        for _ in 0..6 {
            field.fall();
        }
        for _ in 0..4 {
            field.rotate(RotateDir::Left);
            let active = field
                .board()
                .cells()
                .iter()
                .filter(|c| c.is_active())
                .count();
            assert_eq!(active, 4, "shape {}", shape.name);
        }
    }
}

#[test]
fn test_move_predicate_matches_per_cell_check_on_random_boards() {
    // Seeded, so every run sees the same boards.
    let mut rng = LcgRng::new(31);
    for _ in 0..100 {
        let mut field = Playfield::new(10, 20);
        // Scatter settled cells below the spawn rows.
        for _ in 0..25 {
            let x = rng.next_below(10) as i8;
            let y = 4 + rng.next_below(16) as i8;
            field.board_mut().set(x, y, Cell::Settled);
        }
        let shape = &SHAPES[rng.next_below(7) as usize];
        if !field.spawn(&shape.mask, rng.next_below(7) as i8) {
            continue;
        }
        for _ in 0..rng.next_below(8) {
            if field.can_fall() {
                field.fall();
            }
        }
        for dx in [-1i8, 1] {
            let expected = (0..20).all(|y| {
                (0..10).all(|x| {
                    field.board().get(x, y) != Some(Cell::Active)
                        || matches!(
                            field.board().get(x + dx, y),
                            Some(Cell::Empty | Cell::Active)
                        )
                })
            });
            assert_eq!(field.can_move_horizontal(dx), expected, "dx {dx}");
        }
    }
}

#[test]
fn test_settled_cells_block_sideways_movement() {
    let mut field = Playfield::new(10, 20);
    field.board_mut().set(3, 0, Cell::Settled);
    field.spawn(&SHAPES[0].mask, 4);
    assert!(!field.can_move_horizontal(-1));
    assert!(field.can_move_horizontal(1));
}

#[test]
fn test_lock_twice_changes_nothing_the_second_time() {
    let mut field = Playfield::new(10, 20);
    field.spawn(&SHAPES[0].mask, 4);
    while field.can_fall() {
        field.fall();
    }
    assert_eq!(field.lock(), 0);
    let after_first = field.board().clone();
    assert_eq!(field.lock(), 0);
    assert_eq!(field.board(), &after_first);
}

#[test]
fn test_spawn_onto_full_top_rows_fails() {
    let mut field = Playfield::new(10, 20);
    for x in 0..10 {
        field.board_mut().set(x, 1, Cell::Settled);
    }
    assert!(!field.spawn(&SHAPES[0].mask, 4));
    assert_eq!(field.frame(), None);
}
