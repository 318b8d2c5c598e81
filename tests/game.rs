use infectlife::{Capture, Cell, Game, Grid, Mode, Output, Terminal};

fn game(seed: &str, width: u32, height: u32, max: u32, infect: u32) -> Game<Capture> {
    let grid = Grid::from_string(seed, width, height).unwrap();
    Game::new(grid, Capture::new(width, height).unwrap(), max, infect)
}

#[test]
fn lone_center_cell_halts_after_one_generation() {
    let mut game = game("0 0 0 0 1 0 0 0 0", 3, 3, 1, 0);
    assert_eq!(game.grid().active_count(), 1);

    let rendered = game.play().unwrap();
    assert_eq!(rendered, 1);
    assert_eq!(game.generation(), 2);
    assert!(game.grid().is_empty());
    assert_eq!(
        game.output().frames(),
        [vec![vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]]]
    );
}

#[test]
fn block_is_stable() {
    let mut game = game("1 1 1 1", 2, 2, 0, 0);
    let before = game.grid().as_string();
    game.next();
    assert_eq!(game.grid().as_string(), before);

    let mut game = self::game("1 1 1 1", 2, 2, 0, 0);
    assert_eq!(game.play().unwrap(), 1);
    assert_eq!(game.output().last_frame(), Some(&vec![vec![1, 1], vec![1, 1]]));
}

#[test]
fn fixed_point_stops_without_generation_limit() {
    // a block in the middle of a larger board
    let seed = "0 0 0 0 \
                0 1 1 0 \
                0 1 1 0 \
                0 0 0 0";
    let mut game = game(seed, 4, 4, 0, 0);
    assert_eq!(game.play().unwrap(), 1);
    assert_eq!(game.grid().active_count(), 4);
}

#[test]
fn blinker_runs_until_generation_limit() {
    let mut game = game("0 1 0 0 1 0 0 1 0", 3, 3, 5, 0);
    assert_eq!(game.play().unwrap(), 5);
    assert_eq!(game.generation(), 6);

    let frames = game.output().frames();
    let vertical = vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]];
    let horizontal = vec![vec![0, 0, 0], vec![1, 1, 1], vec![0, 0, 0]];
    assert_eq!(frames[0], vertical);
    assert_eq!(frames[1], horizontal);
    assert_eq!(frames[4], vertical);
}

#[test]
fn infection_spreads_from_a_single_cell() {
    let mut game = game("0 0 0 0 0 0 0 0 0 0 0 0 1 0 0 0 0 0 0 0 0 0 0 0 0", 5, 5, 0, 1);
    assert_eq!(game.grid().len(), 9);
    game.next();

    // the lone cell has no orthogonal neighbor and dies, its whole ring is born
    let grid = game.grid();
    assert!(!grid.get("2,2".parse().unwrap()).unwrap().is_active());
    assert_eq!(grid.active_count(), 8);
    for id in ["1,1", "2,1", "3,1", "1,2", "3,2", "1,3", "2,3", "3,3"] {
        assert!(grid.get(id.parse().unwrap()).unwrap().is_active(), "{id}");
    }
}

#[test]
fn infection_birth_needs_exactly_one_moore_neighbor() {
    let mut game = game("0", 4, 4, 0, 1);
    game.set_grid(Grid::from_array([[1, 1]]).unwrap());
    assert!(game.should_be_in_next_generation(&Cell::inactive(2, 2)));

    game.set_grid(Grid::from_array([[1, 1], [3, 3]]).unwrap());
    assert!(!game.should_be_in_next_generation(&Cell::inactive(2, 2)));
    assert!(!game.should_be_in_next_generation(&Cell::inactive(0, 3)));
}

#[test]
fn terminal_paints_each_generation() {
    let grid = Grid::from_string("1 1 1 1", 2, 2).unwrap();
    let output = Terminal::with_writer(2, 2, Mode::Flat, Vec::new()).unwrap();
    let mut game = Game::new(grid, output, 0, 0);
    assert!(game.output().is_inside_grid(1, 1));

    game.current().unwrap();
    let text = String::from_utf8(game.into_output().into_writer()).unwrap();
    assert_eq!(text, "1 1 1 1\n");
}
