use conway_grid::{
    get_config, set_default_max_size, set_multithread_threshold, Cell, ExtendedGrid, Grid,
    Pattern,
};
use serial_test::{parallel, serial};

const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;

fn randomly_filled(rows: usize, cols: usize, seed: u64) -> (Grid, Grid) {
    let pattern = Pattern::random(rows, cols, Some(seed), FILL_RATE).unwrap();
    let mut sequential = Grid::from_pattern(&pattern);
    let mut partitioned = Grid::from_pattern(&pattern);
    sequential.set_multithread_threshold(usize::MAX);
    partitioned.set_multithread_threshold(0);
    partitioned.set_worker_count(4);
    for grid in [&mut sequential, &mut partitioned] {
        grid.set_max_size(256, 256).unwrap();
    }
    (sequential, partitioned)
}

fn assert_grids_equal(a: &Grid, b: &Grid) {
    assert_eq!((a.rows(), a.cols()), (b.rows(), b.cols()));
    if a.living() == b.living() {
        return;
    }
    panic!("Mismatch:\n{}\n{}", a.to_text(), b.to_text());
}

#[test]
#[parallel]
fn test_partitioned_matches_sequential() {
    for (wrap, dynamic) in [(true, false), (false, false), (false, true)] {
        for seed in SEED..SEED + 3 {
            let (mut sequential, mut partitioned) = randomly_filled(40, 56, seed);
            for _ in 0..50 {
                sequential.step(wrap, dynamic);
                partitioned.step(wrap, dynamic);
                assert_grids_equal(&sequential, &partitioned);
                assert_eq!(sequential.changed(), partitioned.changed());
            }
        }
    }
}

#[test]
#[parallel]
fn test_partitioned_matches_sequential_with_obstacles() {
    let pattern = Pattern::random(40, 40, Some(SEED), 0.4).unwrap();
    let mut sequential = ExtendedGrid::with_limits(40, 40, 64, 64, true).unwrap();
    sequential.insert(&pattern, 0, 0, false).unwrap();
    for c in 0..40 {
        sequential.set_cell(20, c, Cell::obstacle(c % 3 == 0));
        sequential.set_cell(c, 7, Cell::obstacle(c % 4 == 0));
    }
    let mut partitioned = sequential.clone();
    sequential.set_multithread_threshold(usize::MAX);
    partitioned.set_multithread_threshold(0);
    partitioned.set_worker_count(6);

    for (wrap, dynamic) in [(false, true), (true, false), (false, false)] {
        for _ in 0..15 {
            sequential.step(wrap, dynamic);
            partitioned.step(wrap, dynamic);
            assert_eq!(sequential.living(), partitioned.living());
            assert_eq!(sequential.changed(), partitioned.changed());
            assert_eq!(sequential.to_text(), partitioned.to_text());
        }
    }
}

#[test]
#[parallel]
fn test_rle_round_trip_through_grid() {
    let mut grid = Grid::from_pattern(&Pattern::random(30, 20, Some(SEED), FILL_RATE).unwrap());
    grid.step_n(5, false, true);
    let copy = Grid::<bool>::from_rle(grid.to_rle().as_bytes()).unwrap();
    assert_grids_equal(&grid, &copy);
}

#[test]
#[parallel]
fn test_gosper_gun_grows_until_limit() {
    let gun = b"#N Gosper glider gun
x = 36, y = 9, rule = B3/S23
24bo$22bobo$12b2o6b2o12b2o$11bo3bo4b2o12b2o$2o8bo5bo3b2o$2o8bo3bob2o4b
obo$10bo5bo7bo$11bo3bo$12b2o!";
    let mut grid = Grid::<bool>::from_rle(gun).unwrap();
    assert_eq!(grid.population(), 36);
    grid.set_max_size(60, 60).unwrap();

    grid.step_n(300, false, true);
    assert!(grid.rows() <= 60 && grid.cols() <= 60);
    assert!(grid.rows() > 9 && grid.cols() > 36);
    assert!(grid.population() > 36);
}

#[test]
#[parallel]
fn test_obstacle_wall_blocks_glider() {
    let glider = Pattern::from_rows(&[
        vec![false, true, false],
        vec![false, false, true],
        vec![true, true, true],
    ]);
    let mut grid = ExtendedGrid::with_limits(20, 20, 20, 20, false).unwrap();
    grid.insert(&glider, 0, 0, false).unwrap();
    for c in 0..20 {
        grid.set_cell(10, c, Cell::obstacle(false));
    }
    grid.step_n(80, false, false);
    for r in 0..20 {
        for c in 0..20 {
            if r >= 10 {
                assert!(!grid.is_alive(r, c), "cell ({}, {}) crossed the wall", r, c);
            }
        }
    }
    for c in 0..20 {
        assert!(grid.is_obstacle(10, c));
    }
}

#[test]
#[serial]
fn test_global_defaults_apply_to_new_grids() {
    let saved = get_config();
    set_default_max_size(50, 60);
    set_multithread_threshold(123);

    let grid = Grid::<bool>::new(10, 10);
    assert_eq!((grid.max_rows(), grid.max_cols()), (50, 60));
    assert_eq!(grid.multithread_threshold(), 123);
    let grid = Grid::<bool>::new(70, 10);
    assert_eq!((grid.max_rows(), grid.max_cols()), (70, 60));

    set_default_max_size(saved.default_max_rows, saved.default_max_cols);
    set_multithread_threshold(saved.multithread_threshold);
}
