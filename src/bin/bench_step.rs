use conway_grid::{Grid, Pattern};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

const SIDE: usize = 1024;
const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;
const STEPS: usize = 100;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    for (wrap, dynamic) in [(true, false), (false, false), (false, true)] {
        let timer = Instant::now();
        let soup = Pattern::random(SIDE, SIDE, Some(SEED), FILL_RATE)?;
        let mut grid = Grid::<bool>::from_pattern(&soup);
        println!("Time spent on building field: {:?}", timer.elapsed());

        let timer = Instant::now();
        grid.step_n(STEPS, wrap, dynamic);
        println!(
            "wrap={} dynamic={}: {} steps in {:?}, population {}, size {}x{}",
            wrap,
            dynamic,
            STEPS,
            timer.elapsed(),
            grid.population(),
            grid.rows(),
            grid.cols()
        );
    }
    Ok(())
}
