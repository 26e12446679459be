//! Terminal A* visualizer.
//!
//! Run: cargo run --bin pathviz [ROWS COLS [SEED]]
//! Logs go to stderr: RUST_LOG=debug cargo run --bin pathviz 2>pathviz.log

use pathviz_app::{Visualizer, VisualizerConfig};
use pathviz_core::app::{App, AppConfig};
use pathviz_crossterm::CrosstermDriver;

fn parse_args() -> Result<VisualizerConfig, Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = VisualizerConfig::default();
    match args.as_slice() {
        [] => {}
        [rows, cols, rest @ ..] if rest.len() <= 1 => {
            config = config.with_size(rows.parse()?, cols.parse()?);
            if let Some(seed) = rest.first() {
                config = config.with_seed(seed.parse()?);
            }
        }
        _ => return Err("usage: pathviz [ROWS COLS [SEED]]".into()),
    }
    config.check()?;
    Ok(config)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args()?;
    let (rows, cols, tick) = (config.screen_rows(), config.screen_cols(), config.tick);
    let model = Visualizer::new(config)?;
    let mut app = App::new(AppConfig {
        model,
        driver: CrosstermDriver::new(),
        rows,
        cols,
        tick: Some(tick),
    });
    app.run()
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
