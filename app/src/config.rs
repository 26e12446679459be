use std::time::Duration;

use pathviz_search::SearchError;

/// Rows reserved above the board (title line).
pub const HEADER_ROWS: i32 = 1;
/// Rows reserved below the board (status and detail lines).
pub const FOOTER_ROWS: i32 = 2;
/// Terminal columns used to draw one grid cell.
pub const CELL_WIDTH: i32 = 2;
/// The status lines need at least this many columns.
const MIN_SCREEN_COLS: i32 = 72;
/// Largest board a terminal can reasonably show.
pub const MAX_ROWS: i32 = 200;
pub const MAX_COLS: i32 = 500;

/// Visualizer settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualizerConfig {
    pub rows: i32,
    pub cols: i32,
    /// Delay between automatic steps while playing.
    pub tick: Duration,
    /// Probability that a cell becomes a wall when walls are randomized.
    pub wall_density: f64,
    /// Seed for wall randomization; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 50,
            tick: Duration::from_millis(60),
            wall_density: 0.3,
            seed: None,
        }
    }
}

impl VisualizerConfig {
    pub fn with_size(mut self, rows: i32, cols: i32) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Clamped to `0.0..=1.0`.
    pub fn with_wall_density(mut self, density: f64) -> Self {
        self.wall_density = density.clamp(0.0, 1.0);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject boards that are empty or too large to draw.
    pub fn check(&self) -> Result<(), SearchError> {
        let fits = (1..=MAX_ROWS).contains(&self.rows) && (1..=MAX_COLS).contains(&self.cols);
        if !fits {
            return Err(SearchError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Terminal rows needed to show the board and its status lines.
    pub fn screen_rows(&self) -> i32 {
        self.rows.saturating_add(HEADER_ROWS + FOOTER_ROWS)
    }

    pub fn screen_cols(&self) -> i32 {
        self.cols.saturating_mul(CELL_WIDTH).max(MIN_SCREEN_COLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fit_a_classic_board() {
        let c = VisualizerConfig::default();
        assert_eq!((c.rows, c.cols), (20, 50));
        assert_eq!(c.screen_rows(), 23);
        assert_eq!(c.screen_cols(), 100);
    }

    #[test]
    fn builders() {
        let c = VisualizerConfig::default()
            .with_size(5, 5)
            .with_tick(Duration::from_millis(5))
            .with_wall_density(3.0)
            .with_seed(7);
        assert_eq!((c.rows, c.cols), (5, 5));
        assert_eq!(c.tick, Duration::from_millis(5));
        assert_eq!(c.wall_density, 1.0);
        assert_eq!(c.seed, Some(7));
        assert_eq!(c.screen_cols(), MIN_SCREEN_COLS);
    }

    #[test]
    fn oversized_boards_are_refused() {
        let wide = VisualizerConfig::default().with_size(20, 2_000_000_000);
        assert_eq!(
            wide.check(),
            Err(SearchError::InvalidDimensions {
                rows: 20,
                cols: 2_000_000_000
            })
        );
        assert_eq!(wide.screen_cols(), i32::MAX);

        let tall = VisualizerConfig::default().with_size(i32::MAX, 10);
        assert!(tall.check().is_err());
        assert_eq!(tall.screen_rows(), i32::MAX);

        assert!(VisualizerConfig::default().with_size(0, 10).check().is_err());
        assert!(VisualizerConfig::default().with_size(MAX_ROWS, MAX_COLS).check().is_ok());
        assert!(VisualizerConfig::default().check().is_ok());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let c = VisualizerConfig::default().with_size(8, 12).with_seed(5);
        let json = serde_json::to_string(&c).unwrap();
        let back: VisualizerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
