//! Interactive A* visualizer shared by the `pathviz` binary and its tests.
//!
//! Paint walls with the mouse, then play or single-step the search and watch
//! the frontier (open), the closed set (visited) and finally the path.

mod config;
mod walls;

pub use config::{CELL_WIDTH, FOOTER_ROWS, HEADER_ROWS, MAX_COLS, MAX_ROWS, VisualizerConfig};
pub use walls::scatter_walls;

use pathviz_core::{
    AttrMask, Canvas, Cell, Color, Pos, Style,
    app::{Effect, Model},
    messages::{Key, MouseAction, Msg},
};
use pathviz_search::{
    AstarRun, Cost, NodeGrid, Outcome, Path, SearchError, Step, StepEvent, StepKind, UNREACHABLE,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

// Colours
const COL_BG: Color = Color::from_rgb(20, 20, 30);
const COL_EMPTY: Color = Color::from_rgb(36, 36, 48);
const COL_WALL: Color = Color::from_rgb(110, 110, 130);
const COL_START: Color = Color::from_rgb(60, 200, 90);
const COL_FINISH: Color = Color::from_rgb(220, 60, 60);
const COL_OPEN: Color = Color::from_rgb(40, 150, 160);
const COL_VISITED: Color = Color::from_rgb(50, 70, 140);
const COL_PATH: Color = Color::from_rgb(240, 200, 60);
const COL_MARK: Color = Color::from_rgb(250, 250, 250);
const COL_STATUS_FG: Color = Color::from_rgb(200, 200, 200);
const COL_STATUS_BG: Color = Color::from_rgb(30, 30, 50);
const COL_NOTICE: Color = Color::from_rgb(240, 150, 80);

const TITLE: &str = " A* | space play/pause  n step  r reset  c clear  g random walls  q quit";

/// What the visualizer is currently doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// No run exists; walls may be painted.
    Editing,
    /// A run advances on every tick.
    Playing,
    /// A run exists but only advances on request.
    Paused,
    Finished(Outcome),
}

impl Mode {
    fn label(self) -> &'static str {
        match self {
            Mode::Editing => "editing",
            Mode::Playing => "running",
            Mode::Paused => "paused",
            Mode::Finished(Outcome::Found) => "found",
            Mode::Finished(Outcome::Unreachable) => "no path",
        }
    }
}

// ---------------------------------------------------------------------------
// Visualizer
// ---------------------------------------------------------------------------

/// The visualizer model.
///
/// The editable board lives in `grid`. Starting a search hands a copy to an
/// [`AstarRun`], so walls stay frozen until the search is reset.
pub struct Visualizer {
    config: VisualizerConfig,
    grid: NodeGrid,
    run: Option<AstarRun>,
    playing: bool,
    last: Option<StepEvent>,
    path: Option<Path>,
    /// Number of path cells shown so far.
    revealed: usize,
    /// Wall state applied while dragging, fixed by the first cell pressed.
    paint: Option<bool>,
    hover: Option<Pos>,
    notice: Option<String>,
    rng: StdRng,
}

impl Visualizer {
    /// A visualizer over an empty board of the configured size.
    pub fn new(config: VisualizerConfig) -> Result<Self, SearchError> {
        config.check()?;
        let grid = NodeGrid::new(config.rows, config.cols)?;
        Ok(Self::with_grid(config, grid))
    }

    /// A visualizer over an existing board. The board's size wins over the
    /// one in `config`.
    pub fn with_grid(mut config: VisualizerConfig, grid: NodeGrid) -> Self {
        config.rows = grid.rows();
        config.cols = grid.cols();
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            grid,
            run: None,
            playing: false,
            last: None,
            path: None,
            revealed: 0,
            paint: None,
            hover: None,
            notice: None,
            rng,
        }
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        match &self.run {
            None => Mode::Editing,
            Some(run) => match run.outcome() {
                Some(outcome) => Mode::Finished(outcome),
                None if self.playing => Mode::Playing,
                None => Mode::Paused,
            },
        }
    }

    /// The board as currently shown: the search's copy while one exists.
    pub fn grid(&self) -> &NodeGrid {
        self.run.as_ref().map_or(&self.grid, AstarRun::grid)
    }

    pub fn run(&self) -> Option<&AstarRun> {
        self.run.as_ref()
    }

    /// The most recent search event.
    pub fn last_event(&self) -> Option<&StepEvent> {
        self.last.as_ref()
    }

    /// The reconstructed path once the goal was found.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    /// The part of the path revealed so far.
    pub fn revealed_path(&self) -> &[Pos] {
        match &self.path {
            Some(path) => &path.nodes()[..self.revealed],
            None => &[],
        }
    }

    /// The last message shown to the user, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    // -----------------------------------------------------------------------
    // Search control
    // -----------------------------------------------------------------------

    fn start_run(&mut self) -> bool {
        if self.run.is_some() {
            return true;
        }
        match AstarRun::from_grid(self.grid.clone()) {
            Ok(run) => {
                log::info!(
                    "search started: {} -> {}, {} walls",
                    run.start(),
                    run.goal(),
                    self.grid.walls().count()
                );
                self.run = Some(run);
                self.notice = None;
                true
            }
            Err(e) => {
                log::warn!("{e}");
                self.notice = Some(e.to_string());
                false
            }
        }
    }

    /// Perform one search step if a run is in progress.
    fn advance(&mut self) {
        let Some(run) = self.run.as_mut() else {
            return;
        };
        if run.is_done() {
            return;
        }
        if let Step::Event(ev) = run.step() {
            self.last = Some(ev);
        }
        // visiting the goal ends the run together with its event
        if let Some(outcome) = self.run.as_ref().and_then(AstarRun::outcome) {
            self.finish(outcome);
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.playing = false;
        let Some(run) = self.run.as_ref() else {
            return;
        };
        let stats = run.stats();
        match outcome {
            Outcome::Found => match run.path() {
                Ok(path) => {
                    log::info!(
                        "path found: {} cells, cost {}, {} steps",
                        path.len(),
                        path.cost(),
                        stats.steps
                    );
                    self.path = Some(path);
                    self.revealed = 0;
                }
                Err(e) => {
                    log::error!("path reconstruction failed: {e}");
                    self.notice = Some(e.to_string());
                }
            },
            Outcome::Unreachable => {
                log::info!("no path after {} steps", stats.steps);
            }
        }
    }

    fn reveal(&mut self) {
        if let Some(path) = &self.path {
            self.revealed = (self.revealed + 1).min(path.len());
        }
    }

    /// Drop the search, keeping the walls.
    fn reset(&mut self) {
        if self.run.take().is_some() {
            log::debug!("search reset");
        }
        self.playing = false;
        self.last = None;
        self.path = None;
        self.revealed = 0;
        self.paint = None;
        self.notice = None;
    }

    fn toggle_play(&mut self) {
        match self.mode() {
            Mode::Editing => self.playing = self.start_run(),
            Mode::Playing => self.playing = false,
            Mode::Paused => self.playing = true,
            Mode::Finished(_) => {}
        }
    }

    fn single_step(&mut self) {
        match self.mode() {
            Mode::Editing => {
                if self.start_run() {
                    self.advance();
                }
            }
            Mode::Playing | Mode::Paused => {
                self.playing = false;
                self.advance();
            }
            Mode::Finished(_) => self.reveal(),
        }
    }

    fn on_tick(&mut self) {
        match self.mode() {
            Mode::Playing => self.advance(),
            Mode::Finished(Outcome::Found) => self.reveal(),
            _ => {}
        }
    }

    // -----------------------------------------------------------------------
    // Wall editing
    // -----------------------------------------------------------------------

    fn clear_walls(&mut self) {
        self.reset();
        self.grid.clear_walls();
    }

    fn random_walls(&mut self) {
        self.reset();
        scatter_walls(&mut self.grid, self.config.wall_density, &mut self.rng);
    }

    /// Map a canvas position to a board position.
    fn board_pos(&self, screen: Pos) -> Option<Pos> {
        if screen.col < 0 {
            return None;
        }
        let p = Pos::new(screen.row - HEADER_ROWS, screen.col / CELL_WIDTH);
        self.grid.bounds().contains(p).then_some(p)
    }

    fn press(&mut self, p: Pos) {
        if self.run.is_some() {
            self.notice = Some("press r to reset the search before editing walls".into());
            return;
        }
        match self.grid.toggle_wall(p) {
            Ok(wall) => {
                self.paint = Some(wall);
                self.notice = None;
            }
            Err(e) => {
                self.paint = None;
                self.notice = Some(e.to_string());
            }
        }
    }

    fn drag(&mut self, p: Pos) {
        if self.run.is_some() {
            return;
        }
        if let Some(wall) = self.paint {
            // endpoints are skipped silently
            self.grid.set_wall(p, wall).ok();
        }
    }

    // -----------------------------------------------------------------------
    // Drawing helpers
    // -----------------------------------------------------------------------

    fn status_line(&self) -> String {
        let mode = self.mode();
        let mut s = format!(" [{}]", mode.label());
        match (&self.run, &self.path) {
            (None, _) => s.push_str(&format!("  walls {}", self.grid.walls().count())),
            (Some(run), path) => {
                let st = run.stats();
                s.push_str(&format!(
                    "  steps {}  opened {}  visited {}  frontier {}",
                    st.steps,
                    st.opened,
                    st.visited,
                    run.open_set().len()
                ));
                if let Some(path) = path {
                    s.push_str(&format!("  path {} cells, cost {}", path.len(), path.cost()));
                }
            }
        }
        s
    }

    fn detail_line(&self) -> String {
        if let Some(node) = self.hover.and_then(|p| self.grid().node(p)) {
            let p = node.pos();
            let what = if node.is_start() {
                "start"
            } else if node.is_finish() {
                "finish"
            } else if node.is_wall() {
                "wall"
            } else if node.is_visited() {
                "visited"
            } else if node.is_reached() {
                "open"
            } else {
                "empty"
            };
            let mut s = format!(" {p} {what}");
            if node.is_reached() {
                s.push_str(&format!(
                    "  g={} h={} f={}",
                    score(node.g()),
                    score(node.h()),
                    score(node.f())
                ));
            }
            return s;
        }
        match (self.mode(), &self.last) {
            (Mode::Finished(Outcome::Unreachable), _) => {
                " no path: the goal cannot be reached".into()
            }
            (_, Some(ev)) => {
                let kind = match ev.kind {
                    StepKind::Open => "open",
                    StepKind::Visited => "visited",
                };
                let nodes: Vec<String> = ev.nodes.iter().map(|p| p.to_string()).collect();
                format!(" last: {kind} {}", nodes.join(" "))
            }
            _ => String::new(),
        }
    }

    fn node_color(&self, idx: usize, on_path: bool) -> Color {
        let node = self.grid().node_at(idx);
        if node.is_start() {
            COL_START
        } else if node.is_finish() {
            COL_FINISH
        } else if node.is_wall() {
            COL_WALL
        } else if on_path {
            COL_PATH
        } else if self.run.as_ref().is_some_and(|r| r.is_open(idx)) {
            COL_OPEN
        } else if node.is_visited() {
            COL_VISITED
        } else {
            COL_EMPTY
        }
    }
}

fn score(c: Cost) -> String {
    if c == UNREACHABLE {
        "-".into()
    } else {
        c.to_string()
    }
}

impl Model for Visualizer {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Init => {
                log::info!(
                    "visualizer ready: {} board, start {}, finish {}",
                    self.grid.bounds(),
                    self.grid.start_pos(),
                    self.grid.finish_pos()
                );
            }
            Msg::Quit => return Some(Effect::End),
            Msg::Tick => self.on_tick(),
            Msg::KeyDown(key) => match key {
                Key::Escape | Key::Char('q') | Key::Char('Q') => return Some(Effect::End),
                Key::Space => self.toggle_play(),
                Key::ArrowRight | Key::Char('n') => self.single_step(),
                Key::Char('r') => self.reset(),
                Key::Char('c') => self.clear_walls(),
                Key::Char('g') => self.random_walls(),
                _ => {}
            },
            Msg::Mouse { action, pos } => {
                let cell = self.board_pos(pos);
                self.hover = cell;
                match (action, cell) {
                    (MouseAction::Main, Some(p)) => self.press(p),
                    (MouseAction::Drag, Some(p)) => self.drag(p),
                    (MouseAction::Release, _) => self.paint = None,
                    _ => {}
                }
            }
            Msg::Screen { .. } => {}
        }
        None
    }

    fn draw(&self, canvas: &mut Canvas) {
        let status = Style::default().with_fg(COL_STATUS_FG).with_bg(COL_STATUS_BG);
        canvas.fill(Cell::default().with_style(Style::default().with_bg(COL_BG)));

        for col in 0..canvas.cols() {
            canvas.set(Pos::new(0, col), Cell::new(' ', status));
        }
        canvas.print(Pos::new(0, 0), TITLE, status);

        let grid = self.grid();
        let mut on_path = vec![false; grid.len()];
        for &p in self.revealed_path() {
            if let Some(i) = grid.idx(p) {
                on_path[i] = true;
            }
        }
        let marked: &[Pos] = match &self.last {
            Some(ev) => &ev.nodes,
            None => &[],
        };

        for (i, node) in grid.nodes().iter().enumerate() {
            let p = node.pos();
            let mut style = Style::default()
                .with_fg(COL_MARK)
                .with_bg(self.node_color(i, on_path[i]));
            let ch = if marked.contains(&p) && self.path.is_none() {
                style = style.with_attrs(AttrMask::BOLD);
                '•'
            } else {
                ' '
            };
            if self.hover == Some(p) {
                style = style.with_attrs(style.attrs | AttrMask::REVERSE);
            }
            let at = Pos::new(p.row + HEADER_ROWS, p.col * CELL_WIDTH);
            canvas.set(at, Cell::new(ch, style));
            for dx in 1..CELL_WIDTH {
                canvas.set(at.shift(0, dx), Cell::new(' ', style));
            }
        }

        let row = HEADER_ROWS + grid.rows();
        for r in row..row + FOOTER_ROWS {
            for col in 0..canvas.cols() {
                canvas.set(Pos::new(r, col), Cell::new(' ', status));
            }
        }
        canvas.print(Pos::new(row, 0), &self.status_line(), status);
        match &self.notice {
            Some(text) => {
                canvas.print(Pos::new(row + 1, 0), &format!(" {text}"), status.with_fg(COL_NOTICE))
            }
            None => canvas.print(Pos::new(row + 1, 0), &self.detail_line(), status),
        };
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn board(layout: &str) -> Visualizer {
        let grid = NodeGrid::parse(layout).unwrap();
        Visualizer::with_grid(VisualizerConfig::default().with_seed(1), grid)
    }

    fn screen(p: Pos) -> Pos {
        Pos::new(p.row + HEADER_ROWS, p.col * CELL_WIDTH)
    }

    fn key(v: &mut Visualizer, c: char) -> Option<Effect> {
        v.update(Msg::key(Key::Char(c)))
    }

    fn mouse(v: &mut Visualizer, action: MouseAction, p: Pos) {
        v.update(Msg::mouse(action, screen(p)));
    }

    fn canvas(v: &Visualizer) -> Canvas {
        let cfg = v.config();
        let mut c = Canvas::new(cfg.screen_rows(), cfg.screen_cols());
        v.draw(&mut c);
        c
    }

    fn tick_until_finished(v: &mut Visualizer) -> Outcome {
        for _ in 0..1000 {
            if let Mode::Finished(outcome) = v.mode() {
                return outcome;
            }
            v.update(Msg::Tick);
        }
        panic!("search did not finish");
    }

    const OPEN_5X5: &str = "S....\n.....\n.....\n.....\n....F";

    #[test]
    fn play_finds_and_reveals_path() {
        let mut v = board(OPEN_5X5);
        assert_eq!(v.mode(), Mode::Editing);
        v.update(Msg::key(Key::Space));
        assert_eq!(v.mode(), Mode::Playing);

        assert_eq!(tick_until_finished(&mut v), Outcome::Found);
        let path = v.path().unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path.cost(), 8);
        assert!(v.revealed_path().is_empty());

        for n in 1..=9 {
            v.update(Msg::Tick);
            assert_eq!(v.revealed_path().len(), n);
        }
        v.update(Msg::Tick);
        assert_eq!(v.revealed_path().len(), 9);
        assert_eq!(v.revealed_path()[0], Pos::new(0, 0));
        assert_eq!(v.revealed_path()[8], Pos::new(4, 4));
    }

    #[test]
    fn blocked_column_reports_no_path() {
        let mut v = board("S#.\n.#.\n.#F");
        for _ in 0..100 {
            key(&mut v, 'n');
        }
        assert_eq!(v.mode(), Mode::Finished(Outcome::Unreachable));
        assert!(v.path().is_none());
        assert!(v.run().unwrap().open_set().is_empty());

        let c = canvas(&v);
        let row = HEADER_ROWS + 3;
        assert!(c.row_text(row).contains("no path"));
        assert!(c.row_text(row + 1).contains("no path"));
    }

    #[test]
    fn single_step_pauses() {
        let mut v = board(OPEN_5X5);
        key(&mut v, 'n');
        assert_eq!(v.mode(), Mode::Paused);
        assert_eq!(v.run().unwrap().stats().steps, 1);
        let ev = v.last_event().unwrap();
        assert_eq!(ev.kind, StepKind::Open);
        assert_eq!(ev.nodes, vec![Pos::new(0, 0)]);

        // ticks do nothing while paused
        v.update(Msg::Tick);
        assert_eq!(v.run().unwrap().stats().steps, 1);

        v.update(Msg::key(Key::Space));
        assert_eq!(v.mode(), Mode::Playing);
        v.update(Msg::Tick);
        assert_eq!(v.run().unwrap().stats().steps, 2);

        v.update(Msg::key(Key::ArrowRight));
        assert_eq!(v.mode(), Mode::Paused);
        assert_eq!(v.run().unwrap().stats().steps, 3);
    }

    #[test]
    fn click_toggles_and_drag_paints() {
        let mut v = board("S....\n.....\n....F");
        mouse(&mut v, MouseAction::Main, Pos::new(1, 1));
        mouse(&mut v, MouseAction::Drag, Pos::new(1, 2));
        mouse(&mut v, MouseAction::Drag, Pos::new(1, 3));
        mouse(&mut v, MouseAction::Release, Pos::new(1, 3));
        mouse(&mut v, MouseAction::Drag, Pos::new(0, 3));
        let walls: Vec<Pos> = v.grid().walls().collect();
        assert_eq!(walls, vec![Pos::new(1, 1), Pos::new(1, 2), Pos::new(1, 3)]);

        // starting on a wall erases
        mouse(&mut v, MouseAction::Main, Pos::new(1, 2));
        mouse(&mut v, MouseAction::Drag, Pos::new(1, 3));
        mouse(&mut v, MouseAction::Drag, Pos::new(1, 4));
        mouse(&mut v, MouseAction::Release, Pos::new(1, 4));
        let walls: Vec<Pos> = v.grid().walls().collect();
        assert_eq!(walls, vec![Pos::new(1, 1)]);
    }

    #[test]
    fn endpoints_are_not_paintable() {
        let mut v = board("S....\n.....\n....F");
        mouse(&mut v, MouseAction::Main, Pos::new(0, 0));
        assert!(!v.grid().node(Pos::new(0, 0)).unwrap().is_wall());
        assert!(v.notice().is_some());

        mouse(&mut v, MouseAction::Main, Pos::new(2, 2));
        mouse(&mut v, MouseAction::Drag, Pos::new(2, 3));
        mouse(&mut v, MouseAction::Drag, Pos::new(2, 4));
        let walls: Vec<Pos> = v.grid().walls().collect();
        assert_eq!(walls, vec![Pos::new(2, 2), Pos::new(2, 3)]);
        assert!(v.grid().node(Pos::new(2, 4)).unwrap().is_finish());
    }

    #[test]
    fn painting_refused_while_running() {
        let mut v = board(OPEN_5X5);
        v.update(Msg::key(Key::Space));
        mouse(&mut v, MouseAction::Main, Pos::new(2, 2));
        mouse(&mut v, MouseAction::Drag, Pos::new(2, 3));
        assert_eq!(v.grid().walls().count(), 0);
        assert!(v.notice().unwrap().contains("reset"));

        key(&mut v, 'r');
        assert_eq!(v.mode(), Mode::Editing);
        mouse(&mut v, MouseAction::Main, Pos::new(2, 2));
        assert_eq!(v.grid().walls().count(), 1);
    }

    #[test]
    fn reset_keeps_walls() {
        let mut v = board("S.#..\n..#..\n....F");
        v.update(Msg::key(Key::Space));
        assert_eq!(tick_until_finished(&mut v), Outcome::Found);
        key(&mut v, 'r');
        assert_eq!(v.mode(), Mode::Editing);
        assert!(v.path().is_none());
        assert!(v.last_event().is_none());
        assert_eq!(v.grid().walls().count(), 2);
        assert!(v.grid().nodes().iter().all(|n| !n.is_reached()));
    }

    #[test]
    fn clear_and_random_walls() {
        let grid = NodeGrid::new(6, 10).unwrap();
        let config = VisualizerConfig::default().with_seed(3).with_wall_density(1.0);
        let mut v = Visualizer::with_grid(config, grid);
        key(&mut v, 'g');
        assert_eq!(v.grid().walls().count(), 58);
        assert!(!v.grid().node_at(v.grid().start()).is_wall());

        v.update(Msg::key(Key::Space));
        assert_eq!(tick_until_finished(&mut v), Outcome::Unreachable);

        key(&mut v, 'c');
        assert_eq!(v.mode(), Mode::Editing);
        assert_eq!(v.grid().walls().count(), 0);
    }

    #[test]
    fn seeded_walls_repeat() {
        let layout = || {
            let config = VisualizerConfig::default().with_size(8, 12).with_seed(99);
            let mut v = Visualizer::new(config).unwrap();
            key(&mut v, 'g');
            v.grid().walls().collect::<Vec<_>>()
        };
        assert_eq!(layout(), layout());
    }

    #[test]
    fn colors_follow_node_state() {
        let mut v = board("S.#\n...\n..F");
        let bg = |c: &Canvas, p: Pos| c.at(screen(p)).style.bg;

        let c = canvas(&v);
        assert_eq!(bg(&c, Pos::new(0, 0)), COL_START);
        assert_eq!(bg(&c, Pos::new(2, 2)), COL_FINISH);
        assert_eq!(bg(&c, Pos::new(0, 2)), COL_WALL);
        assert_eq!(bg(&c, Pos::new(1, 1)), COL_EMPTY);
        // both columns of a cell share the colour
        assert_eq!(c.at(screen(Pos::new(0, 2)).shift(0, 1)).style.bg, COL_WALL);

        key(&mut v, 'n');
        key(&mut v, 'n');
        key(&mut v, 'n');
        // Open (0,0), Visited (0,0), Open (1,0)
        let c = canvas(&v);
        assert_eq!(bg(&c, Pos::new(1, 0)), COL_OPEN);
        assert_eq!(c.at(screen(Pos::new(1, 0))).ch, '•');

        v.update(Msg::key(Key::Space));
        tick_until_finished(&mut v);
        for _ in 0..10 {
            v.update(Msg::Tick);
        }
        let c = canvas(&v);
        let path = v.path().unwrap().clone();
        for &p in &path.nodes()[1..path.len() - 1] {
            assert_eq!(bg(&c, p), COL_PATH);
        }
        let visited_off_path = v
            .grid()
            .nodes()
            .iter()
            .find(|n| n.is_visited() && !path.nodes().contains(&n.pos()));
        if let Some(n) = visited_off_path {
            assert_eq!(bg(&c, n.pos()), COL_VISITED);
        }
    }

    #[test]
    fn hover_shows_scores() {
        let mut v = board(OPEN_5X5);
        key(&mut v, 'n');
        mouse(&mut v, MouseAction::Move, Pos::new(0, 0));
        let c = canvas(&v);
        let detail = c.row_text(HEADER_ROWS + 5 + 1);
        assert!(detail.contains("(0, 0) start"));
        assert!(detail.contains("g=0 h=8 f=8"));

        mouse(&mut v, MouseAction::Move, Pos::new(3, 3));
        let c = canvas(&v);
        assert!(c.row_text(HEADER_ROWS + 6).contains("(3, 3) empty"));
    }

    #[test]
    fn status_line_counts() {
        let mut v = board(OPEN_5X5);
        assert!(canvas(&v).row_text(HEADER_ROWS + 5).contains("[editing]  walls 0"));
        key(&mut v, 'n');
        key(&mut v, 'n');
        let text = canvas(&v).row_text(HEADER_ROWS + 5);
        assert!(text.contains("[paused]"));
        assert!(text.contains("steps 2  opened 1  visited 1"));
    }

    #[test]
    fn oversized_board_is_an_error() {
        let config = VisualizerConfig::default().with_size(20, 2_000_000_000);
        assert!(matches!(
            Visualizer::new(config),
            Err(SearchError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn quit_keys_end_the_app() {
        let mut v = board(OPEN_5X5);
        assert!(matches!(key(&mut v, 'q'), Some(Effect::End)));
        assert!(matches!(v.update(Msg::key(Key::Escape)), Some(Effect::End)));
        assert!(matches!(v.update(Msg::Quit), Some(Effect::End)));
        assert!(v.update(Msg::Tick).is_none());
    }

    #[test]
    fn clicks_outside_the_board_are_ignored() {
        let mut v = board(OPEN_5X5);
        v.update(Msg::mouse(MouseAction::Main, Pos::new(0, 0)));
        v.update(Msg::mouse(MouseAction::Main, Pos::new(HEADER_ROWS + 5, 0)));
        v.update(Msg::mouse(MouseAction::Main, Pos::new(1, 5 * CELL_WIDTH)));
        assert_eq!(v.grid().walls().count(), 0);
        assert!(v.notice().is_none());
    }
}
