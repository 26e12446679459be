//! The model/update/draw application loop: [`Model`], [`Driver`],
//! [`Effect`], [`App`].
//!
//! The loop owns all pacing. A driver only reports input and flushes
//! frames; a model only reacts to messages and draws. When a tick interval
//! is configured the loop interleaves [`Msg::Tick`] with input so models
//! can animate without ever blocking.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use crate::canvas::{Canvas, Frame, compute_frame};
use crate::messages::Msg;

/// How long a driver may block waiting for input when no tick is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// A side-effect returned by [`Model::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Signal the application loop to stop.
    End,
}

// ---------------------------------------------------------------------------
// Model / Driver
// ---------------------------------------------------------------------------

/// Application state driven by messages.
pub trait Model {
    /// Process a message, optionally returning a side-effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state into `canvas`.
    fn draw(&self, canvas: &mut Canvas);
}

/// Output back-end (terminal, test harness, ...).
pub trait Driver {
    /// Prepare the output device.
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Wait at most `timeout` for input and send whatever arrived through
    /// `tx`. Returning without sending anything is fine.
    fn poll_msgs(
        &mut self,
        timeout: Duration,
        tx: &Sender<Msg>,
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Write a computed frame to the output.
    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Restore the output device. Must be safe to call after a failed init.
    fn close(&mut self);
}

// ---------------------------------------------------------------------------
// AppConfig / App
// ---------------------------------------------------------------------------

/// Configuration for creating an [`App`].
pub struct AppConfig<M: Model, D: Driver> {
    pub model: M,
    pub driver: D,
    pub rows: i32,
    pub cols: i32,
    /// Interval between [`Msg::Tick`] messages; `None` disables ticking.
    pub tick: Option<Duration>,
}

/// The main application runner.
pub struct App<M: Model, D: Driver> {
    model: M,
    driver: D,
    rows: i32,
    cols: i32,
    tick: Option<Duration>,
}

impl<M: Model, D: Driver> App<M, D> {
    pub fn new(config: AppConfig<M, D>) -> Self {
        Self {
            model: config.model,
            driver: config.driver,
            rows: config.rows,
            cols: config.cols,
            tick: config.tick.filter(|d| !d.is_zero()),
        }
    }

    /// Borrow the model, e.g. to inspect it after [`run`](App::run).
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Run the update/draw loop until the model returns [`Effect::End`] or
    /// a [`Msg::Quit`] is processed. The driver is always closed on exit.
    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Err(e) = self.driver.init() {
            self.driver.close();
            return Err(e);
        }
        let result = self.event_loop();
        self.driver.close();
        result
    }

    fn event_loop(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let (tx, rx): (Sender<Msg>, Receiver<Msg>) = mpsc::channel();
        tx.send(Msg::Init).ok();

        let mut prev = Canvas::new(self.rows, self.cols);
        let mut curr = Canvas::new(self.rows, self.cols);
        let mut next_tick = self.tick.map(|d| Instant::now() + d);

        loop {
            if self.process_pending(&rx, &mut prev, &mut curr)? {
                log::debug!("application loop finished");
                return Ok(());
            }

            let timeout = match next_tick {
                Some(at) => at.saturating_duration_since(Instant::now()),
                None => IDLE_POLL,
            };
            self.driver.poll_msgs(timeout, &tx)?;

            if let (Some(at), Some(every)) = (next_tick, self.tick) {
                let now = Instant::now();
                if now >= at {
                    tx.send(Msg::Tick).ok();
                    // never queue a burst of ticks after a slow frame
                    next_tick = Some((at + every).max(now));
                }
            }
        }
    }

    /// Drain queued messages, update the model, then draw and flush once.
    /// Returns `true` when the loop should stop.
    fn process_pending(
        &mut self,
        rx: &Receiver<Msg>,
        prev: &mut Canvas,
        curr: &mut Canvas,
    ) -> Result<bool, Box<dyn std::error::Error>> {
        let mut needs_draw = false;

        while let Ok(msg) = rx.try_recv() {
            match msg {
                Msg::Quit => return Ok(true),
                Msg::Screen { rows, cols } if rows != curr.rows() || cols != curr.cols() => {
                    *curr = Canvas::new(rows, cols);
                    *prev = Canvas::new(0, 0);
                }
                _ => {}
            }
            if self.model.update(msg) == Some(Effect::End) {
                return Ok(true);
            }
            needs_draw = true;
        }

        if needs_draw {
            self.model.draw(curr);
            let frame = compute_frame(prev, curr);
            if !frame.cells.is_empty() {
                self.driver.flush(frame)?;
            }
            prev.clone_from(curr);
        }
        Ok(false)
    }
}
