//! Crossterm terminal driver for pathviz.
//!
//! Provides a [`CrosstermDriver`] that implements [`pathviz_core::Driver`],
//! turning terminal input into [`Msg`]s and flushing [`Frame`]s with
//! cursor moves and colour changes.

use std::io::{self, Stdout, Write};
use std::sync::mpsc::Sender;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind},
    execute, queue,
    style::{self, Attribute, Color as CtColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathviz_core::{
    app::Driver,
    canvas::Frame,
    messages::{Key, Msg, MouseAction},
    style::{AttrMask, Color},
    Pos,
};

fn to_ct_color(c: Color) -> CtColor {
    match c {
        Color::Reset => CtColor::Reset,
        Color::Rgb(r, g, b) => CtColor::Rgb { r, g, b },
    }
}

fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        _ => None,
    }
}

fn to_msg(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
            to_key(code).map(Msg::KeyDown)
        }
        Event::Mouse(me) => {
            let pos = Pos::new(me.row as i32, me.column as i32);
            let action = match me.kind {
                MouseEventKind::Down(MouseButton::Left) => MouseAction::Main,
                MouseEventKind::Down(MouseButton::Right) => MouseAction::Secondary,
                MouseEventKind::Drag(_) => MouseAction::Drag,
                MouseEventKind::Up(_) => MouseAction::Release,
                MouseEventKind::Moved => MouseAction::Move,
                _ => return None,
            };
            Some(Msg::mouse(action, pos))
        }
        Event::Resize(cols, rows) => Some(Msg::Screen {
            rows: rows as i32,
            cols: cols as i32,
        }),
        _ => None,
    }
}

/// A terminal back-end using crossterm's raw mode, the alternate screen and
/// mouse capture.
pub struct CrosstermDriver {
    out: Stdout,
}

impl CrosstermDriver {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        terminal::enable_raw_mode()?;
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            event::EnableMouseCapture
        )?;
        log::debug!("crossterm: terminal initialised");
        Ok(())
    }

    fn poll_msgs(
        &mut self,
        timeout: Duration,
        tx: &Sender<Msg>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if !event::poll(timeout)? {
            return Ok(());
        }
        // drain everything that is already buffered
        while event::poll(Duration::ZERO)? {
            if let Some(m) = to_msg(event::read()?) {
                tx.send(m).ok();
            }
        }
        Ok(())
    }

    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn std::error::Error>> {
        for fc in &frame.cells {
            let (p, cell) = (fc.pos, fc.cell);
            queue!(
                self.out,
                cursor::MoveTo(p.col as u16, p.row as u16),
                SetForegroundColor(to_ct_color(cell.style.fg)),
                SetBackgroundColor(to_ct_color(cell.style.bg))
            )?;

            let attrs = cell.style.attrs;
            if attrs.contains(AttrMask::BOLD) {
                queue!(self.out, style::SetAttribute(Attribute::Bold))?;
            }
            if attrs.contains(AttrMask::DIM) {
                queue!(self.out, style::SetAttribute(Attribute::Dim))?;
            }
            if attrs.contains(AttrMask::REVERSE) {
                queue!(self.out, style::SetAttribute(Attribute::Reverse))?;
            }

            write!(self.out, "{}", cell.ch)?;

            if !attrs.is_empty() {
                queue!(self.out, style::SetAttribute(Attribute::Reset))?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        let _ = execute!(
            self.out,
            event::DisableMouseCapture,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
