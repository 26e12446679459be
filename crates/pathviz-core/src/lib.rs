//! Shared building blocks for the pathviz workspace.
//!
//! This crate provides grid geometry in row/column coordinates, styled
//! character cells, a diffable [`Canvas`], input messages, and the
//! model/update/draw application loop that drivers plug into.

pub mod app;
pub mod canvas;
pub mod geom;
pub mod messages;
pub mod style;

pub use app::{App, AppConfig, Driver, Effect, Model};
pub use canvas::{Canvas, Cell, Frame, FrameCell};
pub use geom::{Bounds, Pos};
pub use messages::*;
pub use style::{AttrMask, Color, Style};
