//! **gridpath-core** — core types shared by the gridpath crates.
//!
//! This crate provides geometry primitives, packed RGB colours, a software
//! pixel [`Canvas`] and the vocabulary of the fixed-rate frame loop
//! ([`Model`], [`Msg`], [`Effect`], [`EventLoopDriver`], [`FramePacer`]).
//! It has no windowing dependencies, so models can be driven and drawn
//! headlessly.

pub mod app;
pub mod canvas;
pub mod geom;
pub mod style;

pub use app::{Effect, EventLoopDriver, FramePacer, HeadlessDriver, Key, Model, Msg};
pub use canvas::Canvas;
pub use geom::Point;
pub use style::Color;
