//! The frame loop vocabulary: [`Model`], [`Msg`], [`Effect`],
//! [`EventLoopDriver`] and [`FramePacer`].
//!
//! A backend owns the loop. It feeds [`Msg::Tick`] to the model at a fixed
//! cadence, forwards input as messages and asks the model to draw itself into
//! a [`Canvas`] whenever a frame is presented.

use std::time::{Duration, Instant};

use crate::canvas::Canvas;

// ---------------------------------------------------------------------------
// Msg
// ---------------------------------------------------------------------------

/// A keyboard key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,
    /// A printable character.
    Char(char),
}

/// A message delivered to the model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    /// Sent once before the first frame.
    Init,
    /// One frame elapsed.
    Tick,
    /// A key was pressed.
    KeyDown(Key),
    /// The window was closed.
    Quit,
}

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// A side-effect returned by [`Model::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Signal the frame loop to stop.
    End,
}

// ---------------------------------------------------------------------------
// Model trait
// ---------------------------------------------------------------------------

/// The state driven by a frame loop.
pub trait Model {
    /// Process a message, optionally returning a side-effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state into `canvas`.
    fn draw(&self, canvas: &mut Canvas);
}

impl<M: Model + ?Sized> Model for &mut M {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        (**self).update(msg)
    }

    fn draw(&self, canvas: &mut Canvas) {
        (**self).draw(canvas)
    }
}

// ---------------------------------------------------------------------------
// EventLoopDriver
// ---------------------------------------------------------------------------

/// A backend that owns the frame loop and drives a [`Model`] until it ends.
pub trait EventLoopDriver {
    fn run<M: Model>(self, model: M) -> Result<(), Box<dyn std::error::Error>>;
}

/// Runs a model for a fixed number of frames without a window or pacing.
///
/// Every frame sends [`Msg::Tick`] and draws into an off-screen [`Canvas`].
/// The loop also stops early when the model returns [`Effect::End`].
#[derive(Clone, Debug)]
pub struct HeadlessDriver {
    pub width: usize,
    pub height: usize,
    pub frames: u64,
}

impl EventLoopDriver for HeadlessDriver {
    fn run<M: Model>(self, mut model: M) -> Result<(), Box<dyn std::error::Error>> {
        let mut canvas = Canvas::new(self.width, self.height);
        if model.update(Msg::Init) == Some(Effect::End) {
            return Ok(());
        }
        for _ in 0..self.frames {
            model.draw(&mut canvas);
            if model.update(Msg::Tick) == Some(Effect::End) {
                return Ok(());
            }
        }
        model.update(Msg::Quit);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FramePacer
// ---------------------------------------------------------------------------

/// Fixed-rate frame clock.
///
/// [`poll`](Self::poll) reports at most one due frame per call. When the loop
/// falls behind by more than one interval the schedule restarts from `now`
/// instead of replaying the missed frames in a burst.
#[derive(Clone, Debug)]
pub struct FramePacer {
    interval: Duration,
    next: Option<Instant>,
}

impl FramePacer {
    /// Create a pacer ticking `fps` times per second (at least once).
    pub fn new(fps: u32) -> Self {
        let fps = u64::from(fps.max(1));
        Self {
            interval: Duration::from_nanos(1_000_000_000 / fps),
            next: None,
        }
    }

    /// Time between two frames.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Schedule the first frame one interval after `now`.
    ///
    /// Use this when a frame has just been drawn by other means, so that the
    /// next [`poll`](Self::poll) does not report a frame due at once.
    pub fn start(&mut self, now: Instant) {
        self.next = Some(now + self.interval);
    }

    /// Instant at which the next frame is due, once the pacer has started.
    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Whether a frame is due at `now`. Before [`start`](Self::start), the
    /// first call always returns `true`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next {
            None => {
                self.start(now);
                true
            }
            Some(next) if now >= next => {
                let mut following = next + self.interval;
                if following <= now {
                    following = now + self.interval;
                }
                self.next = Some(following);
                true
            }
            Some(_) => false,
        }
    }
}
