//! Frame sources. The browser drives ticks from `requestAnimationFrame`;
//! tests drive the same closure from a counter.

use std::convert::Infallible;

pub trait FrameScheduler {
    type Error;

    /// Calls `frame` once per tick until the scheduler stops.
    fn run(self, frame: Box<dyn FnMut()>) -> Result<(), Self::Error>;
}

/// Runs a fixed number of ticks synchronously.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedClock {
    pub frames: u32,
}

impl SimulatedClock {
    pub fn new(frames: u32) -> Self {
        Self { frames }
    }
}

impl FrameScheduler for SimulatedClock {
    type Error = Infallible;

    fn run(self, mut frame: Box<dyn FnMut()>) -> Result<(), Infallible> {
        for _ in 0..self.frames {
            frame();
        }
        Ok(())
    }
}
