use crate::ticker::{spawn_ticker, TickerHandle};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const AUTO_ADVANCE_PERIOD: Duration = Duration::from_secs(4);

/// Featured photo strip on the hero. Auto-advances on a timer, wrapping
/// around, and holds still while the pointer hovers over it. Arrows and
/// the dot indicators move the cursor directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    hovered: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            hovered: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn jump(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Timer-driven advance. A hovered carousel skips the tick entirely.
    pub fn tick(&mut self) {
        if !self.hovered {
            self.next();
        }
    }
}

/// Drives `tick` on the given carousel until the handle is dropped.
pub fn spawn_auto_advance(carousel: Arc<Mutex<Carousel>>, period: Duration) -> TickerHandle {
    spawn_ticker(period, move || {
        carousel.lock().expect("Carousel lock poisoned").tick();
    })
}
