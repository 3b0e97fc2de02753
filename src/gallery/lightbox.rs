#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxState {
    Closed,
    Open(usize),
}

/// Key signals the presentation layer forwards from the keyboard. They map
/// onto the same transitions as the pointer controls, so the state machine
/// cannot tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
}

/// Cursor over a fixed-size photo collection. While open the index is
/// always in range; navigation wraps at both ends instead of clamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    state: LightboxState,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            state: LightboxState::Closed,
        }
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            LightboxState::Closed => None,
            LightboxState::Open(index) => Some(index),
        }
    }

    pub fn is_open(&self) -> bool {
        self.current_index().is_some()
    }

    /// Out-of-range indices are ignored rather than rejected; the state
    /// machine stays total over every input.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.state = LightboxState::Open(index);
        }
    }

    /// Explicit close button, a click outside the image, and escape all
    /// funnel here.
    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
    }

    pub fn next(&mut self) {
        if let LightboxState::Open(index) = self.state {
            self.state = LightboxState::Open((index + 1) % self.len);
        }
    }

    pub fn previous(&mut self) {
        if let LightboxState::Open(index) = self.state {
            self.state = LightboxState::Open((index + self.len - 1) % self.len);
        }
    }

    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::ArrowLeft => self.previous(),
            Key::ArrowRight => self.next(),
            Key::Escape => self.close(),
        }
    }
}
