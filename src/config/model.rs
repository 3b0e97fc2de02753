use std::fmt::Display;
use std::time::Duration;

#[derive(Debug)]
pub struct Config {
    pub links: LinkConfig,
    pub countdown_period: Duration,
    pub event_limit: Option<usize>,
}

/// Outbound community links. Opaque URIs, passed through to the page
/// unmodified; nothing here validates or rewrites them.
#[derive(Debug, Clone)]
pub struct LinkConfig {
    pub chat: String,
    pub messaging: String,
    pub rsvp: String,
    pub email: String,
}

impl LinkConfig {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

impl Display for LinkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "chat: {} | messaging: {} | rsvp: {} | email: {}",
            self.chat,
            self.messaging,
            self.rsvp,
            self.mailto()
        )
    }
}
