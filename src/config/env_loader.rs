use crate::config::model::{Config, LinkConfig};
use std::env;
use std::time::Duration;

const DEFAULT_CHAT_URL: &str = "https://discord.gg/tambayan-cebu";
const DEFAULT_MESSAGING_URL: &str = "https://chat.whatsapp.com/tambayan-cebu";
const DEFAULT_RSVP_URL: &str = "https://lu.ma/tambayan-cebu";
const DEFAULT_EMAIL: &str = "hello@tambayan.dev";

const DEFAULT_COUNTDOWN_PERIOD_SECS: u64 = 1;

pub fn load_config() -> Config {
    let links = LinkConfig {
        chat: load_string_config("COMMUNITY_CHAT_URL", DEFAULT_CHAT_URL),
        messaging: load_string_config("COMMUNITY_MESSAGING_URL", DEFAULT_MESSAGING_URL),
        rsvp: load_string_config("COMMUNITY_RSVP_URL", DEFAULT_RSVP_URL),
        email: load_string_config("COMMUNITY_EMAIL", DEFAULT_EMAIL),
    };

    let countdown_period = Duration::from_secs(load_u64_config(
        "COUNTDOWN_PERIOD_SECS",
        DEFAULT_COUNTDOWN_PERIOD_SECS,
    ));
    let event_limit = load_usize_config("EVENT_LIMIT");

    Config {
        links,
        countdown_period,
        event_limit,
    }
}

fn load_string_config(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn load_u64_config(name: &str, default: u64) -> u64 {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|_| {
            panic!(
                "Invalid config '{}'. Expected a positive integer number.",
                name
            )
        })
}

fn load_usize_config(name: &str) -> Option<usize> {
    match env::var(name) {
        Ok(value) => Some(value.parse().unwrap_or_else(|_| {
            panic!("Invalid config '{}'. Expected an integer number.", name)
        })),
        Err(_) => None,
    }
}
