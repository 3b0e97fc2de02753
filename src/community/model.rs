use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ANCHOR: Regex =
        Regex::new("[^a-z0-9]+").expect("Failed to create anchor regex");
}

/// Turns a display title into the section anchor used for in-page navigation.
pub fn anchor_slug(title: &str) -> String {
    NON_ANCHOR
        .replace_all(&title.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

#[derive(Debug, Clone)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub category: EventCategory,
    pub status: EventStatus,
    pub rsvp_url: Option<String>,
    pub image_url: Option<String>,
}

impl Event {
    pub fn anchor(&self) -> String {
        anchor_slug(&self.title)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::IntoStaticStr,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum EventCategory {
    Workshop,
    Meetup,
    Hackathon,
    Cafe,
}

impl EventCategory {
    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Workshop => "Workshop",
            EventCategory::Meetup => "Meetup",
            EventCategory::Hackathon => "Hackathon",
            EventCategory::Cafe => "Code Cafe",
        }
    }
}

/// Authored editorial field. Deliberately not derived from the event date,
/// so stale placeholder dates never flip an event between the two groups.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::IntoStaticStr, strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Past,
}

#[derive(Debug, Clone)]
pub struct Speaker {
    pub id: String,
    pub name: String,
    pub title: String,
    pub company: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub socials: SocialLinks,
    pub is_past: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SocialLinks {
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
}

impl SocialLinks {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.linkedin
            .iter()
            .chain(self.twitter.iter())
            .chain(self.github.iter())
            .map(String::as_str)
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

#[derive(Debug, Clone)]
pub struct Photo {
    pub id: String,
    pub src: String,
    pub caption: String,
    pub event: Option<String>,
}
