use super::catalog::CatalogError;
use super::model::{Event, EventCategory, EventStatus, Photo, SocialLinks, Speaker};
use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer};
use serde_either::SingleOrVec;
use std::str::FromStr;

// Note: long-form text fields accept either a single string or a list of
// paragraphs, matching how the site data was authored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    pub description: SingleOrVec<String>,
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    #[serde(rename = "type")]
    pub category: String,
    pub status: String,
    #[serde(default)]
    pub luma_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl EventRecord {
    pub fn to_model(&self) -> Result<Event, CatalogError> {
        let category = EventCategory::from_str(&self.category)
            .map_err(|_| CatalogError::UnknownCategory(self.category.clone()))?;
        let status = EventStatus::from_str(&self.status)
            .map_err(|_| CatalogError::UnknownStatus(self.status.clone()))?;

        Ok(Event {
            id: self.id.clone(),
            title: self.title.clone(),
            description: flatten_paragraphs(&self.description),
            date: self.date,
            time: self.time.clone(),
            location: self.location.clone(),
            category,
            status,
            rsvp_url: self.luma_url.clone(),
            image_url: self.image_url.clone(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerRecord {
    pub id: String,
    pub name: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub bio: Option<SingleOrVec<String>>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub twitter_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    pub is_past: bool,
}

impl SpeakerRecord {
    pub fn to_model(&self) -> Speaker {
        Speaker {
            id: self.id.clone(),
            name: self.name.clone(),
            title: self.title.clone(),
            company: self.company.clone(),
            bio: self.bio.as_ref().map(flatten_paragraphs),
            image_url: self.image_url.clone(),
            socials: SocialLinks {
                linkedin: self.linkedin_url.clone(),
                twitter: self.twitter_url.clone(),
                github: self.github_url.clone(),
            },
            is_past: self.is_past,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GalleryFile {
    pub photos: Vec<PhotoRecord>,
    pub featured: Vec<PhotoRecord>,
}

#[derive(Debug, Deserialize)]
pub struct PhotoRecord {
    pub id: String,
    pub src: String,
    pub alt: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
}

impl PhotoRecord {
    pub fn to_model(&self) -> Photo {
        Photo {
            id: self.id.clone(),
            src: self.src.clone(),
            caption: self.caption.clone().unwrap_or_else(|| self.alt.clone()),
            event: self.event.clone(),
        }
    }
}

fn flatten_paragraphs(text: &SingleOrVec<String>) -> String {
    match text {
        SingleOrVec::Single(text) => text.clone(),
        SingleOrVec::Vec(paragraphs) => paragraphs.join("\n\n"),
    }
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(de::Error::custom)
}
