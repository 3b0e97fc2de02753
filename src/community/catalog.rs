use super::dto::{EventRecord, GalleryFile, SpeakerRecord};
use super::model::{Event, Photo, Speaker};
use tracing::{error, info};

const EVENTS_JSON: &str = include_str!("../../data/events.json");
const SPEAKERS_JSON: &str = include_str!("../../data/speakers.json");
const GALLERY_JSON: &str = include_str!("../../data/gallery.json");

/// Read-only dataset behind the whole site. Loaded once at startup and
/// never mutated afterwards; iteration order is the authored order.
#[derive(Debug)]
pub struct Catalog {
    events: Vec<Event>,
    speakers: Vec<Speaker>,
    photos: Vec<Photo>,
    featured: Vec<Photo>,
}

impl Catalog {
    #[tracing::instrument]
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(EVENTS_JSON, SPEAKERS_JSON, GALLERY_JSON)
    }

    pub fn from_json(
        events_json: &str,
        speakers_json: &str,
        gallery_json: &str,
    ) -> Result<Self, CatalogError> {
        let event_records: Vec<EventRecord> = parse(events_json)?;
        let speaker_records: Vec<SpeakerRecord> = parse(speakers_json)?;
        let gallery: GalleryFile = parse(gallery_json)?;

        let events = event_records
            .iter()
            .map(EventRecord::to_model)
            .collect::<Result<Vec<Event>, CatalogError>>()?;
        let speakers = speaker_records
            .iter()
            .map(SpeakerRecord::to_model)
            .collect();
        let photos = gallery.photos.iter().map(|photo| photo.to_model()).collect();
        let featured = gallery
            .featured
            .iter()
            .map(|photo| photo.to_model())
            .collect::<Vec<Photo>>();

        let catalog = Self {
            events,
            speakers,
            photos,
            featured,
        };

        info!(
            "Loaded {} events, {} speakers, {} photos ({} featured)",
            catalog.events.len(),
            catalog.speakers.len(),
            catalog.photos.len(),
            catalog.featured.len()
        );

        Ok(catalog)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn speakers(&self) -> &[Speaker] {
        &self.speakers
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn featured(&self) -> &[Photo] {
        &self.featured
    }
}

fn parse<'a, T: serde::Deserialize<'a>>(json: &'a str) -> Result<T, CatalogError> {
    serde_json::from_str(json).map_err(|e| {
        error!("Dataset parse failed: {:?}", e);
        CatalogError::InvalidData(e)
    })
}

#[derive(Debug)]
pub enum CatalogError {
    InvalidData(serde_json::Error),
    UnknownCategory(String),
    UnknownStatus(String),
}
