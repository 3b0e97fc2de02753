use crate::community::catalog::Catalog;
use crate::community::model::{Event, Photo, Speaker};
use crate::config::model::{Config, LinkConfig};
use crate::events::countdown::{countdown_target, next_event, Countdown, CountdownTicker};
use crate::events::filter::{
    category_counts, filter_events, CategoryCounts, CategoryFilter, FilterSelection,
};
use crate::gallery::carousel::Carousel;
use crate::gallery::lightbox::Lightbox;
use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

/// One-way assembly of the whole page: the read-only catalog flows down
/// through the filter into view models, and selector/navigation inputs are
/// the only way back in. No view model holds mutable state of its own.
#[derive(Debug)]
pub struct Site {
    catalog: Catalog,
    config: Config,
    selection: FilterSelection,
    lightbox: Lightbox,
    carousel: Carousel,
}

impl Site {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        let lightbox = Lightbox::new(catalog.photos().len());
        let carousel = Carousel::new(catalog.featured().len());

        Self {
            catalog,
            config,
            selection: FilterSelection::default(),
            lightbox,
            carousel,
        }
    }

    pub fn selection(&self) -> FilterSelection {
        self.selection
    }

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        debug!("Category filter set to {}", category.label());
        self.selection.set_category(category);
    }

    pub fn set_status_filter(&mut self, status: crate::community::model::EventStatus) {
        debug!("Status filter set to {}", <&'static str>::from(status));
        self.selection.set_status(status);
    }

    pub fn events_view(&self) -> EventsView<'_> {
        let mut events = filter_events(self.catalog.events(), self.selection);
        if let Some(limit) = self.config.event_limit {
            events.truncate(limit);
        }

        EventsView {
            counts: category_counts(self.catalog.events(), self.selection.status),
            selection: self.selection,
            events,
        }
    }

    /// Past speakers first, then the still-to-be-announced ones, each group
    /// in authored order.
    pub fn speakers_view(&self) -> SpeakersView<'_> {
        let (past, announced) = self
            .catalog
            .speakers()
            .iter()
            .partition(|speaker| speaker.is_past);

        SpeakersView { past, announced }
    }

    pub fn hero_view(&self) -> HeroView<'_> {
        let next_event = next_event(self.catalog.events());

        HeroView {
            countdown_target: next_event.map(countdown_target),
            next_event,
        }
    }

    /// Spawns the once-per-second hero countdown. Returns `None` when no
    /// upcoming event exists; the caller owns the ticker, and dropping it
    /// is the teardown.
    pub fn start_countdown(&self) -> Option<CountdownTicker> {
        let target = self.hero_view().countdown_target?;
        info!("Starting countdown towards {}", target);
        Some(CountdownTicker::start(target, self.config.countdown_period))
    }

    pub fn lightbox(&mut self) -> &mut Lightbox {
        &mut self.lightbox
    }

    pub fn lightbox_state(&self) -> crate::gallery::lightbox::LightboxState {
        self.lightbox.state()
    }

    pub fn carousel(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    pub fn photos(&self) -> &[Photo] {
        self.catalog.photos()
    }

    pub fn featured(&self) -> &[Photo] {
        self.catalog.featured()
    }

    pub fn links(&self) -> &LinkConfig {
        &self.config.links
    }
}

pub struct EventsView<'a> {
    pub events: Vec<&'a Event>,
    pub counts: CategoryCounts,
    pub selection: FilterSelection,
}

impl EventsView<'_> {
    /// Distinct empty state the page renders instead of a bare empty list.
    pub fn empty_state(&self) -> Option<&'static str> {
        if self.events.is_empty() {
            Some("No events found for this filter.")
        } else {
            None
        }
    }
}

pub struct SpeakersView<'a> {
    pub past: Vec<&'a Speaker>,
    pub announced: Vec<&'a Speaker>,
}

pub struct HeroView<'a> {
    pub next_event: Option<&'a Event>,
    pub countdown_target: Option<NaiveDateTime>,
}

impl HeroView<'_> {
    pub fn countdown_now(&self) -> Option<Countdown> {
        self.countdown_target
            .map(|target| Countdown::remaining(target, Local::now().naive_local()))
    }
}
