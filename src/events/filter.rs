use crate::community::model::{Event, EventCategory, EventStatus};
use itertools::Itertools;
use strum::IntoEnumIterator;

/// The category side of the events filter bar. `All` is the default tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(EventCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: EventCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => *only == category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Events",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

/// Session-local filter state. The two selectors are independent; changing
/// one never touches the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub category: CategoryFilter,
    pub status: EventStatus,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            status: EventStatus::Upcoming,
        }
    }
}

impl FilterSelection {
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn set_status(&mut self, status: EventStatus) {
        self.status = status;
    }
}

/// Ordered subsequence of `events` matching the selection. Source order is
/// preserved; an empty result is an expected outcome, not an error.
pub fn filter_events<'a>(events: &'a [Event], selection: FilterSelection) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| {
            event.status == selection.status && selection.category.matches(event.category)
        })
        .collect()
}

/// Per-category counts for the current status selector, shown on the filter
/// tabs. `all` always equals the sum of the four category counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCounts {
    pub all: usize,
    per_category: Vec<(EventCategory, usize)>,
}

impl CategoryCounts {
    pub fn of(&self, category: EventCategory) -> usize {
        self.per_category
            .iter()
            .find(|(candidate, _)| *candidate == category)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EventCategory, usize)> + '_ {
        self.per_category.iter().copied()
    }
}

pub fn category_counts(events: &[Event], status: EventStatus) -> CategoryCounts {
    let by_category = events
        .iter()
        .filter(|event| event.status == status)
        .counts_by(|event| event.category);

    CategoryCounts {
        all: by_category.values().sum(),
        per_category: EventCategory::iter()
            .map(|category| (category, by_category.get(&category).copied().unwrap_or(0)))
            .collect(),
    }
}
