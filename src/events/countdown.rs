use crate::community::model::{Event, EventStatus};
use crate::ticker::{spawn_ticker, TickerHandle};
use chrono::{Local, NaiveDateTime, NaiveTime};
use std::time::Duration;
use tokio::sync::watch;

/// Remaining time until the next event, truncated at each unit boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Countdown {
    /// All-zero once the target has passed; a countdown never goes negative.
    pub fn remaining(target: NaiveDateTime, now: NaiveDateTime) -> Self {
        let diff = (target - now).num_seconds();
        if diff <= 0 {
            return Self::default();
        }

        let diff = diff as u64;
        Self {
            days: diff / 86_400,
            hours: diff / 3_600 % 24,
            minutes: diff / 60 % 60,
            seconds: diff % 60,
        }
    }

    pub fn is_due(&self) -> bool {
        *self == Self::default()
    }
}

/// The event the hero countdown points at: the upcoming event with the
/// earliest date. `None` when nothing is upcoming, in which case no
/// countdown is shown at all.
pub fn next_event(events: &[Event]) -> Option<&Event> {
    events
        .iter()
        .filter(|event| event.status == EventStatus::Upcoming)
        .min_by_key(|event| event.date)
}

/// Event dates carry no machine-readable start time (the time field is a
/// display string), so the countdown targets midnight of the event date.
pub fn countdown_target(event: &Event) -> NaiveDateTime {
    event.date.and_time(NaiveTime::MIN)
}

/// Recomputes the countdown once per `period` and publishes it on a watch
/// channel. The underlying task stops as soon as the ticker is dropped.
#[derive(Debug)]
pub struct CountdownTicker {
    _handle: TickerHandle,
    receiver: watch::Receiver<Countdown>,
}

impl CountdownTicker {
    pub fn start(target: NaiveDateTime, period: Duration) -> Self {
        let initial = Countdown::remaining(target, Local::now().naive_local());
        let (sender, receiver) = watch::channel(initial);

        let handle = spawn_ticker(period, move || {
            let now = Local::now().naive_local();
            let _ = sender.send(Countdown::remaining(target, now));
        });

        Self {
            _handle: handle,
            receiver,
        }
    }

    pub fn current(&self) -> Countdown {
        *self.receiver.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Countdown> {
        self.receiver.clone()
    }
}
