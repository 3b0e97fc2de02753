use chrono::{Duration as ChronoDuration, Local, NaiveDate, NaiveTime};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tambayan::community::model::{Event, EventCategory, EventStatus};
use tambayan::events::countdown::{countdown_target, next_event, Countdown, CountdownTicker};
use tambayan::ticker::spawn_ticker;

fn upcoming(id: &str, date: NaiveDate) -> Event {
    Event {
        id: id.to_string(),
        title: format!("Event {}", id),
        description: "".to_string(),
        date,
        time: "6:00 PM".to_string(),
        location: "TBA".to_string(),
        category: EventCategory::Meetup,
        status: EventStatus::Upcoming,
        rsvp_url: None,
        image_url: None,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test_log::test]
fn one_of_each_unit() {
    let now = date(2026, 1, 1).and_time(NaiveTime::MIN);
    let target = now + ChronoDuration::seconds(90_061);

    let countdown = Countdown::remaining(target, now);

    assert_eq!(
        countdown,
        Countdown {
            days: 1,
            hours: 1,
            minutes: 1,
            seconds: 1
        }
    );
}

#[test_log::test]
fn units_truncate_at_their_boundaries() {
    let now = date(2026, 1, 1).and_time(NaiveTime::MIN);

    let countdown = Countdown::remaining(now + ChronoDuration::seconds(59), now);
    assert_eq!(
        countdown,
        Countdown {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 59
        }
    );

    let countdown = Countdown::remaining(now + ChronoDuration::days(3), now);
    assert_eq!(
        countdown,
        Countdown {
            days: 3,
            hours: 0,
            minutes: 0,
            seconds: 0
        }
    );
}

#[test_log::test]
fn past_target_is_all_zero() {
    let now = date(2026, 1, 1).and_time(NaiveTime::MIN);

    assert!(Countdown::remaining(now, now).is_due());
    assert!(Countdown::remaining(now - ChronoDuration::seconds(5), now).is_due());
}

#[test_log::test]
fn next_event_is_the_earliest_upcoming_one() {
    let mut hackathon = upcoming("5", date(2026, 3, 22));
    hackathon.category = EventCategory::Hackathon;
    let mut past = upcoming("1", date(2025, 11, 15));
    past.status = EventStatus::Past;
    let events = vec![
        hackathon,
        upcoming("6", date(2026, 2, 1)),
        upcoming("7", date(2026, 1, 25)),
        past,
    ];

    let next = next_event(&events).unwrap();

    assert_eq!(next.id, "7");
    assert_eq!(
        countdown_target(next),
        date(2026, 1, 25).and_time(NaiveTime::MIN)
    );
}

#[test_log::test]
fn no_upcoming_event_means_no_countdown() {
    let mut past = upcoming("1", date(2025, 11, 15));
    past.status = EventStatus::Past;

    assert!(next_event(&[past]).is_none());
    assert!(next_event(&[]).is_none());
}

#[test_log::test(tokio::test(start_paused = true))]
async fn ticker_fires_once_per_period() {
    let count = Arc::new(AtomicUsize::new(0));
    let tick_count = count.clone();

    let _handle = spawn_ticker(Duration::from_secs(1), move || {
        tick_count.fetch_add(1, Ordering::SeqCst);
    });

    tokio::time::sleep(Duration::from_millis(3500)).await;
    tokio::task::yield_now().await;

    assert_eq!(count.load(Ordering::SeqCst), 3);
}

#[test_log::test(tokio::test(start_paused = true))]
async fn ticker_stops_after_teardown() {
    let count = Arc::new(AtomicUsize::new(0));
    let tick_count = count.clone();

    let handle = spawn_ticker(Duration::from_secs(1), move || {
        tick_count.fetch_add(1, Ordering::SeqCst);
    });

    tokio::time::sleep(Duration::from_millis(2500)).await;
    tokio::task::yield_now().await;
    let ticks_before_teardown = count.load(Ordering::SeqCst);
    assert_eq!(ticks_before_teardown, 2);

    drop(handle);
    tokio::time::sleep(Duration::from_secs(5)).await;
    tokio::task::yield_now().await;

    assert_eq!(count.load(Ordering::SeqCst), ticks_before_teardown);
}

#[test_log::test(tokio::test(start_paused = true))]
async fn replacing_a_ticker_aborts_the_previous_one() {
    let first_count = Arc::new(AtomicUsize::new(0));
    let second_count = Arc::new(AtomicUsize::new(0));

    let ticks = first_count.clone();
    let mut handle = spawn_ticker(Duration::from_secs(1), move || {
        ticks.fetch_add(1, Ordering::SeqCst);
    });

    tokio::time::sleep(Duration::from_millis(1500)).await;
    tokio::task::yield_now().await;
    assert_eq!(first_count.load(Ordering::SeqCst), 1);

    let ticks = second_count.clone();
    handle = spawn_ticker(Duration::from_secs(1), move || {
        ticks.fetch_add(1, Ordering::SeqCst);
    });

    tokio::time::sleep(Duration::from_secs(3)).await;
    tokio::task::yield_now().await;

    assert_eq!(first_count.load(Ordering::SeqCst), 1);
    assert!(second_count.load(Ordering::SeqCst) >= 2);
    assert!(handle.is_running());
}

#[test_log::test(tokio::test(start_paused = true))]
async fn countdown_ticker_publishes_updates() {
    let target = Local::now().naive_local() + ChronoDuration::days(2);

    let ticker = CountdownTicker::start(target, Duration::from_secs(1));
    let mut receiver = ticker.subscribe();

    assert!(ticker.current().days >= 1);

    tokio::time::sleep(Duration::from_millis(1500)).await;
    tokio::task::yield_now().await;

    assert!(receiver.has_changed().unwrap());
    assert!(receiver.borrow_and_update().days >= 1);
}
