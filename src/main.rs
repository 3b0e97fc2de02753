use tambayan::community::catalog::Catalog;
use tambayan::config::env_loader::load_config;
use tambayan::site::Site;
use tracing::info;

#[tokio::main]
async fn main() {
    let _loki = tambayan::tracing::setup_loki().await;

    let config = load_config();
    let catalog = Catalog::load().expect("Failed to load community dataset");
    let site = Site::new(catalog, config);

    let events = site.events_view();
    info!(
        "{} ({} matching)",
        events.selection.category.label(),
        events.counts.all
    );
    for event in &events.events {
        info!(
            "[{}] {} on {} at {}",
            event.category.label(),
            event.title,
            event.date,
            event.location
        );
    }
    if let Some(message) = events.empty_state() {
        info!("{}", message);
    }

    let speakers = site.speakers_view();
    info!(
        "{} past speakers, {} to be announced",
        speakers.past.len(),
        speakers.announced.len()
    );

    info!("Community links: {}", site.links());

    if let Some(ticker) = site.start_countdown() {
        let countdown = ticker.current();
        info!(
            "Next event in {}d {}h {}m {}s",
            countdown.days, countdown.hours, countdown.minutes, countdown.seconds
        );
    }
}
