use lazy_static::lazy_static;
use std::{env, io};
use tokio::task::JoinHandle;
use tracing::{info, warn, Level};
use tracing_loki::url::Url;
use tracing_loki::{BackgroundTask, BackgroundTaskController};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter, fmt};

lazy_static! {
    static ref LOKI_URL: Option<String> = env::var("LOKI_URL").ok();
}

fn build_loki_layer(
    base_url: Url,
) -> (
    tracing_loki::Layer,
    BackgroundTaskController,
    BackgroundTask,
) {
    tracing_loki::builder()
        .label("service", "tambayan")
        .expect("Failed setting label")
        .build_controller_url(base_url)
        .expect("Failed building Loki layer")
}

pub async fn setup_loki() -> Option<(BackgroundTaskController, JoinHandle<()>)> {
    let filter = filter::Targets::new()
        .with_target("tambayan", Level::TRACE)
        .with_default(Level::WARN);

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stdout));

    match LOKI_URL.as_ref() {
        None => {
            registry.init();
            warn!("Loki URL not provided. Continuing without it.");
        }
        Some(base_url) => match base_url.parse::<Url>() {
            Ok(base_url) => {
                let (layer, controller, task) = build_loki_layer(base_url);

                registry.with(layer).init();
                let handle = tokio::spawn(task);

                info!("Loki initialized");

                return Some((controller, handle));
            }
            Err(_) => {
                registry.init();
                warn!("Invalid Loki URL. Continuing without it.");
            }
        },
    };

    None
}
