#[cfg(feature = "http_api")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::net::SocketAddr;

    use broadcast_schedule::{
        ProcessedSchedule, ProcessingConfig, http_api, load_config_from_json,
        load_schedule_from_json,
    };
    use tracing::{Level, info};
    use tracing_subscriber::FmtSubscriber;

    FmtSubscriber::builder()
        .with_max_level(
            std::env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let addr: SocketAddr = std::env::var("BROADCAST_SCHEDULE_HTTP_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()?;

    let config = match std::env::var("BROADCAST_SCHEDULE_CONFIG") {
        Ok(path) => load_config_from_json(&path)?,
        Err(_) => ProcessingConfig::default(),
    };

    let schedule = match std::env::var("BROADCAST_SCHEDULE_DATA") {
        Ok(path) => {
            let schedule = load_schedule_from_json(&path, &config)?;
            info!(path = %path, days = schedule.days.len(), "loaded schedule data");
            schedule
        }
        Err(_) => ProcessedSchedule::default(),
    };

    info!("broadcast-schedule HTTP API listening on http://{addr}");
    http_api::serve(addr, schedule, config).await?;
    Ok(())
}

#[cfg(not(feature = "http_api"))]
fn main() {
    eprintln!("Rebuild with the `http_api` feature to enable the HTTP server.");
}
