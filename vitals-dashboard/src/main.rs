use log::info;
use vitals_dashboard::{RollingHistory, VitalsFeed};

/// Vitals stream endpoint of the backend
const STREAM_URL: &str = "ws://127.0.0.1:3001/";

#[tokio::main]
async fn main() {
    env_logger::init();

    let mut feed = VitalsFeed::connect(STREAM_URL);
    let mut history = RollingHistory::new();

    while let Some(reading) = feed.recv().await {
        history.push(&reading);

        let label = history.labels().last().unwrap_or("--:--:--");
        info!(
            "[{label}] HR {} bpm | SpO2 {}% | {:.1} C ({} in history)",
            reading.heart_rate,
            reading.sp_o2,
            reading.temperature,
            history.len(),
        );
    }

    // Offline placeholder, mirroring what the page shows without a feed
    info!("vitals stream disconnected: -- bpm | --% | --.- C");
}
