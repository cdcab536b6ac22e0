use crate::{error::*, models::FeedState};
use futures::StreamExt;
use log::{error, info, warn};
use tokio::sync::{mpsc, watch};
use tokio_tungstenite::{connect_async, tungstenite::Message};
use vitals_simulator::VitalsReading;

/// Live subscription to the vitals stream
///
/// The feed owns one background task that keeps the [`FeedState`]
/// current and forwards every reading in arrival order. There is no
/// automatic reconnection: once the transport drops, the feed stays
/// down and reports `connected = false`
pub struct VitalsFeed {
    readings: mpsc::UnboundedReceiver<VitalsReading>,
    state: watch::Receiver<FeedState>,
}

impl VitalsFeed {
    /// Subscribe to the stream at `url`
    ///
    /// Returns at once: the feed starts disconnected with no reading
    /// until the socket opens
    pub fn connect(url: impl Into<String>) -> Self {
        let url = url.into();
        let (reading_tx, readings) = mpsc::unbounded_channel();
        let (state_tx, state) = watch::channel(FeedState::default());

        tokio::spawn(async move {
            if let Err(err) = run_feed(&url, &reading_tx, &state_tx).await {
                error!("vitals feed terminated: {err}");
            }

            state_tx.send_modify(|feed| feed.connected = false);
        });

        Self { readings, state }
    }

    /// Next reading in send order
    ///
    /// Resolves to [`None`] once the feed is down and drained
    pub async fn recv(&mut self) -> Option<VitalsReading> {
        self.readings.recv().await
    }

    /// Most recent reading, [`None`] until the first one arrives
    pub fn latest(&self) -> Option<VitalsReading> {
        self.state.borrow().latest.clone()
    }

    /// Live transport state
    pub fn connected(&self) -> bool {
        self.state.borrow().connected
    }
}

/// Pump the socket until it closes or errors out
async fn run_feed(
    url: &str,
    readings: &mpsc::UnboundedSender<VitalsReading>,
    state: &watch::Sender<FeedState>,
) -> DashboardResult<()> {
    let (mut ws_stream, _) = connect_async(url).await?;

    state.send_modify(|feed| feed.connected = true);
    info!("connected to the vitals stream at {url}");

    while let Some(result) = ws_stream.next().await {
        match result? {
            Message::Text(text) => {
                // A malformed frame is dropped, the stream itself stays up
                let reading = match serde_json::from_str::<VitalsReading>(&text) {
                    Ok(reading) => reading,
                    Err(err) => {
                        warn!("failed to parse [`VitalsReading`]: {err}");
                        continue;
                    }
                };

                state.send_modify(|feed| feed.latest = Some(reading.clone()));

                // The dashboard side may already be gone, nothing left to do then
                if readings.send(reading).is_err() {
                    break;
                }
            }
            Message::Close(frame) => {
                info!("vitals stream closed by the server: {frame:?}");
                break;
            }
            _ => {}
        }
    }

    Ok(())
}
