use crate::fixtures::FixtureStore;
use futures::{SinkExt, StreamExt};
use log::{error, info, warn};
use std::{convert::Infallible, time::Duration};
use tokio::time;
use vitals_simulator::VitalsSource;
use warp::{
    ws::{Message, WebSocket},
    Filter,
};

/// Add [`FixtureStore`] to the [`Filter`]
pub(crate) fn with_store(
    store: FixtureStore,
) -> impl Filter<Extract = (FixtureStore,), Error = Infallible> + Clone {
    warp::any().map(move || store.clone())
}

/// Add [`VitalsSource`] to the [`Filter`]
pub(crate) fn with_source(
    source: VitalsSource,
) -> impl Filter<Extract = (VitalsSource,), Error = Infallible> + Clone {
    warp::any().map(move || source.clone())
}

/// Push readings to one subscriber until its connection ends
///
/// Every subscription owns the interval on this task's stack, so ending
/// the task is all it takes to cancel further emissions. The first tick
/// fires at once: a fresh client sees a reading without waiting out the
/// period
pub(crate) async fn stream_vitals(ws: WebSocket, source: VitalsSource, period: Duration) {
    info!("client connected to the vitals stream");

    let (mut ws_tx, mut ws_rx) = ws.split();
    let mut schedule = time::interval(period);

    loop {
        tokio::select! {
            _ = schedule.tick() => {
                let reading = source();

                let message = match serde_json::to_string(&reading) {
                    Ok(message) => message,
                    Err(err) => {
                        warn!("serialization has failed: {err}");
                        continue;
                    }
                };

                // Fire-and-forget: a delivery the transport refuses is
                // dropped and the subscription is torn down
                if let Err(err) = ws_tx.send(Message::text(message)).await {
                    error!("failed to send reading to WebSocket client: {err}");
                    break;
                }
            }
            incoming = ws_rx.next() => match incoming {
                Some(Ok(message)) if message.is_close() => {
                    info!("WebSocket connection is closed");
                    break;
                }
                // The channel carries no client payloads of consequence
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    error!("error occured for WebSocket: {err}");
                    break;
                }
                None => break,
            },
        }
    }
}
