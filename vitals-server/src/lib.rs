mod error;
mod fixtures;
mod models;
mod utils;

pub use error::{ServerError, ServerResult};
pub use fixtures::FixtureStore;
pub use models::{EmergencyEvent, EmergencyVitals};

use error::FixtureFailure;
use log::{debug, error};
use std::{convert::Infallible, time::Duration};
use utils::*;
use vitals_simulator::VitalsSource;
use warp::{http::StatusCode, ws::Ws, Filter, Rejection, Reply};

/// Port of the REST API
pub const API_PORT: u16 = 3000;

/// Port of the real-time vitals stream
pub const STREAM_PORT: u16 = 3001;

/// Localhost IP address
pub const IP_ADDRESS: [u8; 4] = [127, 0, 0, 1];

/// Period between two readings on one subscription
pub const STREAM_PERIOD: Duration = Duration::from_millis(2000);

/// Create routes for the REST API
///
/// `Public` only for testing
pub fn api_routes(
    store: FixtureStore,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let vitals = warp::path!("api" / "vitals")
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(handle_vitals);

    let alerts = warp::path!("api" / "alerts")
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(|store: FixtureStore| handle_fixture(store, "alerts"));

    let emergency = warp::path!("api" / "emergency")
        .and(warp::post())
        .and_then(handle_emergency);

    let architecture = warp::path!("api" / "architecture")
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(|store: FixtureStore| handle_fixture(store, "architecture"));

    let tech_stack = warp::path!("api" / "tech-stack")
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(|store: FixtureStore| handle_fixture(store, "tech-stack"));

    let timeline = warp::path!("api" / "timeline")
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(|store: FixtureStore| handle_fixture(store, "timeline"));

    let team = warp::path!("api" / "team")
        .and(warp::get())
        .and(with_store(store))
        .and_then(|store: FixtureStore| handle_fixture(store, "team"));

    // The site is served from a different origin than the API
    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST"])
        .allow_header("content-type");

    vitals
        .or(alerts)
        .or(emergency)
        .or(architecture)
        .or(tech_stack)
        .or(timeline)
        .or(team)
        .recover(handle_rejection)
        .with(cors)
}

/// Create the route for the real-time vitals stream
///
/// The generator and the period come in as arguments so tests can run a
/// deterministic sequence on a fast clock; the live binary passes
/// [`vitals_simulator::live_source`] and [`STREAM_PERIOD`]
pub fn stream_routes(
    source: VitalsSource,
    period: Duration,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path::end()
        .and(warp::ws())
        .and(with_source(source))
        .map(move |ws: Ws, source: VitalsSource| {
            ws.on_upgrade(move |socket| stream_vitals(socket, source, period))
        })
}

/// Handles `GET /api/vitals` with the current snapshot of the fixture
async fn handle_vitals(store: FixtureStore) -> Result<impl Reply, Rejection> {
    let mut document = store.load("vitals").map_err(reject_request)?;

    // The fixture nests its snapshot under `current` so history can sit
    // alongside it without changing the endpoint
    let current = document
        .get_mut("current")
        .map(serde_json::Value::take)
        .ok_or_else(|| {
            reject_request(ServerError::FixtureShape {
                name: "vitals",
                expected: "a `current` object",
            })
        })?;

    Ok(warp::reply::json(&current))
}

/// Handles the fixture-backed `GET` endpoints by document name
async fn handle_fixture(store: FixtureStore, name: &'static str) -> Result<impl Reply, Rejection> {
    debug!("serving fixture `{name}`");

    let document = store.load(name).map_err(reject_request)?;

    Ok(warp::reply::json(&document))
}

/// Handles `POST /api/emergency` with a synthesized fall-detection event
async fn handle_emergency() -> Result<impl Reply, Rejection> {
    let event = EmergencyEvent::synthesize();

    debug!("synthesized emergency event `{}`", event.id);

    Ok(warp::reply::json(&event))
}

/// Log the failure and wrap it for the rejection pipeline
fn reject_request(err: ServerError) -> Rejection {
    error!("request failed: {err}");

    warp::reject::custom(FixtureFailure(err))
}

/// Turn rejections into JSON error responses
///
/// A fixture failure stays scoped to its own request, everything else
/// falls through to a generic status
async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if let Some(FixtureFailure(source)) = err.find() {
        (StatusCode::INTERNAL_SERVER_ERROR, source.to_string())
    } else if err.is_not_found() {
        (StatusCode::NOT_FOUND, "no such endpoint".to_string())
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "unhandled rejection".to_string(),
        )
    };

    let body = warp::reply::json(&serde_json::json!({ "error": message }));

    Ok(warp::reply::with_status(body, status))
}
