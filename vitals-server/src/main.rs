use log::info;
use vitals_server::{
    api_routes, stream_routes, FixtureStore, API_PORT, IP_ADDRESS, STREAM_PERIOD, STREAM_PORT,
};
use vitals_simulator::live_source;

#[tokio::main]
async fn main() {
    env_logger::init();

    let api = api_routes(FixtureStore::bundled());
    let stream = stream_routes(live_source(), STREAM_PERIOD);

    info!("API server running on http://127.0.0.1:{API_PORT}");
    for endpoint in [
        "GET  /api/vitals",
        "GET  /api/alerts",
        "POST /api/emergency",
        "GET  /api/architecture",
        "GET  /api/tech-stack",
        "GET  /api/timeline",
        "GET  /api/team",
    ] {
        info!("  {endpoint}");
    }
    info!("vitals stream running on ws://127.0.0.1:{STREAM_PORT}");

    // One process, two listeners: the REST API and the stream stay on
    // separate ports like the site expects
    tokio::join!(
        warp::serve(api).run((IP_ADDRESS, API_PORT)),
        warp::serve(stream).run((IP_ADDRESS, STREAM_PORT)),
    );
}
