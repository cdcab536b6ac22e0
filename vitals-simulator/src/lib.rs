mod generator;
mod models;
mod utils;

pub use generator::{generate_vitals, live_source, VitalsSource};
pub use models::VitalsReading;
