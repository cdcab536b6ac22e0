mod error;
mod feed;
mod models;
mod playback;
mod utils;

pub use error::{DashboardError, DashboardResult};
pub use feed::VitalsFeed;
pub use models::{FeedState, RollingHistory, HISTORY_CAPACITY};
pub use playback::{EmergencySimulation, ScriptedStep};
