use thiserror::Error;

/// Alias for a standard [`Result`], but with [`DashboardError`]
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Highlevel error for the dashboard client, covering the transport
/// and decoding failures a live feed can run into
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}
