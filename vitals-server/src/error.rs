use thiserror::Error;

/// Alias for a standard [`Result`], but with [`ServerError`]
pub type ServerResult<T> = Result<T, ServerError>;

/// Highlevel error for the backend, that helps to cover all results
/// gracefully and avoid unwrapping and panicks everywhere
#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error("failed to read fixture `{name}`")]
    FixtureRead {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("fixture `{name}` is missing {expected}")]
    FixtureShape {
        name: &'static str,
        expected: &'static str,
    },
}

/// Marker that carries a [`ServerError`] through warp's rejection machinery
#[derive(Debug)]
pub(crate) struct FixtureFailure(pub(crate) ServerError);

impl warp::reject::Reject for FixtureFailure {}
