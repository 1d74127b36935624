use thiserror::Error;

/// Failures a fetch can surface. The `Display` strings are exactly what the
/// widget places in its error region, minus the `Error: ` prefix the view
/// layer adds.
#[derive(Debug, Error)]
pub enum Error {
    /// Input validation: the search field was empty or whitespace-only.
    #[error("Please enter a city name")]
    EmptyCity,

    /// The provider answered 404 for the requested city.
    #[error("City not found. Please check the spelling.")]
    CityNotFound,

    /// Any other non-success HTTP status.
    #[error("weather request failed with status {0}")]
    Http(u16),

    /// Connection, TLS or timeout failure before a status was received.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The provider answered 2xx but the body did not match the documented shape.
    #[error("unexpected response body: {0}")]
    UnexpectedBody(String),
}
