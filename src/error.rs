use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur when interacting with the PayRun.io API.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("error making request: {0:?}")]
    #[diagnostic(
        code(payrun_rs::request_error),
        help("Check your network connection and PayRun.io API availability")
    )]
    Request(#[source] reqwest::Error),

    /// A non-success status returned by the API. The body is passed through
    /// undecoded so callers can inspect the remote error payload.
    #[error("API request failed with status {status} (url: {url})")]
    #[diagnostic(
        code(payrun_rs::api_error),
        help("Inspect the response body returned by the PayRun.io API")
    )]
    Api {
        status: reqwest::StatusCode,
        url: String,
        body: String,
    },

    #[error("error decoding response: {0:?}")]
    #[diagnostic(
        code(payrun_rs::decode_error),
        help("The API returned a body that is not valid JSON")
    )]
    Decode(#[source] serde_json::Error, Option<String>),

    /// Raised by a model's `format()` when a required nested model was never
    /// set. Deliberately names only the model type, not the missing field.
    #[error("unable to format model {model}: model not fully populated")]
    #[diagnostic(
        code(payrun_rs::model_incomplete),
        help("Set every required nested model on the {model} before formatting it")
    )]
    ModelIncomplete { model: &'static str },

    #[error("endpoint could not be parsed as a URL")]
    #[diagnostic(
        code(payrun_rs::invalid_endpoint),
        help("Check that the API endpoint path is correctly formatted")
    )]
    InvalidEndpoint,
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Request(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e, None)
    }
}

/// Type alias for results from this crate.
pub type Result<O> = std::result::Result<O, Error>;
