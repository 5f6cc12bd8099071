use {crate::domain::Currency, thiserror::Error};

/// Why a rate could not be resolved. All variants end up as the same user-facing banner.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RateError {
    /// Server answered with a non-success status
    #[error("rate API returned HTTP {status}")]
    Fetch { status: u16 },

    /// Request never produced a response (DNS, TLS, CORS, offline...)
    #[error("rate API request failed: {0}")]
    Network(String),

    /// Body was not the JSON shape we expect
    #[error("rate API response could not be decoded: {0}")]
    Decode(String),

    /// Response (or simulation table) has no usable positive rate for the target
    #[error("no usable rate for {code}")]
    RateUnavailable { code: Currency },
}
