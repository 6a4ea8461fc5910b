//! Error taxonomy for a single rewrite attempt

use thiserror::Error;

/// Classified outcome of one failed rewrite attempt against one credential.
///
/// The dispatch engine branches on the variant: rate limits, provider
/// errors and transport failures are retried with backoff and eventually
/// requeued for another credential; an invalid credential retires its
/// worker for the rest of the run. A malformed-but-successful response is
/// not an error at all — providers degrade it to the original input text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RewriteError {
    /// Provider signalled throttling for this credential (HTTP 429)
    #[error("rate limited")]
    RateLimited,

    /// Credential rejected outright (HTTP 401)
    #[error("credential rejected")]
    AuthInvalid,

    /// Any other non-2xx provider response
    #[error("provider error (HTTP {0})")]
    Provider(u16),

    /// The request never produced a classifiable provider response
    #[error("transport error: {0}")]
    Transport(String),
}
