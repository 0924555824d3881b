//! Errors returned by the agent core.
//!
//! All failures are synchronous and local: an operation either completes or
//! returns one of the variants below, leaving the entity it was called on
//! untouched. Nothing in this crate retries, logs as a recovery strategy, or
//! substitutes fallback values — an absent optional field is a success, not an
//! error.

use thiserror::Error;

/// Result type shared by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by trace recording, batch aggregation, and the wire codec.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A required argument was missing, empty, or out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// An index addressed a span or command part that was never created.
    #[error("index {index} does not exist")]
    NotFound {
        /// The offending index or offset.
        index: u32,
    },

    /// A span was stopped a second time. The stop transition is one-way and
    /// the originally recorded stop time is preserved.
    #[error("span {index} is already stopped")]
    AlreadyStopped {
        /// Index of the span within its trace.
        index: u32,
    },

    /// An entity was used after its terminal `serialize` call (or after being
    /// moved from). This is an integration bug in the caller, surfaced loudly
    /// instead of reading consumed state.
    #[error("{entity} has already been serialized and can no longer be used")]
    UseAfterSerialize {
        /// Name of the consumed entity type.
        entity: &'static str,
    },

    /// Input to a `load`/`decode` operation was malformed, truncated, or of an
    /// incompatible version.
    #[error("failed to decode payload: {0}")]
    Decoding(#[from] prost::DecodeError),

    /// The entity's field state could not be represented by the codec.
    #[error("failed to encode payload: {0}")]
    Encoding(String),

    /// The platform cannot supply a monotonic high-resolution time source.
    /// Callers should treat this as fatal at startup; no timing in the agent
    /// is meaningful without it.
    #[error("monotonic high-resolution clock is unavailable")]
    UnavailableClock,
}

impl From<prost::EncodeError> for Error {
    fn from(err: prost::EncodeError) -> Self {
        Error::Encoding(err.to_string())
    }
}
