//! # APM Agent Core
//!
//! Data model and wire encoding core for an application performance monitoring
//! agent. This crate records a tree of timed operations ([`Trace`] and its
//! spans) while an instrumented unit of work executes, aggregates finished
//! recordings into a transmittable [`Batch`], and carries the handshake
//! ([`Hello`]) and structured fault ([`ErrorReport`]) payloads exchanged with a
//! remote collector.
//!
//! The crate deliberately ends at the serialization boundary: network
//! transport, persistence, and collector authentication belong to the layers
//! above. Host-language binding glue (argument marshaling, handle lifetime
//! wrapping) also lives outside this crate; the API here is the call contract
//! that glue is written against.
//!
//! ## Ownership discipline
//!
//! Every entity is mutable only until its single, terminal `serialize` call.
//! Serializing (or moving a buffer into a [`Batch`]) consumes the entity's
//! state; any later call on the same handle fails with
//! [`Error::UseAfterSerialize`] instead of touching stale data. This is the
//! guard the host binding relies on to turn use-after-move bugs into ordinary
//! recoverable errors rather than crashes.
//!
//! ## Example
//!
//! ```
//! use apm_agent_core::{Batch, Trace};
//!
//! # fn main() -> apm_agent_core::Result<()> {
//! let mut trace = Trace::new(1000, "abc-123")?;
//! let span = trace.start_span(1005, "db.query")?;
//! trace.stop_span(span, 1050)?;
//! trace.set_name("GET /users")?;
//! let encoded = trace.serialize()?;
//!
//! let mut batch = Batch::new(1700000000, Some("web-1".to_owned()));
//! batch.set_endpoint_count("users#index", 1)?;
//! batch.move_in(encoded)?;
//! let _payload = batch.serialize()?;
//! # Ok(())
//! # }
//! ```
#![warn(
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    unreachable_pub,
    unused
)]
#![cfg_attr(docsrs, feature(doc_cfg), deny(rustdoc::broken_intra_doc_links))]
#![cfg_attr(test, deny(warnings))]

mod internal_logging;

pub mod batch;
pub mod clock;
mod codec;
mod error;
pub mod hello;
pub mod proto;
pub mod report;
mod span;
pub mod trace;

pub use batch::Batch;
pub use error::{Error, Result};
pub use hello::Hello;
pub use report::ErrorReport;
pub use trace::Trace;

#[doc(hidden)]
#[cfg(feature = "internal-logs")]
pub mod _private {
    pub use tracing::debug;
}
