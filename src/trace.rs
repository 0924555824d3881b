//! One recording session for an instrumented unit of work.
//!
//! A [`Trace`] is created when the unit of work begins, accumulates spans as
//! the work proceeds, is usually named once the endpoint is known, and is
//! finished by its one terminal [`Trace::serialize`] call. The encoded buffer
//! is then moved into a [`crate::Batch`] verbatim; the trace itself is never
//! decoded again by this crate, except for the [`Trace::name_from_serialized`]
//! fast path the aggregation stage uses to group buffers by endpoint.

use crate::codec;
use crate::error::{Error, Result};
use crate::proto;
use crate::span::SpanTable;

#[derive(Debug)]
struct TraceInner {
    uuid: String,
    started_at: u64,
    name: Option<String>,
    spans: SpanTable,
}

/// One recorded unit of work with a timeline of spans.
///
/// The handle is a runtime-guarded slot: [`Trace::serialize`] takes the
/// recording out, and every later call fails with
/// [`Error::UseAfterSerialize`]. The host binding keeps handles alive past
/// Rust's static move tracking, so the guard is checked at every entry point
/// rather than relying on consuming `self`.
#[derive(Debug)]
pub struct Trace {
    inner: Option<TraceInner>,
}

impl Trace {
    /// Starts a new recording session.
    ///
    /// Fails with [`Error::InvalidArgument`] if `uuid` is empty.
    pub fn new(started_at: u64, uuid: impl Into<String>) -> Result<Self> {
        let uuid = uuid.into();
        if uuid.is_empty() {
            return Err(Error::InvalidArgument("trace uuid must not be empty"));
        }
        Ok(Trace {
            inner: Some(TraceInner {
                uuid,
                started_at,
                name: None,
                spans: SpanTable::default(),
            }),
        })
    }

    /// Recovers the name of a previously serialized trace without decoding
    /// its span sequence.
    ///
    /// Returns `None` for a trace that was never named. Fails with
    /// [`Error::Decoding`] on malformed input.
    pub fn name_from_serialized(buf: &[u8]) -> Result<Option<String>> {
        codec::peek_name(buf)
    }

    /// Returns the timestamp the recording began with.
    pub fn started_at(&self) -> Result<u64> {
        Ok(self.inner()?.started_at)
    }

    /// Returns the trace's identity.
    pub fn uuid(&self) -> Result<&str> {
        Ok(&self.inner()?.uuid)
    }

    /// Returns the endpoint name, or `None` if the trace has not been named.
    pub fn name(&self) -> Result<Option<&str>> {
        Ok(self.inner()?.name.as_deref())
    }

    /// Names the trace. May be called repeatedly while open; last write wins.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.inner_mut()?.name = Some(name.into());
        Ok(())
    }

    /// Opens a new span and returns its index within this trace.
    ///
    /// The index is only meaningful for the trace that issued it.
    pub fn start_span(&mut self, time: u64, category: &str) -> Result<u32> {
        self.inner_mut()?.spans.start(time, category)
    }

    /// Stops the span at `index`, recording its stop time.
    pub fn stop_span(&mut self, index: u32, time: u64) -> Result<()> {
        self.inner_mut()?.spans.stop(index, time)
    }

    /// Sets the title of the span at `index`.
    pub fn span_set_title(&mut self, index: u32, title: &str) -> Result<()> {
        self.inner_mut()?.spans.set_title(index, title)
    }

    /// Sets the description of the span at `index`.
    pub fn span_set_description(&mut self, index: u32, description: &str) -> Result<()> {
        self.inner_mut()?.spans.set_description(index, description)
    }

    /// Encodes the trace and consumes the recording.
    ///
    /// This is the hand-off point to the aggregation stage: the returned
    /// buffer is the only remaining form of the trace, and every further call
    /// on this handle fails with [`Error::UseAfterSerialize`].
    pub fn serialize(&mut self) -> Result<Vec<u8>> {
        let inner = self.take_inner()?;
        let message = proto::Trace {
            uuid: inner.uuid,
            started_at: inner.started_at,
            name: inner.name,
            spans: inner.spans.into_proto(),
        };
        let buf = codec::encode(&message)?;
        crate::agent_debug!(name: "Trace.Serialized", uuid = message.uuid.as_str(), bytes = buf.len() as u64);
        Ok(buf)
    }

    fn inner(&self) -> Result<&TraceInner> {
        self.inner
            .as_ref()
            .ok_or(Error::UseAfterSerialize { entity: "Trace" })
    }

    fn inner_mut(&mut self) -> Result<&mut TraceInner> {
        self.inner
            .as_mut()
            .ok_or(Error::UseAfterSerialize { entity: "Trace" })
    }

    fn take_inner(&mut self) -> Result<TraceInner> {
        self.inner
            .take()
            .ok_or(Error::UseAfterSerialize { entity: "Trace" })
    }
}
