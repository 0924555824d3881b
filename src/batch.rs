//! Aggregation of finished traces into one transmission unit.
//!
//! A [`Batch`] is assembled by the reporting stage, typically on a single
//! background thread, while producer threads build and serialize their own
//! traces independently. Trace buffers arrive already encoded and are carried
//! verbatim — the batch never decodes them — so the cost of batching is
//! bounded by the number of traces, not their span counts.

use std::collections::BTreeMap;

use crate::codec;
use crate::error::{Error, Result};
use crate::proto;

#[derive(Debug)]
struct BatchInner {
    timestamp: u32,
    hostname: Option<String>,
    endpoint_counts: BTreeMap<String, u64>,
    traces: Vec<Vec<u8>>,
}

/// One transmission cycle's worth of serialized traces and endpoint counters.
///
/// Like [`crate::Trace`], the handle is runtime-guarded: after
/// [`Batch::serialize`] every call fails with [`Error::UseAfterSerialize`].
#[derive(Debug)]
pub struct Batch {
    inner: Option<BatchInner>,
}

impl Batch {
    /// Creates an empty batch stamped with the assembly time and, optionally,
    /// the reporting host's identity.
    pub fn new(timestamp: u32, hostname: Option<String>) -> Self {
        Batch {
            inner: Some(BatchInner {
                timestamp,
                hostname,
                endpoint_counts: BTreeMap::new(),
                traces: Vec::new(),
            }),
        }
    }

    /// Records the invocation count for an endpoint in this cycle.
    ///
    /// Setting the same endpoint again overwrites the previous count; the
    /// caller owns accumulation. Fails with [`Error::InvalidArgument`] on an
    /// empty endpoint name.
    pub fn set_endpoint_count(&mut self, endpoint: &str, count: u64) -> Result<()> {
        if endpoint.is_empty() {
            return Err(Error::InvalidArgument("endpoint name must not be empty"));
        }
        self.inner_mut()?
            .endpoint_counts
            .insert(endpoint.to_owned(), count);
        Ok(())
    }

    /// Moves a serialized trace buffer into the batch.
    ///
    /// The buffer is opaque cargo: no structural validation happens here, and
    /// insertion order is preserved on the wire.
    pub fn move_in(&mut self, serialized_trace: Vec<u8>) -> Result<()> {
        self.inner_mut()?.traces.push(serialized_trace);
        Ok(())
    }

    /// Encodes the batch and consumes it.
    ///
    /// Every further call on this handle fails with
    /// [`Error::UseAfterSerialize`].
    pub fn serialize(&mut self) -> Result<Vec<u8>> {
        let inner = self
            .inner
            .take()
            .ok_or(Error::UseAfterSerialize { entity: "Batch" })?;
        let message = proto::Batch {
            timestamp: inner.timestamp,
            hostname: inner.hostname,
            endpoint_counts: inner.endpoint_counts,
            traces: inner.traces,
        };
        let buf = codec::encode(&message)?;
        crate::agent_debug!(
            name: "Batch.Serialized",
            traces = message.traces.len() as u64,
            bytes = buf.len() as u64,
        );
        Ok(buf)
    }

    fn inner_mut(&mut self) -> Result<&mut BatchInner> {
        self.inner
            .as_mut()
            .ok_or(Error::UseAfterSerialize { entity: "Batch" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Trace;
    use prost::Message;

    fn serialized_trace(uuid: &str, name: &str) -> Vec<u8> {
        let mut trace = Trace::new(1000, uuid).unwrap();
        trace.set_name(name).unwrap();
        trace.serialize().unwrap()
    }

    #[test]
    fn endpoint_counts_overwrite_by_key() {
        let mut batch = Batch::new(1700000000, None);
        batch.set_endpoint_count("users#index", 5).unwrap();
        batch.set_endpoint_count("users#index", 9).unwrap();

        let buf = batch.serialize().unwrap();
        let decoded = proto::Batch::decode(buf.as_slice()).unwrap();
        assert_eq!(decoded.endpoint_counts.get("users#index"), Some(&9));
    }

    #[test]
    fn empty_endpoint_name_is_rejected() {
        let mut batch = Batch::new(1700000000, None);
        assert!(matches!(
            batch.set_endpoint_count("", 1),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn moved_in_traces_keep_insertion_order() {
        let first = serialized_trace("uuid-1", "users#index");
        let second = serialized_trace("uuid-2", "users#show");

        let mut batch = Batch::new(1700000000, Some("web-1".to_owned()));
        batch.move_in(first.clone()).unwrap();
        batch.move_in(second.clone()).unwrap();

        let buf = batch.serialize().unwrap();
        let decoded = proto::Batch::decode(buf.as_slice()).unwrap();

        assert_eq!(decoded.timestamp, 1700000000);
        assert_eq!(decoded.hostname.as_deref(), Some("web-1"));
        assert_eq!(decoded.traces.len(), 2);
        assert_eq!(decoded.traces[0], first);
        assert_eq!(decoded.traces[1], second);
    }

    #[test]
    fn carried_traces_are_recoverable_by_name_without_full_decode() {
        let mut batch = Batch::new(1700000000, None);
        batch.move_in(serialized_trace("uuid-1", "checkout")).unwrap();
        let buf = batch.serialize().unwrap();

        let decoded = proto::Batch::decode(buf.as_slice()).unwrap();
        assert_eq!(
            Trace::name_from_serialized(&decoded.traces[0])
                .unwrap()
                .as_deref(),
            Some("checkout")
        );
    }

    #[test]
    fn every_operation_fails_after_serialize() {
        let mut batch = Batch::new(1700000000, None);
        batch.serialize().unwrap();

        assert!(matches!(
            batch.set_endpoint_count("users#index", 1),
            Err(Error::UseAfterSerialize { entity: "Batch" })
        ));
        assert!(matches!(
            batch.move_in(vec![1, 2, 3]),
            Err(Error::UseAfterSerialize { entity: "Batch" })
        ));
        assert!(matches!(
            batch.serialize(),
            Err(Error::UseAfterSerialize { entity: "Batch" })
        ));
    }
}
