//! Encode/decode boundary between the in-memory entities and the wire.
//!
//! Every entity funnels its terminal `serialize` call through here, and the
//! `load` constructors come back the same way. Encoding is deterministic and
//! lossless for every field in [`crate::proto`]; decoding fails with
//! [`crate::Error::Decoding`] on malformed or truncated input. The one
//! asymmetric operation is [`peek_name`], which reads a serialized trace's
//! name without paying for a full decode.

use bytes::BytesMut;
use prost::Message;

use crate::error::Result;
use crate::proto;

/// Encodes any wire message into a fresh buffer.
pub(crate) fn encode<M: Message>(message: &M) -> Result<Vec<u8>> {
    let mut buf = BytesMut::with_capacity(message.encoded_len());
    message.encode(&mut buf)?;
    Ok(buf.to_vec())
}

/// Decodes a wire message, failing on malformed or truncated input.
pub(crate) fn decode<M: Message + Default>(buf: &[u8]) -> Result<M> {
    Ok(M::decode(buf)?)
}

/// Recovers the name of a serialized [`proto::Trace`] without decoding its
/// span sequence.
///
/// Batch aggregation groups and logs by trace name; for a large batch, fully
/// decoding every trace just to read one field would dominate the cost of
/// batching. Decoding into the single-field [`proto::TraceName`] view skips
/// everything else on the wire.
pub(crate) fn peek_name(buf: &[u8]) -> Result<Option<String>> {
    let partial: proto::TraceName = decode(buf)?;
    Ok(partial.name)
}
