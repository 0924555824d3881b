//! Wire schema for the agent's collector protocol.
//!
//! Protobuf message definitions, written out as `prost` derives rather than
//! generated from `.proto` files so the crate builds without a protoc
//! toolchain. The field numbers below are the versioned wire contract; adding
//! a field means taking a fresh tag, never reusing one.

use std::collections::BTreeMap;

/// One timed operation within a trace.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Span {
    /// Position of the span in its trace, assigned sequentially from 0.
    #[prost(uint32, tag = "1")]
    pub id: u32,
    /// Instrumentation category, e.g. `db.query` or `view.render`.
    #[prost(string, tag = "2")]
    pub category: ::prost::alloc::string::String,
    /// Clock ticks when the operation began.
    #[prost(uint64, tag = "3")]
    pub started_at: u64,
    /// Clock ticks when the operation ended; unset while the span is open.
    #[prost(uint64, optional, tag = "4")]
    pub stopped_at: ::core::option::Option<u64>,
    /// Human-readable summary of the operation.
    #[prost(string, optional, tag = "5")]
    pub title: ::core::option::Option<::prost::alloc::string::String>,
    /// Extended detail, e.g. the SQL statement behind a `db.query` span.
    #[prost(string, optional, tag = "6")]
    pub description: ::core::option::Option<::prost::alloc::string::String>,
}

/// One recorded unit of work with its timeline of spans.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Trace {
    /// Opaque identity assigned by the instrumented application.
    #[prost(string, tag = "1")]
    pub uuid: ::prost::alloc::string::String,
    /// Clock ticks when the unit of work began.
    #[prost(uint64, tag = "2")]
    pub started_at: u64,
    /// Endpoint name the recording was attributed to, once known.
    #[prost(string, optional, tag = "3")]
    pub name: ::core::option::Option<::prost::alloc::string::String>,
    /// Spans in creation order; a span's `id` is its position here.
    #[prost(message, repeated, tag = "4")]
    pub spans: ::prost::alloc::vec::Vec<Span>,
}

/// Partial view of a serialized [`Trace`], declaring only the name field.
///
/// Protobuf decoders skip unknown fields, so decoding a full trace buffer into
/// this message reads the name without materializing the span sequence. Tag 3
/// must stay in lockstep with [`Trace::name`].
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TraceName {
    /// Endpoint name the recording was attributed to, if any.
    #[prost(string, optional, tag = "3")]
    pub name: ::core::option::Option<::prost::alloc::string::String>,
}

/// One transmission cycle's worth of finished traces and counters.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Batch {
    /// Wall-clock seconds when the batch was assembled.
    #[prost(uint32, tag = "1")]
    pub timestamp: u32,
    /// Identity of the reporting host.
    #[prost(string, optional, tag = "2")]
    pub hostname: ::core::option::Option<::prost::alloc::string::String>,
    /// Invocation count per endpoint name for this cycle. A `BTreeMap` so the
    /// encoded order, and therefore the whole batch encoding, is deterministic.
    #[prost(btree_map = "string, uint64", tag = "3")]
    pub endpoint_counts: BTreeMap<::prost::alloc::string::String, u64>,
    /// Pre-serialized [`Trace`] buffers in insertion order, carried verbatim.
    #[prost(bytes = "vec", repeated, tag = "4")]
    pub traces: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
}

/// Structured fault report sent to the collector.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ErrorReport {
    /// Coarse classification used for grouping on the collector side.
    #[prost(string, tag = "1")]
    pub group: ::prost::alloc::string::String,
    /// Human-readable description of the fault.
    #[prost(string, tag = "2")]
    pub description: ::prost::alloc::string::String,
    /// Free-form supplementary detail, e.g. a backtrace.
    #[prost(string, optional, tag = "3")]
    pub details: ::core::option::Option<::prost::alloc::string::String>,
}

/// Handshake payload exchanged with the collector at connection start.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Hello {
    /// Agent version string.
    #[prost(string, tag = "1")]
    pub version: ::prost::alloc::string::String,
    /// Feature flag/selector word.
    #[prost(int32, tag = "2")]
    pub config: i32,
    /// Ordered capability tokens advertised by the agent.
    #[prost(string, repeated, tag = "3")]
    pub cmd: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
