//! Structured fault reports sent to the collector.
//!
//! Independent of trace recording: when the agent itself hits trouble (a
//! failed normalizer, an unexpected payload shape) it files an [`ErrorReport`]
//! so the collector can group and count agent-side faults. Symmetric
//! construct-or-load, inspect, serialize lifecycle.

use crate::codec;
use crate::error::{Error, Result};
use crate::proto;

#[derive(Debug)]
struct ReportInner {
    group: String,
    description: String,
    details: Option<String>,
}

/// Structured fault report value object.
#[derive(Debug)]
pub struct ErrorReport {
    inner: Option<ReportInner>,
}

impl ErrorReport {
    /// Creates a report from a grouping key and a description, both required
    /// non-empty.
    pub fn new(group: impl Into<String>, description: impl Into<String>) -> Result<Self> {
        let group = group.into();
        let description = description.into();
        if group.is_empty() {
            return Err(Error::InvalidArgument("error group must not be empty"));
        }
        if description.is_empty() {
            return Err(Error::InvalidArgument("error description must not be empty"));
        }
        Ok(ErrorReport {
            inner: Some(ReportInner {
                group,
                description,
                details: None,
            }),
        })
    }

    /// Reconstructs a report from its serialized form.
    ///
    /// Fails with [`Error::Decoding`] on malformed input, and with
    /// [`Error::InvalidArgument`] if the payload decodes but is missing a
    /// required field.
    pub fn load(buf: &[u8]) -> Result<Self> {
        let message: proto::ErrorReport = codec::decode(buf)?;
        let mut report = ErrorReport::new(message.group, message.description)?;
        if let Some(details) = message.details {
            report.set_details(details)?;
        }
        Ok(report)
    }

    /// Returns the grouping key.
    pub fn group(&self) -> Result<&str> {
        Ok(&self.inner()?.group)
    }

    /// Returns the description.
    pub fn description(&self) -> Result<&str> {
        Ok(&self.inner()?.description)
    }

    /// Returns the free-form details, if any have been attached.
    pub fn details(&self) -> Result<Option<&str>> {
        Ok(self.inner()?.details.as_deref())
    }

    /// Attaches free-form details. Overwrites any previous value.
    pub fn set_details(&mut self, details: impl Into<String>) -> Result<()> {
        self.inner_mut()?.details = Some(details.into());
        Ok(())
    }

    /// Encodes the report and consumes it.
    pub fn serialize(&mut self) -> Result<Vec<u8>> {
        let inner = self.inner.take().ok_or(Error::UseAfterSerialize {
            entity: "ErrorReport",
        })?;
        codec::encode(&proto::ErrorReport {
            group: inner.group,
            description: inner.description,
            details: inner.details,
        })
    }

    fn inner(&self) -> Result<&ReportInner> {
        self.inner.as_ref().ok_or(Error::UseAfterSerialize {
            entity: "ErrorReport",
        })
    }

    fn inner_mut(&mut self) -> Result<&mut ReportInner> {
        self.inner.as_mut().ok_or(Error::UseAfterSerialize {
            entity: "ErrorReport",
        })
    }
}
