//! Append-only, index-addressed span storage.
//!
//! A [`SpanTable`] holds every span recorded for one trace. Spans are
//! addressed by the `u32` index handed out at start time rather than by a
//! live reference: instrumentation runs on the hot path of the host
//! application, and a plain index keeps the table append-only and
//! relocation-safe while the caller follows its natural "start now, finish
//! later by remembered handle" pattern.
//!
//! The table imposes no stack discipline. Spans may nest, overlap, or
//! interleave freely in time; logical nesting is the caller's business and is
//! reconstructed from timestamps downstream.

use crate::error::{Error, Result};
use crate::proto;

/// One recorded operation: open until its stop time is filled in.
#[derive(Debug, Clone)]
pub(crate) struct SpanRecord {
    pub(crate) category: String,
    pub(crate) started_at: u64,
    pub(crate) stopped_at: Option<u64>,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
}

/// Append-only collection of [`SpanRecord`]s, addressed by creation index.
#[derive(Debug, Default)]
pub(crate) struct SpanTable {
    spans: Vec<SpanRecord>,
}

impl SpanTable {
    /// Appends a new open span and returns its index.
    ///
    /// Indices are zero-based and monotonically increasing; an index is only
    /// meaningful for the table that issued it.
    pub(crate) fn start(&mut self, time: u64, category: &str) -> Result<u32> {
        if category.is_empty() {
            return Err(Error::InvalidArgument("span category must not be empty"));
        }
        let index = self.spans.len() as u32;
        self.spans.push(SpanRecord {
            category: category.to_owned(),
            started_at: time,
            stopped_at: None,
            title: None,
            description: None,
        });
        Ok(index)
    }

    /// Records the stop time of an open span.
    ///
    /// The open-to-stopped transition happens exactly once: a second stop
    /// fails with [`Error::AlreadyStopped`] and leaves the first recorded
    /// time untouched.
    pub(crate) fn stop(&mut self, index: u32, time: u64) -> Result<()> {
        let span = self.get_mut(index)?;
        if span.stopped_at.is_some() {
            return Err(Error::AlreadyStopped { index });
        }
        span.stopped_at = Some(time);
        Ok(())
    }

    /// Sets a span's title. Last write wins; permitted on stopped spans,
    /// since titles are often only known after timing ends.
    pub(crate) fn set_title(&mut self, index: u32, title: &str) -> Result<()> {
        self.get_mut(index)?.title = Some(title.to_owned());
        Ok(())
    }

    /// Sets a span's description. Same rules as [`SpanTable::set_title`].
    pub(crate) fn set_description(&mut self, index: u32, description: &str) -> Result<()> {
        self.get_mut(index)?.description = Some(description.to_owned());
        Ok(())
    }

    fn get_mut(&mut self, index: u32) -> Result<&mut SpanRecord> {
        self.spans
            .get_mut(index as usize)
            .ok_or(Error::NotFound { index })
    }

    pub(crate) fn into_proto(self) -> Vec<proto::Span> {
        self.spans
            .into_iter()
            .enumerate()
            .map(|(id, span)| proto::Span {
                id: id as u32,
                category: span.category,
                started_at: span.started_at,
                stopped_at: span.stopped_at,
                title: span.title,
                description: span.description,
            })
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn get(&self, index: u32) -> Option<&SpanRecord> {
        self.spans.get(index as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_then_stop_records_ordered_times() {
        let mut table = SpanTable::default();
        let index = table.start(1005, "db.query").unwrap();
        assert_eq!(index, 0);
        table.stop(index, 1050).unwrap();

        let span = table.get(index).unwrap();
        assert_eq!(span.started_at, 1005);
        assert_eq!(span.stopped_at, Some(1050));
        assert!(span.stopped_at.unwrap() >= span.started_at);
    }

    #[test]
    fn indices_are_sequential_per_table() {
        let mut table = SpanTable::default();
        assert_eq!(table.start(1, "a").unwrap(), 0);
        assert_eq!(table.start(2, "b").unwrap(), 1);
        assert_eq!(table.start(3, "c").unwrap(), 2);
    }

    #[test]
    fn empty_category_is_rejected_without_appending() {
        let mut table = SpanTable::default();
        assert!(matches!(
            table.start(1, ""),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(table.start(2, "db.query").unwrap(), 0);
    }

    #[test]
    fn double_stop_fails_and_preserves_first_time() {
        let mut table = SpanTable::default();
        let index = table.start(10, "view.render").unwrap();
        table.stop(index, 20).unwrap();

        assert!(matches!(
            table.stop(index, 99),
            Err(Error::AlreadyStopped { index: 0 })
        ));
        assert_eq!(table.get(index).unwrap().stopped_at, Some(20));
    }

    #[test]
    fn unknown_index_is_not_found() {
        let mut table = SpanTable::default();
        assert!(matches!(table.stop(0, 1), Err(Error::NotFound { index: 0 })));

        table.start(1, "db.query").unwrap();
        assert!(matches!(
            table.set_title(5, "SELECT"),
            Err(Error::NotFound { index: 5 })
        ));
        assert!(matches!(
            table.set_description(5, "..."),
            Err(Error::NotFound { index: 5 })
        ));
    }

    #[test]
    fn title_and_description_overwrite_and_work_after_stop() {
        let mut table = SpanTable::default();
        let index = table.start(10, "db.query").unwrap();
        table.set_title(index, "SELECT").unwrap();
        table.stop(index, 20).unwrap();
        table.set_title(index, "SELECT * FROM users").unwrap();
        table.set_description(index, "first").unwrap();
        table.set_description(index, "second").unwrap();

        let span = table.get(index).unwrap();
        assert_eq!(span.title.as_deref(), Some("SELECT * FROM users"));
        assert_eq!(span.description.as_deref(), Some("second"));
    }

    #[test]
    fn overlapping_spans_are_permitted() {
        let mut table = SpanTable::default();
        let outer = table.start(10, "app.request").unwrap();
        let inner = table.start(15, "db.query").unwrap();
        // Interleaved stop order: outer ends before inner.
        table.stop(outer, 20).unwrap();
        table.stop(inner, 25).unwrap();

        assert_eq!(table.get(outer).unwrap().stopped_at, Some(20));
        assert_eq!(table.get(inner).unwrap().stopped_at, Some(25));
    }
}
