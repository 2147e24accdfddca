//! Progress tracker bound to its store.
//!
//! Every state change runs the same step: recompute the summary and rewrite
//! the whole record. Storage failures are logged and otherwise ignored.

use crate::progress::{ProgressSummary, ProgressTracker};
use crate::result::ResultExt;
use crate::store::{ProgressStore, load_record, save_record};

/// A [`ProgressTracker`] that persists itself after every change.
pub struct ProgressSession<S: ProgressStore> {
    tracker: ProgressTracker,
    store: S,
    key: String,
}

impl<S: ProgressStore> ProgressSession<S> {
    /// Track `ids`, restoring their state from `store` under `key`.
    ///
    /// The restored state is written back straight away, so stale or unknown
    /// keys are dropped on load.
    pub fn load<I, T>(store: S, key: impl Into<String>, ids: I) -> (Self, ProgressSummary)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let key = key.into();
        let mut tracker = ProgressTracker::new(ids);
        tracker.apply(&load_record(&store, &key));

        let session = Self {
            tracker,
            store,
            key,
        };
        let summary = session.commit();
        (session, summary)
    }

    #[must_use]
    pub const fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Record a change of the input at `position` and persist.
    pub fn set_checked(&mut self, position: usize, checked: bool) -> ProgressSummary {
        if !self.tracker.set_checked(position, checked) {
            tracing::debug!(position, "Change event for untracked input");
        }
        self.commit()
    }

    /// Uncheck everything and persist.
    pub fn reset(&mut self) -> ProgressSummary {
        self.tracker.reset();
        self.commit()
    }

    /// Persist the current record and return the summary to render.
    pub fn commit(&self) -> ProgressSummary {
        let summary = self.tracker.summary();
        save_record(&self.store, &self.key, &self.tracker.record()).or_default_logged(());
        tracing::debug!(
            done = summary.done,
            total = summary.total,
            "Progress updated"
        );
        summary
    }
}
