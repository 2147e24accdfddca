//! Checklist progress: the persisted record and the tracker arithmetic.
//!
//! The tracker owns the checked state of every tracked input, in document
//! order. The DOM shell mirrors that state onto `<input data-guide>` elements;
//! nothing in here touches the page.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::Error;
use crate::result::Result;

/// Persisted mapping from guide item id to completion flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressRecord {
    entries: BTreeMap<String, bool>,
}

impl ProgressRecord {
    /// Empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Completion flag for `id`, `false` when absent.
    #[must_use]
    pub fn is_done(&self, id: &str) -> bool {
        self.entries.get(id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, id: impl Into<String>, done: bool) {
        self.entries.insert(id.into(), done);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(id, done)| (id.as_str(), *done))
    }

    /// Strictly decode a stored record.
    ///
    /// Values are coerced with JavaScript truthiness so records written by
    /// older pages (`1`, `"yes"`) still load.
    ///
    /// # Errors
    ///
    /// Returns [`Error::JsonParseFailed`] if `raw` is not JSON or not a JSON
    /// object.
    pub fn from_json(raw: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| Error::json_parse_failed(e.to_string()))?;

        match value {
            Value::Object(map) => Ok(Self {
                entries: map
                    .into_iter()
                    .map(|(id, flag)| {
                        let done = is_truthy(&flag);
                        (id, done)
                    })
                    .collect(),
            }),
            other => Err(Error::json_parse_failed(format!(
                "expected an object, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Decode a stored record, treating anything unreadable as empty.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            None => Self::new(),
            Some(text) => Self::from_json(text).unwrap_or_else(|e| {
                tracing::warn!("Ignoring stored progress record: {}", e);
                Self::new()
            }),
        }
    }

    /// Serialize as a JSON object of booleans.
    ///
    /// # Errors
    ///
    /// Returns [`Error::JsonParseFailed`] if serialization fails, which a map
    /// of string keys to booleans does not do in practice.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.entries).map_err(|e| Error::json_parse_failed(e.to_string()))
    }
}

impl FromIterator<(String, bool)> for ProgressRecord {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Derived counters shown in the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub done: usize,
    pub total: usize,
    pub percent: u32,
}

impl ProgressSummary {
    /// Compute the summary for `done` of `total` items.
    ///
    /// `percent` is `round(done / total * 100)` with halves rounding up, and
    /// 0 when there are no items.
    #[must_use]
    pub fn new(done: usize, total: usize) -> Self {
        Self {
            done,
            total,
            percent: percent_of(done, total),
        }
    }

    /// Value for the fill element's `width` style.
    #[must_use]
    pub fn fill_width(&self) -> String {
        format!("{}%", self.percent)
    }

    /// Value for the counter text element.
    #[must_use]
    pub fn counter_text(&self) -> String {
        format!("{}/{} complete", self.done, self.total)
    }
}

fn percent_of(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // floor((200 * done + total) / (2 * total)) == round-half-up(100 * done / total)
    let done = done.min(total) as u128;
    let total = total as u128;
    let numerator = done.saturating_mul(200).saturating_add(total);
    let denominator = total.saturating_mul(2);
    u32::try_from(numerator.checked_div(denominator).unwrap_or(0)).unwrap_or(100)
}

/// One tracked checklist input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideItem {
    pub id: String,
    pub checked: bool,
}

/// Checked state for every tracked input, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressTracker {
    items: Vec<GuideItem>,
}

impl ProgressTracker {
    /// Track the given item ids, all unchecked.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: ids
                .into_iter()
                .map(|id| GuideItem {
                    id: id.into(),
                    checked: false,
                })
                .collect(),
        }
    }

    /// Set every item's checked state from `record`, unchecked when absent.
    pub fn apply(&mut self, record: &ProgressRecord) {
        for item in &mut self.items {
            item.checked = record.is_done(&item.id);
        }
    }

    #[must_use]
    pub fn items(&self) -> &[GuideItem] {
        &self.items
    }

    /// Update the input at `position` (document order).
    ///
    /// Returns `false` when there is no such input.
    pub fn set_checked(&mut self, position: usize, checked: bool) -> bool {
        match self.items.get_mut(position) {
            Some(item) => {
                item.checked = checked;
                true
            }
            None => false,
        }
    }

    /// Uncheck every item.
    pub fn reset(&mut self) {
        for item in &mut self.items {
            item.checked = false;
        }
    }

    #[must_use]
    pub fn summary(&self) -> ProgressSummary {
        let done = self.items.iter().filter(|item| item.checked).count();
        ProgressSummary::new(done, self.items.len())
    }

    /// The record to persist: exactly the current state of every item.
    #[must_use]
    pub fn record(&self) -> ProgressRecord {
        self.items
            .iter()
            .map(|item| (item.id.clone(), item.checked))
            .collect()
    }
}
