//! Transient copy status line.
//!
//! Each message takes a ticket. The deferred clear carries the ticket it was
//! scheduled with and only empties the line if no newer message has been
//! shown since.

use crate::clipboard::CopyOutcome;
use crate::config::LearnConfig;

/// Ticket identifying one shown status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StatusTicket(u64);

/// Current text of the status element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    text: String,
    latest: u64,
}

impl StatusLine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Show the message for `outcome` and return the ticket for its clear.
    pub fn show(&mut self, outcome: CopyOutcome, config: &LearnConfig) -> StatusTicket {
        let message = if outcome.is_success() {
            &config.copied_message
        } else {
            &config.failed_message
        };
        self.show_text(message.clone())
    }

    pub fn show_text(&mut self, text: impl Into<String>) -> StatusTicket {
        self.latest = self.latest.wrapping_add(1);
        self.text = text.into();
        StatusTicket(self.latest)
    }

    /// Clear the line if `ticket` belongs to the latest message.
    ///
    /// Returns `true` when the text was cleared.
    pub fn clear(&mut self, ticket: StatusTicket) -> bool {
        if ticket.0 != self.latest {
            return false;
        }
        self.text.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_clear() {
        let config = LearnConfig::default();
        let mut line = StatusLine::new();

        let ticket = line.show(CopyOutcome::Copied, &config);
        assert_eq!(line.text(), "Copied.");

        assert!(line.clear(ticket));
        assert_eq!(line.text(), "");
    }

    #[test]
    fn test_failure_message() {
        let config = LearnConfig::default();
        let mut line = StatusLine::new();
        line.show(CopyOutcome::Failed, &config);
        assert_eq!(line.text(), "Copy failed.");
    }

    #[test]
    fn test_stale_clear_is_ignored() {
        let config = LearnConfig::default();
        let mut line = StatusLine::new();

        let first = line.show(CopyOutcome::Failed, &config);
        let second = line.show(CopyOutcome::Copied, &config);

        assert!(!line.clear(first));
        assert_eq!(line.text(), "Copied.");
        assert!(line.clear(second));
        assert_eq!(line.text(), "");
    }
}
