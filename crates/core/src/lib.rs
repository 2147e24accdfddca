//! Core state for the learn page widgets.
//!
//! Target-independent domain logic behind the three page behaviours:
//!
//! - `progress` / `store` / `session`: checklist record, tracker arithmetic,
//!   storage seam and the persisting tracker
//! - `clipboard` / `status`: clipboard capability chain and the status line
//! - `slideshow`: wrap-around carousel index
//! - `config`: page configuration with defaults
//!
//! The `learn-ui` crate binds all of this to the DOM.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod progress;
pub mod result;
pub mod session;
pub mod slideshow;
pub mod status;
pub mod store;

pub use clipboard::{Clipboard, CopyChain, CopyOutcome, copy_source_text};
pub use config::LearnConfig;
pub use error::Error;
pub use progress::{GuideItem, ProgressRecord, ProgressSummary, ProgressTracker};
pub use result::{OptionExt, Result, ResultExt};
pub use session::ProgressSession;
pub use slideshow::Carousel;
pub use status::{StatusLine, StatusTicket};
pub use store::{MemoryStore, ProgressStore, load_record, save_record};
