//! Page widgets, one per behaviour

pub mod copy;
pub mod progress;
pub mod slideshow;

pub use copy::CopyWidget;
pub use progress::ProgressWidget;
pub use slideshow::{SlideshowWidget, Step};
