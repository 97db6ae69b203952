//! Interactive page components, modeled as plain state machines.
//!
//! Each one is driven by the main loop: input events mutate it, `advance`
//! feeds it elapsed time, and the widgets read it back at draw time. None of
//! them know about each other or about the terminal.

pub mod accordion;
pub mod carousel;
pub mod page;
pub mod reveal;

pub use accordion::Accordion;
pub use carousel::Carousel;
pub use page::{is_condensed, scroll_progress, SectionLayout};
pub use reveal::{visible_fraction, Reveal, COUNTER_VISIBLE_FRACTION, REVEAL_VISIBLE_FRACTION};
