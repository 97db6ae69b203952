//! Motion primitives shared by the page effects.
//!
//! Everything here is pure or driven by explicit elapsed-time deltas, so the
//! whole layer can be tested by feeding it synthetic durations. Wall-clock
//! sampling stays with the render-loop owner.
//!
//! - `easing` - easing curves mapping [0, 1] to [0, 1]
//! - `timing` - progress and interpolation helpers
//! - `debounce` - trailing-edge debouncer and the fixed-step frame clock
//! - `counter` - the animated stat counter
//! - `glide` - smoothed pointer follower and magnetic-button offset

pub mod counter;
pub mod debounce;
pub mod easing;
pub mod glide;
pub mod timing;

pub use counter::CountUp;
pub use debounce::{Debouncer, FrameClock};
pub use easing::Easing;
pub use glide::{magnetic_offset, PointerGlide};
