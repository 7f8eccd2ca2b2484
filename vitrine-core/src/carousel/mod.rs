//! Carousel
//!
//! A paged window over an ordered item collection, advanced by the previous
//! and next controls, by its indicator row, or by a recurring auto-advance
//! timer that pauses while the pointer is over the carousel. The module
//! separates the pure paging state, the host seam, the timer, and the
//! registry/driver pair that routes page events to the right instance.

pub mod autoplay;
pub mod controller;
pub mod driver;
pub mod host;
pub mod messages;
pub mod registry;
pub mod state;
pub mod types;

pub use autoplay::AutoAdvance;
pub use controller::Carousel;
pub use driver::CarouselDriver;
pub use host::CarouselHost;
pub use messages::CarouselMessage;
pub use registry::CarouselRegistry;
pub use state::CarouselState;
pub use types::*;
