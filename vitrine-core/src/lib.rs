//! Client-side behaviors of the Vitrine showcase site.
//!
//! The crate is host-agnostic: a page binding implements [`CarouselHost`]
//! for its real elements and forwards its events as messages, while every
//! decision (paging, filtering, validation, header state) lives here and can
//! be exercised without a rendering environment.

pub mod carousel;
pub mod error;
pub mod form;
pub mod navigation;
pub mod search;
pub mod site;
pub mod telemetry;

pub use carousel::{
    Carousel, CarouselDriver, CarouselHost, CarouselKey, CarouselMessage,
    CarouselRegistry, CarouselState, ElementRole, IndicatorState, TrackOffset,
};
pub use error::{Result, VitrineError};
pub use site::Site;

pub use vitrine_config as config;
