//! Shared configuration library for Vitrine.
//!
//! This crate centralizes the behavior settings of the showcase site
//! (carousel presets, search debounce, navigation thresholds), how they are
//! loaded from files, inline JSON or the environment, and the guard rails
//! applied before the core crate mounts anything.

pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, ConfigSource};
pub use models::carousel::{
    BreakpointRule, Breakpoints, CarouselSettings, ElementIds,
};
pub use models::{NavigationSettings, SearchSettings, SiteConfig};
pub use validation::ConfigGuardRailError;
