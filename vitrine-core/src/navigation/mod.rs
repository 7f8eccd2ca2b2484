//! Header, in-page navigation and scroll reveal state

pub mod header;
pub mod menu;
pub mod reveal;
pub mod sections;

pub use header::{HeaderState, HeaderTracker};
pub use menu::MobileMenu;
pub use reveal::{
    Reveal, RevealGroup, RevealTracker, ViewportRect, stagger_delay,
};
pub use sections::{SectionBounds, active_section, scroll_target};
