//! Messages a page forwards to its carousels

use super::types::CarouselKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselMessage {
    // Navigation
    NextPage(CarouselKey),
    PrevPage(CarouselKey),
    GoToPage(CarouselKey, isize),
    IndicatorPressed(CarouselKey, usize),

    // Auto-advance suspension
    PointerEntered(CarouselKey),
    PointerLeft(CarouselKey),

    /// Emitted by the auto-advance timer. The generation identifies the
    /// timer run that produced it so ticks queued before a pause are dropped.
    AutoAdvance(CarouselKey, u64),

    // Viewport reporting (applies to every carousel)
    ViewportResized(u32),
}

impl CarouselMessage {
    /// Carousel this message is addressed to, if it targets one.
    pub fn key(&self) -> Option<CarouselKey> {
        match self {
            CarouselMessage::NextPage(key)
            | CarouselMessage::PrevPage(key)
            | CarouselMessage::GoToPage(key, _)
            | CarouselMessage::IndicatorPressed(key, _)
            | CarouselMessage::PointerEntered(key)
            | CarouselMessage::PointerLeft(key)
            | CarouselMessage::AutoAdvance(key, _) => Some(*key),
            CarouselMessage::ViewportResized(_) => None,
        }
    }
}
