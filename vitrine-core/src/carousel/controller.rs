//! Carousel: paging state bound to a host page and its auto-advance timer

use tokio::sync::mpsc::UnboundedSender;
use vitrine_config::{
    Breakpoints, CarouselSettings, validation::validate_carousel,
};

use super::{
    autoplay::AutoAdvance,
    host::CarouselHost,
    messages::CarouselMessage,
    state::CarouselState,
    types::{CarouselKey, ElementRole},
};
use crate::error::{Result, VitrineError};

/// One mounted carousel instance.
///
/// Owns its paging state, its host binding and its timer; nothing is shared
/// with other instances. Dropping the carousel cancels the timer.
#[derive(Debug)]
pub struct Carousel<H: CarouselHost> {
    key: CarouselKey,
    host: H,
    state: CarouselState,
    breakpoints: Breakpoints,
    autoplay: Option<AutoAdvance>,
    hovered: bool,
}

impl<H: CarouselHost> Carousel<H> {
    /// Bind the host elements, size the window from the current viewport,
    /// build the indicator row, render page zero and start auto-advance.
    ///
    /// Fails without touching the page when the settings break a guard
    /// rail or a required element is missing.
    pub fn mount(
        key: CarouselKey,
        settings: &CarouselSettings,
        mut host: H,
        sender: UnboundedSender<CarouselMessage>,
    ) -> Result<Self> {
        validate_carousel(key.name(), settings)?;

        let ids = &settings.elements;
        for role in ElementRole::ALL {
            let id = match role {
                ElementRole::Region => &ids.region,
                ElementRole::Track => &ids.track,
                ElementRole::PrevControl => &ids.prev,
                ElementRole::NextControl => &ids.next,
                ElementRole::Indicators => &ids.indicators,
            };
            if !host.bind(role, id) {
                return Err(VitrineError::MissingElement {
                    carousel: key,
                    role,
                    id: id.clone(),
                });
            }
        }

        let item_count = host.count_items(&settings.item_selector);
        let width = host.viewport_width();
        let breakpoints = settings.breakpoints.clone();
        let state =
            CarouselState::new(item_count, breakpoints.items_per_page(width));

        let autoplay = settings.autoplay.then(|| {
            AutoAdvance::new(key, settings.auto_advance_period(), sender)
        });

        let mut carousel = Self {
            key,
            host,
            state,
            breakpoints,
            autoplay,
            hovered: false,
        };

        carousel.rebuild_indicators();
        carousel.render();
        if let Some(timer) = carousel.autoplay.as_mut() {
            timer.start()?;
        }

        tracing::debug!(
            "{} carousel mounted: {} items, {} per page at {}px",
            key,
            item_count,
            carousel.state.items_per_page(),
            width
        );
        Ok(carousel)
    }

    pub fn key(&self) -> CarouselKey {
        self.key
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.autoplay.as_ref().is_some_and(AutoAdvance::is_running)
    }

    pub fn next_page(&mut self) {
        self.state.next_page();
        self.render();
    }

    pub fn prev_page(&mut self) {
        self.state.prev_page();
        self.render();
    }

    pub fn go_to_page(&mut self, index: isize) {
        self.state.go_to_page(index);
        self.render();
    }

    /// Recompute the page size for `viewport_width`. The current page is
    /// clamped right away; indicators are rebuilt when the page count moved.
    pub fn resize(&mut self, viewport_width: u32) {
        let items_per_page = self.breakpoints.items_per_page(viewport_width);
        if self.state.set_items_per_page(items_per_page) {
            self.rebuild_indicators();
        }
        self.render();
    }

    /// Pointer entered the carousel region: cancel the pending tick.
    pub fn pointer_entered(&mut self) {
        self.hovered = true;
        if let Some(timer) = self.autoplay.as_mut() {
            timer.stop();
        }
    }

    /// Pointer left the region: restart auto-advance with a full period.
    pub fn pointer_left(&mut self) -> Result<()> {
        self.hovered = false;
        match self.autoplay.as_mut() {
            Some(timer) => timer.start(),
            None => Ok(()),
        }
    }

    /// Handle a timer tick. Ticks from a cancelled run, or that arrive while
    /// hovered, are ignored. Returns true when the carousel advanced.
    pub fn auto_advance(&mut self, generation: u64) -> bool {
        let accepted = !self.hovered
            && self
                .autoplay
                .as_ref()
                .is_some_and(|timer| timer.accepts(generation));
        if accepted {
            self.next_page();
        } else {
            tracing::trace!(
                "{} carousel dropped stale tick {}",
                self.key,
                generation
            );
        }
        accepted
    }

    /// Apply a message addressed to this carousel. Resize messages are
    /// handled here too so a single carousel can be driven on its own.
    pub fn update(&mut self, message: CarouselMessage) -> Result<()> {
        match message {
            CarouselMessage::NextPage(_) => self.next_page(),
            CarouselMessage::PrevPage(_) => self.prev_page(),
            CarouselMessage::GoToPage(_, index) => self.go_to_page(index),
            CarouselMessage::IndicatorPressed(_, index) => {
                self.go_to_page(isize::try_from(index).unwrap_or(isize::MAX))
            }
            CarouselMessage::PointerEntered(_) => self.pointer_entered(),
            CarouselMessage::PointerLeft(_) => self.pointer_left()?,
            CarouselMessage::AutoAdvance(_, generation) => {
                self.auto_advance(generation);
            }
            CarouselMessage::ViewportResized(width) => self.resize(width),
        }
        Ok(())
    }

    /// Push the track offset and every indicator state to the host.
    fn render(&mut self) {
        self.host.render_track(self.state.offset());
        for index in 0..self.state.page_count() {
            self.host.set_indicator(index, self.state.indicator(index));
        }
    }

    fn rebuild_indicators(&mut self) {
        self.host.replace_indicators(self.state.page_count());
    }
}
