//! Registry for managing multiple carousels keyed by CarouselKey

use std::collections::HashMap;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use vitrine_config::CarouselSettings;

use super::{
    controller::Carousel, host::CarouselHost, messages::CarouselMessage,
    types::CarouselKey,
};
use crate::error::{Result, VitrineError};

/// Owns every mounted carousel on a page and the sender their timers and
/// the host's event bindings post into.
#[derive(Debug)]
pub struct CarouselRegistry<H: CarouselHost> {
    carousels: HashMap<CarouselKey, Carousel<H>>,
    sender: UnboundedSender<CarouselMessage>,
}

impl<H: CarouselHost> CarouselRegistry<H> {
    /// Create an empty registry together with the receiving end of its
    /// message channel.
    pub fn new() -> (Self, UnboundedReceiver<CarouselMessage>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (
            Self {
                carousels: HashMap::new(),
                sender,
            },
            receiver,
        )
    }

    /// Sender for host event bindings (clicks, pointer, resize).
    pub fn sender(&self) -> UnboundedSender<CarouselMessage> {
        self.sender.clone()
    }

    pub fn mount(
        &mut self,
        key: CarouselKey,
        settings: &CarouselSettings,
        host: H,
    ) -> Result<&mut Carousel<H>> {
        if self.carousels.contains_key(&key) {
            return Err(VitrineError::AlreadyMounted(key));
        }
        let carousel =
            Carousel::mount(key, settings, host, self.sender.clone())?;
        Ok(self.carousels.entry(key).or_insert(carousel))
    }

    /// Mount, or log and skip the carousel when its page elements are
    /// missing. Returns whether the carousel is now mounted.
    pub fn mount_or_skip(
        &mut self,
        key: CarouselKey,
        settings: &CarouselSettings,
        host: H,
    ) -> Result<bool> {
        match self.mount(key, settings, host) {
            Ok(_) => Ok(true),
            Err(err @ VitrineError::MissingElement { .. }) => {
                tracing::warn!("skipping carousel: {err}");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    pub fn get(&self, key: &CarouselKey) -> Option<&Carousel<H>> {
        self.carousels.get(key)
    }

    pub fn get_mut(&mut self, key: &CarouselKey) -> Option<&mut Carousel<H>> {
        self.carousels.get_mut(key)
    }

    /// Unmount a carousel; its timer is cancelled as it drops.
    pub fn remove(&mut self, key: &CarouselKey) -> Option<Carousel<H>> {
        self.carousels.remove(key)
    }

    pub fn keys(&self) -> Vec<CarouselKey> {
        self.carousels.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.carousels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carousels.is_empty()
    }

    /// Route a message to its carousel. Resizes go to every carousel;
    /// messages for unknown keys are dropped.
    pub fn update(&mut self, message: CarouselMessage) -> Result<()> {
        match message.key() {
            Some(key) => match self.carousels.get_mut(&key) {
                Some(carousel) => carousel.update(message),
                None => {
                    tracing::debug!(
                        "no carousel mounted for {key}, dropping {message:?}"
                    );
                    Ok(())
                }
            },
            None => {
                for carousel in self.carousels.values_mut() {
                    carousel.update(message.clone())?;
                }
                Ok(())
            }
        }
    }
}
