//! Sequential message loop for the carousels of one page

use std::future::Future;

use tokio::sync::mpsc::{UnboundedReceiver, error::TryRecvError};

use super::{
    host::CarouselHost, messages::CarouselMessage, registry::CarouselRegistry,
};
use crate::error::{Result, VitrineError};

/// Processes carousel messages one at a time, each to completion, in the
/// order they were posted. Timer ticks and host events share the queue, so
/// no two handlers ever interleave.
#[derive(Debug)]
pub struct CarouselDriver<H: CarouselHost> {
    registry: CarouselRegistry<H>,
    inbox: UnboundedReceiver<CarouselMessage>,
}

impl<H: CarouselHost> CarouselDriver<H> {
    pub fn new(
        registry: CarouselRegistry<H>,
        inbox: UnboundedReceiver<CarouselMessage>,
    ) -> Self {
        Self { registry, inbox }
    }

    pub fn registry(&self) -> &CarouselRegistry<H> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut CarouselRegistry<H> {
        &mut self.registry
    }

    /// Wait for the next message and handle it.
    pub async fn step(&mut self) -> Result<CarouselMessage> {
        let message =
            self.inbox.recv().await.ok_or(VitrineError::ChannelClosed)?;
        self.registry.update(message.clone())?;
        Ok(message)
    }

    /// Handle one message if one is already queued.
    pub fn try_step(&mut self) -> Result<Option<CarouselMessage>> {
        match self.inbox.try_recv() {
            Ok(message) => {
                self.registry.update(message.clone())?;
                Ok(Some(message))
            }
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(VitrineError::ChannelClosed),
        }
    }

    /// Handle every message already queued; returns how many were handled.
    pub fn drain(&mut self) -> Result<usize> {
        let mut handled = 0;
        while self.try_step()?.is_some() {
            handled += 1;
        }
        Ok(handled)
    }

    /// Run until `shutdown` resolves. Pending messages at shutdown are left
    /// in the queue.
    pub async fn run_until<F>(&mut self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    tracing::debug!("carousel driver shutting down");
                    return Ok(());
                }
                step = self.step() => {
                    step?;
                }
            }
        }
    }
}
