//! Recurring auto-advance timer owned by a single carousel

use std::time::Duration;

use tokio::{
    runtime::Handle,
    sync::mpsc::UnboundedSender,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};

use vitrine_config::ConfigGuardRailError;

use super::{messages::CarouselMessage, types::CarouselKey};
use crate::error::{Result, VitrineError};

/// Periodic `AutoAdvance` tick source.
///
/// Every start schedules the first tick one full period later; there is no
/// resume-from-remaining-time. Stopping aborts the task, and dropping the
/// timer stops it.
#[derive(Debug)]
pub struct AutoAdvance {
    key: CarouselKey,
    period: Duration,
    sender: UnboundedSender<CarouselMessage>,
    task: Option<JoinHandle<()>>,
    generation: u64,
}

impl AutoAdvance {
    pub fn new(
        key: CarouselKey,
        period: Duration,
        sender: UnboundedSender<CarouselMessage>,
    ) -> Self {
        Self {
            key,
            period,
            sender,
            task: None,
            generation: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Generation of the current run. Ticks carrying any other value are stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True when `generation` belongs to the run in progress.
    pub fn accepts(&self, generation: u64) -> bool {
        self.is_running() && generation == self.generation
    }

    /// (Re)start with a fresh full period. Must be called inside a Tokio
    /// runtime, with a non-zero period.
    pub fn start(&mut self) -> Result<()> {
        if self.period.is_zero() {
            return Err(ConfigGuardRailError::ZeroAutoAdvance {
                carousel: self.key.name(),
            }
            .into());
        }
        let runtime =
            Handle::try_current().map_err(|_| VitrineError::NoRuntime)?;
        self.stop();

        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        let key = self.key;
        let period = self.period;
        let sender = self.sender.clone();
        let first_tick = Instant::now() + period;

        self.task = Some(runtime.spawn(async move {
            let mut ticker = time::interval_at(first_tick, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                tracing::trace!(
                    "{key} carousel auto-advance tick (run {generation})"
                );
                if sender
                    .send(CarouselMessage::AutoAdvance(key, generation))
                    .is_err()
                {
                    break;
                }
            }
        }));

        tracing::debug!(
            "{} carousel auto-advance started every {}ms",
            self.key,
            self.period.as_millis()
        );
        Ok(())
    }

    /// Cancel the pending tick and the recurring schedule.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("{} carousel auto-advance paused", self.key);
        }
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
