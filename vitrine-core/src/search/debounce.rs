//! Trailing-edge debounce for search input

use std::time::Duration;

use tokio::{
    runtime::Handle, sync::mpsc::UnboundedSender, task::JoinHandle, time,
};

use super::{CatalogKey, SearchMessage};
use crate::error::{Result, VitrineError};

/// Emits `SearchMessage::QueryCommitted` once input has been quiet for the
/// configured delay. Each new input cancels the pending commit, so a burst
/// of keystrokes produces a single commit carrying the last value.
#[derive(Debug)]
pub struct QueryDebouncer {
    key: CatalogKey,
    delay: Duration,
    sender: UnboundedSender<SearchMessage>,
    pending: Option<JoinHandle<()>>,
}

impl QueryDebouncer {
    pub fn new(
        key: CatalogKey,
        delay: Duration,
        sender: UnboundedSender<SearchMessage>,
    ) -> Self {
        Self {
            key,
            delay,
            sender,
            pending: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Record a raw input value and restart the quiet window.
    pub fn input(&mut self, raw: &str) -> Result<()> {
        let runtime =
            Handle::try_current().map_err(|_| VitrineError::NoRuntime)?;
        self.cancel();

        let key = self.key;
        let delay = self.delay;
        let term = raw.to_lowercase();
        let sender = self.sender.clone();
        self.pending = Some(runtime.spawn(async move {
            time::sleep(delay).await;
            // Receiver gone means the page is tearing down.
            let _ = sender.send(SearchMessage::QueryCommitted(key, term));
        }));
        Ok(())
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl Drop for QueryDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    const DELAY: Duration = Duration::from_millis(300);

    #[tokio::test(start_paused = true)]
    async fn burst_commits_only_last_value() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = QueryDebouncer::new(CatalogKey::Blog, DELAY, tx);

        for partial in ["r", "ru", "Rus", "Rust"] {
            debouncer.input(partial).expect("input");
            time::sleep(Duration::from_millis(100)).await;
        }
        assert!(rx.try_recv().is_err());

        time::sleep(DELAY).await;
        assert_eq!(
            rx.try_recv().expect("commit"),
            SearchMessage::QueryCommitted(CatalogKey::Blog, "rust".into())
        );
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_pending_commit() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer =
            QueryDebouncer::new(CatalogKey::Projects, DELAY, tx);
        debouncer.input("cli").expect("input");
        debouncer.cancel();

        time::sleep(DELAY * 2).await;
        assert!(rx.try_recv().is_err());
        assert!(!debouncer.is_pending());
    }
}
