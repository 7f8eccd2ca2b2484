use thiserror::Error;
use vitrine_config::ConfigGuardRailError;

use crate::carousel::{CarouselKey, ElementRole};

#[derive(Error, Debug)]
pub enum VitrineError {
    #[error("{carousel} carousel: required element `{id}` ({role}) is missing")]
    MissingElement {
        carousel: CarouselKey,
        role: ElementRole,
        id: String,
    },

    #[error("{0} carousel is already mounted")]
    AlreadyMounted(CarouselKey),

    #[error("timers need a running Tokio runtime")]
    NoRuntime,

    #[error("message channel closed")]
    ChannelClosed,

    #[error("Invalid configuration: {0}")]
    GuardRail(#[from] ConfigGuardRailError),

    #[error(transparent)]
    Config(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, VitrineError>;
