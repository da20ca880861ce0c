//! Banner Core Library
//!
//! This library provides the typewriter text rotation shown in the portfolio
//! banner, together with its configuration and reveal animation classes.

pub mod config;
pub mod error;
pub mod phrases;
pub mod reveal;
pub mod rotator;
#[cfg(feature = "runtime")]
pub mod scheduler;
pub mod timing;

pub use config::{BannerConfig, RotatorConfig};
pub use error::{BannerError, Result};
pub use phrases::PhraseList;
pub use reveal::{Reveal, VisibilitySignal};
pub use rotator::{Frame, Phase, RotationState, TextRotator};
#[cfg(feature = "runtime")]
pub use scheduler::{spawn_rotation, RotationReceiver, RotationStream};
pub use timing::DurationRange;

/// High-level helper: validate `config` and start rotating it on the current runtime
#[cfg(feature = "runtime")]
pub fn start_rotation(config: RotatorConfig) -> Result<RotationReceiver> {
    let rotator = TextRotator::new(config)?;
    Ok(spawn_rotation(rotator))
}
