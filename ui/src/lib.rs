//! This crate contains all shared UI for the workspace.

mod banner;
pub use banner::Banner;

mod icons;
pub use icons::ArrowRightCircle;

mod reveal;
pub use reveal::RevealOnScroll;

mod rotating_text;
pub use rotating_text::{use_text_rotator, RotatingText};

pub use banner_core::{BannerConfig, RotatorConfig};
