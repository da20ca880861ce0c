//! Scroll-triggered reveal animations.
//!
//! Whether an element is on screen comes from the rendering layer through
//! [`VisibilitySignal`]; this module only maps it to animate.css class names.

use serde::{Deserialize, Serialize};

/// Anything that can tell whether the tracked element is currently visible
pub trait VisibilitySignal {
    fn is_visible(&self) -> bool;
}

impl VisibilitySignal for bool {
    fn is_visible(&self) -> bool {
        *self
    }
}

/// Animation played when an element scrolls into view
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Reveal {
    FadeIn,
    ZoomIn,
}

impl Reveal {
    /// Class list for the element, empty while it is off screen
    pub const fn class_name(self, visible: bool) -> &'static str {
        if !visible {
            return "";
        }
        match self {
            Reveal::FadeIn => "animate__animated animate__fadeIn",
            Reveal::ZoomIn => "animate__animated animate__zoomIn",
        }
    }

    pub fn class_for<V: VisibilitySignal + ?Sized>(self, signal: &V) -> &'static str {
        self.class_name(signal.is_visible())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    #[rstest]
    #[case(Reveal::FadeIn, true, "animate__animated animate__fadeIn")]
    #[case(Reveal::ZoomIn, true, "animate__animated animate__zoomIn")]
    #[case(Reveal::FadeIn, false, "")]
    #[case(Reveal::ZoomIn, false, "")]
    fn test_class_name(#[case] reveal: Reveal, #[case] visible: bool, #[case] expected: &str) {
        assert_eq!(reveal.class_name(visible), expected);
    }

    struct Always;

    impl VisibilitySignal for Always {
        fn is_visible(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_class_for_injected_signal() {
        for reveal in Reveal::iter() {
            assert!(!reveal.class_for(&Always).is_empty());
            assert!(reveal.class_for(&false).is_empty());
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Reveal::ZoomIn.to_string(), "zoom-in");
        assert_eq!("fade-in".parse::<Reveal>().unwrap(), Reveal::FadeIn);
    }
}
