//! Typewriter state machine that types and deletes phrases one character per tick

use crate::config::RotatorConfig;
use crate::error::Result;
use crate::timing::millis;
use rand::Rng;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, trace};

/// Direction the display text is moving in
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    /// Text grows toward the full phrase
    Typing,
    /// Text shrinks toward empty
    Deleting,
}

/// Mutable state advanced by [`TextRotator::tick`].
///
/// `text` is always a prefix of the active phrase, measured in `char`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationState {
    loop_num: usize,
    is_deleting: bool,
    text: String,
    delay: Duration,
}

impl RotationState {
    fn mounted(delay: Duration) -> Self {
        Self {
            loop_num: 0,
            is_deleting: false,
            text: String::new(),
            delay,
        }
    }

    /// Loop counter; the active phrase is `phrases[loop_num % len]`
    pub fn loop_num(&self) -> usize {
        self.loop_num
    }

    pub fn is_deleting(&self) -> bool {
        self.is_deleting
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Delay before the next tick
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn phase(&self) -> Phase {
        if self.is_deleting {
            Phase::Deleting
        } else {
            Phase::Typing
        }
    }
}

/// Snapshot of the rotator after a tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// Text to render
    pub text: String,
    /// Phase the next tick will run in
    pub phase: Phase,
    /// How long to wait before the next tick
    #[serde(rename = "delay_ms", with = "millis")]
    pub delay: Duration,
    pub loop_num: usize,
}

/// Lazy, infinite and restartable sequence of typewriter frames
#[derive(Debug, Clone)]
pub struct TextRotator {
    config: RotatorConfig,
    state: RotationState,
}

impl TextRotator {
    /// Create a rotator, drawing the initial typing delay from the thread RNG
    pub fn new(config: RotatorConfig) -> Result<Self> {
        Self::with_rng(config, &mut rand::thread_rng())
    }

    /// Create a rotator, drawing the initial typing delay from `rng`
    pub fn with_rng<R: Rng + ?Sized>(config: RotatorConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let delay = config.typing_delay.sample(rng);
        debug!(
            "Text rotator mounted with {} phrases, initial delay {:?}",
            config.phrases.len(),
            delay
        );
        Ok(Self {
            state: RotationState::mounted(delay),
            config,
        })
    }

    pub fn config(&self) -> &RotatorConfig {
        &self.config
    }

    pub fn state(&self) -> &RotationState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn text(&self) -> &str {
        &self.state.text
    }

    /// Delay to wait before calling [`tick`](Self::tick) again
    pub fn delay(&self) -> Duration {
        self.state.delay
    }

    /// Phrase currently being typed or deleted
    pub fn active_phrase(&self) -> &str {
        self.config.phrases.get(self.state.loop_num)
    }

    /// Frame describing the current state without advancing it
    pub fn frame(&self) -> Frame {
        Frame {
            text: self.state.text.clone(),
            phase: self.state.phase(),
            delay: self.state.delay,
            loop_num: self.state.loop_num,
        }
    }

    /// Advance by one character and return the resulting frame
    pub fn tick(&mut self) -> Frame {
        let phrase = self.config.phrases.get(self.state.loop_num);
        let len = self.state.text.chars().count();
        let target = if self.state.is_deleting {
            len.saturating_sub(1)
        } else {
            len + 1
        };
        let updated = char_prefix(phrase, target);

        if !self.state.is_deleting && updated == phrase {
            self.state.is_deleting = true;
            self.state.delay = self.config.period;
            debug!("Phrase {:?} fully typed, pausing {:?}", phrase, self.state.delay);
        } else if self.state.is_deleting && updated.is_empty() {
            self.state.is_deleting = false;
            self.state.loop_num = self.state.loop_num.wrapping_add(1);
            self.state.delay = self.config.reset_delay;
            debug!(
                "Phrase {:?} erased, next is {:?}",
                phrase,
                self.config.phrases.get(self.state.loop_num)
            );
        } else if self.state.is_deleting {
            self.state.delay /= 2;
        }

        self.state.text.clear();
        self.state.text.push_str(updated);
        trace!("tick: {:?} ({:?})", self.state.text, self.state.delay);

        self.frame()
    }

    /// Return to the mount-time state with a freshly drawn typing delay
    pub fn reset(&mut self) {
        self.reset_with_rng(&mut rand::thread_rng());
    }

    pub fn reset_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.state = RotationState::mounted(self.config.typing_delay.sample(rng));
    }
}

impl Iterator for TextRotator {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        Some(self.tick())
    }
}

/// First `count` characters of `text`, or all of it when shorter
fn char_prefix(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::phrases::PhraseList;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn rotator(phrases: &[&str]) -> TextRotator {
        let config = RotatorConfig::new()
            .with_phrases(PhraseList::new(phrases.iter().copied()).unwrap())
            .with_fixed_typing_delay(Duration::from_millis(300));
        TextRotator::new(config).unwrap()
    }

    #[rstest]
    #[case("héllo", 2, "hé")]
    #[case("héllo", 0, "")]
    #[case("héllo", 9, "héllo")]
    #[case("UI/UX", 5, "UI/UX")]
    fn test_char_prefix(#[case] text: &str, #[case] count: usize, #[case] expected: &str) {
        assert_eq!(char_prefix(text, count), expected);
    }

    #[test]
    fn test_mounted_state() {
        let rotator = rotator(&["Go"]);

        assert_eq!(rotator.text(), "");
        assert_eq!(rotator.phase(), Phase::Typing);
        assert_eq!(rotator.state().loop_num(), 0);
        assert_eq!(rotator.delay(), Duration::from_millis(300));
    }

    #[test]
    fn test_typing_grows_by_one() {
        let mut rotator = rotator(&["Web Developer"]);

        while !rotator.state().is_deleting() {
            let before = rotator.text().chars().count();
            let frame = rotator.tick();
            assert_eq!(frame.text.chars().count(), before + 1);
            assert!("Web Developer".starts_with(&frame.text));
        }
    }

    #[test]
    fn test_typing_delay_unchanged_mid_phrase() {
        let mut rotator = rotator(&["abc"]);

        assert_eq!(rotator.tick().delay, Duration::from_millis(300));
        assert_eq!(rotator.tick().delay, Duration::from_millis(300));
    }

    #[test]
    fn test_full_phrase_switches_to_deleting() {
        let mut rotator = rotator(&["abc"]);
        rotator.tick();
        rotator.tick();

        let frame = rotator.tick();
        assert_eq!(frame.text, "abc");
        assert_eq!(frame.phase, Phase::Deleting);
        assert_eq!(frame.delay, Duration::from_millis(2000));

        // Never extends past the phrase
        let frame = rotator.tick();
        assert_eq!(frame.text, "ab");
    }

    #[test]
    fn test_deleting_shrinks_and_halves_delay() {
        let mut rotator = rotator(&["abcd"]);
        for _ in 0..4 {
            rotator.tick();
        }

        let expected = [
            ("abc", 1000),
            ("ab", 500),
            ("a", 250),
        ];
        for (text, delay) in expected {
            let frame = rotator.tick();
            assert_eq!(frame.text, text);
            assert_eq!(frame.delay, Duration::from_millis(delay));
            assert_eq!(frame.phase, Phase::Deleting);
        }

        let frame = rotator.tick();
        assert_eq!(frame.text, "");
        assert_eq!(frame.phase, Phase::Typing);
        assert_eq!(frame.delay, Duration::from_millis(500));
        assert_eq!(frame.loop_num, 1);
    }

    #[test]
    fn test_empty_text_selects_next_phrase() {
        let mut rotator = rotator(&["ab", "xy"]);
        let texts: Vec<String> = rotator.by_ref().take(6).map(|f| f.text).collect();

        assert_eq!(texts, ["a", "ab", "a", "", "x", "xy"]);
        assert_eq!(rotator.active_phrase(), "xy");
    }

    #[test]
    fn test_unicode_phrase() {
        let mut rotator = rotator(&["日本"]);
        let texts: Vec<String> = rotator.by_ref().take(4).map(|f| f.text).collect();

        assert_eq!(texts, ["日", "日本", "日", ""]);
    }

    #[test]
    fn test_reset_restarts_sequence() {
        let mut rotator = rotator(&["Go", "Rust"]);
        let first: Vec<Frame> = rotator.by_ref().take(9).collect();

        rotator.reset();
        assert_eq!(rotator.text(), "");
        assert_eq!(rotator.state().loop_num(), 0);

        let second: Vec<Frame> = rotator.by_ref().take(9).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Typing.to_string(), "typing");
        assert_eq!("deleting".parse::<Phase>().unwrap(), Phase::Deleting);
    }
}
