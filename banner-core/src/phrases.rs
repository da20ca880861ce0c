//! The fixed list of phrases the rotator cycles through

use crate::error::{BannerError, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// Phrases shown when no configuration overrides them
pub const DEFAULT_PHRASES: [&str; 3] = ["Web Developer", "Web Designer", "UI/UX Designer"];

/// Ordered, non-empty, read-only list of phrases.
///
/// Every phrase holds at least one character, so a typing tick always
/// has something to reveal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhraseList(Vec<String>);

impl PhraseList {
    /// Build a phrase list, rejecting an empty list or an empty phrase
    pub fn new<I, S>(phrases: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();

        if phrases.is_empty() {
            return Err(BannerError::Configuration(
                "Phrase list must contain at least one phrase".to_string(),
            ));
        }
        if let Some(position) = phrases.iter().position(|p| p.is_empty()) {
            return Err(BannerError::Configuration(format!(
                "Phrase #{} is empty",
                position + 1
            )));
        }

        Ok(Self(phrases))
    }

    /// Phrase selected by a loop counter, wrapping over the list length
    pub fn get(&self, loop_num: usize) -> &str {
        &self.0[loop_num % self.0.len()]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for PhraseList {
    fn default() -> Self {
        Self(DEFAULT_PHRASES.iter().map(|p| p.to_string()).collect())
    }
}

impl<'de> Deserialize<'de> for PhraseList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let phrases = Vec::<String>::deserialize(deserializer)?;
        PhraseList::new(phrases).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, "Web Developer")]
    #[case(1, "Web Designer")]
    #[case(2, "UI/UX Designer")]
    #[case(3, "Web Developer")]
    #[case(7, "Web Designer")]
    fn test_get_wraps(#[case] loop_num: usize, #[case] expected: &str) {
        assert_eq!(PhraseList::default().get(loop_num), expected);
    }

    #[test]
    fn test_rejects_empty_list() {
        let result = PhraseList::new(Vec::<String>::new());
        assert!(matches!(result, Err(BannerError::Configuration(_))));
    }

    #[test]
    fn test_rejects_empty_phrase() {
        let result = PhraseList::new(["Rustacean", ""]);
        assert_eq!(
            result.unwrap_err(),
            BannerError::Configuration("Phrase #2 is empty".to_string())
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: PhraseList = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(ok.len(), 2);

        let err = serde_json::from_str::<PhraseList>("[]").unwrap_err();
        assert!(err.to_string().contains("at least one phrase"));
    }
}
