use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::time::Duration;

/// Inclusive range of durations, e.g. the window the initial typing delay is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationRange(pub Duration, pub Duration);

impl DurationRange {
    pub const fn new(min: Duration, max: Duration) -> Self {
        Self(min, max)
    }

    /// A range that always yields `value`.
    pub const fn fixed(value: Duration) -> Self {
        Self(value, value)
    }

    pub const fn from_millis(min: u64, max: u64) -> Self {
        Self(Duration::from_millis(min), Duration::from_millis(max))
    }

    pub const fn min(&self) -> Duration {
        self.0
    }

    pub const fn max(&self) -> Duration {
        self.1
    }

    pub fn contains(&self, duration: Duration) -> bool {
        duration >= self.0 && duration <= self.1
    }

    pub const fn len(&self) -> Duration {
        self.1.abs_diff(self.0)
    }

    pub fn is_inverted(&self) -> bool {
        self.0 > self.1
    }

    /// Draw a duration uniformly from the range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.0 >= self.1 {
            return self.0;
        }
        rng.gen_range(self.0..=self.1)
    }
}

impl Serialize for DurationRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.0.as_millis() as u64, self.1.as_millis() as u64].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DurationRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [min, max] = <[u64; 2]>::deserialize(deserializer)?;
        Ok(Self::from_millis(min, max))
    }
}

/// (De)serialize a [`Duration`] as whole milliseconds.
pub mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
