use serde::{Deserialize, Deserializer, Serialize};

const AXIS_MIN: u8 = 1;
const AXIS_MAX: u8 = 5;
const AXIS_DEFAULT: u8 = 3;

fn default_axis() -> u8 {
    AXIS_DEFAULT
}

fn clamp_axis(value: i64) -> u8 {
    value.clamp(i64::from(AXIS_MIN), i64::from(AXIS_MAX)) as u8
}

/// Accepts any integer answer and clamps it, so `300` or `-1` become 5 and 1
fn deserialize_axis<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    i64::deserialize(deserializer).map(clamp_axis)
}

/// Answers to the five-question preference questionnaire
///
/// Each axis runs from 1 to 5 with 3 as the neutral answer:
/// - intensity: subtle to strong
/// - warmth: fresh/light to warm/intense
/// - sweetness: dry/herbal to sweet/gourmand
/// - occasion: daily/office to evening/date
/// - character: feminine to masculine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionnaireProfile {
    #[serde(default = "default_axis", deserialize_with = "deserialize_axis")]
    pub intensity: u8,
    #[serde(default = "default_axis", deserialize_with = "deserialize_axis")]
    pub warmth: u8,
    #[serde(default = "default_axis", deserialize_with = "deserialize_axis")]
    pub sweetness: u8,
    #[serde(default = "default_axis", deserialize_with = "deserialize_axis")]
    pub occasion: u8,
    #[serde(default = "default_axis", deserialize_with = "deserialize_axis")]
    pub character: u8,
}

impl Default for QuestionnaireProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionnaireProfile {
    /// Creates a profile with every axis at the neutral answer
    pub fn new() -> Self {
        Self {
            intensity: AXIS_DEFAULT,
            warmth: AXIS_DEFAULT,
            sweetness: AXIS_DEFAULT,
            occasion: AXIS_DEFAULT,
            character: AXIS_DEFAULT,
        }
    }

    /// Returns a copy with every axis clamped into [1, 5]
    pub fn clamped(self) -> Self {
        let clamp = |value: u8| value.clamp(AXIS_MIN, AXIS_MAX);
        Self {
            intensity: clamp(self.intensity),
            warmth: clamp(self.warmth),
            sweetness: clamp(self.sweetness),
            occasion: clamp(self.occasion),
            character: clamp(self.character),
        }
    }
}
