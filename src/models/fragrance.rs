use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Lowest and highest suitability score a fragrance can carry for a season or occasion
pub const MIN_SUITABILITY: u8 = 1;
pub const MAX_SUITABILITY: u8 = 5;

/// Neutral suitability used when the catalog has no ranking for a season or occasion
pub const DEFAULT_SUITABILITY: u8 = 3;

/// A catalog-normalized fragrance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Fragrance {
    /// Stable identifier derived from the catalog record (see [`fragrance_id`])
    pub id: String,
    pub name: String,
    pub brand: String,
    /// Price in catalog currency units
    pub price: f64,
    pub size: String,
    pub description: String,
    pub image_url: String,
    pub gender: Gender,
    pub scent_family: ScentFamily,
    pub seasonality: Seasonality,
    pub occasion: OccasionScores,
    pub top_notes: Vec<String>,
    pub heart_notes: Vec<String>,
    pub base_notes: Vec<String>,
    /// Ordered by intensity, the first accord is the dominant one
    pub main_accords: Vec<String>,
}

/// Derives the catalog identifier for a fragrance name
pub fn fragrance_id(name: &str) -> String {
    format!("api_{}", name.replace(' ', "_").to_lowercase())
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Unisex,
}

impl Gender {
    /// Normalizes a free-form catalog gender label
    ///
    /// "women" is checked first since it contains "men".
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("women") {
            Gender::Female
        } else if label.contains("men") {
            Gender::Male
        } else {
            Gender::Unisex
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Unisex => "Unisex",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ScentFamily {
    Floral,
    Woody,
    Fresh,
    Citrus,
    Oriental,
    Gourmand,
    Green,
    Leather,
}

impl ScentFamily {
    /// Infers the scent family from the dominant accord, falling back to Fresh
    pub fn from_accord(accord: &str) -> Self {
        let accord = accord.to_lowercase();
        if accord.contains("floral") {
            ScentFamily::Floral
        } else if accord.contains("wood") {
            ScentFamily::Woody
        } else if accord.contains("citrus") {
            ScentFamily::Citrus
        } else if accord.contains("oriental") || accord.contains("spicy") {
            ScentFamily::Oriental
        } else if accord.contains("sweet") || accord.contains("gourmand") {
            ScentFamily::Gourmand
        } else if accord.contains("green") || accord.contains("herbal") {
            ScentFamily::Green
        } else if accord.contains("leather") {
            ScentFamily::Leather
        } else {
            ScentFamily::Fresh
        }
    }
}

impl Display for ScentFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ScentFamily::Floral => "Floral",
            ScentFamily::Woody => "Woody",
            ScentFamily::Fresh => "Fresh",
            ScentFamily::Citrus => "Citrus",
            ScentFamily::Oriental => "Oriental",
            ScentFamily::Gourmand => "Gourmand",
            ScentFamily::Green => "Green",
            ScentFamily::Leather => "Leather",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

/// Per-season suitability, each score in [1, 5]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Seasonality {
    pub winter: u8,
    pub spring: u8,
    pub summer: u8,
    pub fall: u8,
}

impl Default for Seasonality {
    fn default() -> Self {
        Self {
            winter: DEFAULT_SUITABILITY,
            spring: DEFAULT_SUITABILITY,
            summer: DEFAULT_SUITABILITY,
            fall: DEFAULT_SUITABILITY,
        }
    }
}

impl Seasonality {
    pub fn get(&self, season: Season) -> u8 {
        match season {
            Season::Winter => self.winter,
            Season::Spring => self.spring,
            Season::Summer => self.summer,
            Season::Fall => self.fall,
        }
    }

    /// Sets a season score, clamping it into the suitability range
    pub fn set(&mut self, season: Season, score: f64) {
        let score = clamp_suitability(score);
        match season {
            Season::Winter => self.winter = score,
            Season::Spring => self.spring = score,
            Season::Summer => self.summer = score,
            Season::Fall => self.fall = score,
        }
    }
}

/// Day and night suitability, each score in [1, 5]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct OccasionScores {
    pub day: u8,
    pub night: u8,
}

impl Default for OccasionScores {
    fn default() -> Self {
        Self {
            day: DEFAULT_SUITABILITY,
            night: DEFAULT_SUITABILITY,
        }
    }
}

/// Rounds an upstream score half-to-even and clamps it into [1, 5]
///
/// Out-of-range and non-finite inputs are never rejected.
pub fn clamp_suitability(score: f64) -> u8 {
    if !score.is_finite() {
        return DEFAULT_SUITABILITY;
    }
    score
        .round_ties_even()
        .clamp(MIN_SUITABILITY as f64, MAX_SUITABILITY as f64) as u8
}
