use serde::Deserialize;
use serde_json::Value;

pub mod filters;
pub mod fragrance;
pub mod interaction;
pub mod questionnaire;

pub use filters::SearchFilters;
pub use fragrance::{
    fragrance_id, Fragrance, Gender, OccasionScores, ScentFamily, Season, Seasonality,
    DEFAULT_SUITABILITY,
};
pub use interaction::{Interaction, InteractionKind};
pub use questionnaire::QuestionnaireProfile;

const DEFAULT_PRICE: f64 = 100.0;
const DEFAULT_IMAGE_URL: &str = "https://via.placeholder.com/300x400/c8b8d8/FFFFFF?text=Perfume";

const DAY_OCCASION_WORDS: &[&str] = &[
    "casual", "daily", "day", "office", "sport", "work", "business",
];
const NIGHT_OCCASION_WORDS: &[&str] = &[
    "evening", "night", "date", "romantic", "party", "formal", "special",
];

// ============================================================================
// Fragella API Types
// ============================================================================

/// Raw fragrance record returned by the Fragella API
///
/// Every field is optional: missing or malformed values are defaulted during
/// normalization instead of failing the record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFragrance {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Brand", default)]
    pub brand: Option<String>,
    /// Usually a string such as "$120.00", occasionally a bare number
    #[serde(rename = "Price", default)]
    pub price: Option<Value>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "OilType", default)]
    pub oil_type: Option<String>,
    #[serde(rename = "Image URL", default)]
    pub image_url: Option<String>,
    #[serde(rename = "Longevity", default)]
    pub longevity: Option<String>,
    #[serde(rename = "Sillage", default)]
    pub sillage: Option<String>,
    #[serde(rename = "Main Accords", default)]
    pub main_accords: Option<Vec<String>>,
    #[serde(rename = "Notes", default)]
    pub notes: Option<RawNotes>,
    #[serde(
        rename = "Season Ranking",
        alias = "SeasonRanking",
        alias = "season_ranking",
        default
    )]
    pub season_ranking: Option<Vec<RawRanking>>,
    #[serde(
        rename = "Occasion Ranking",
        alias = "OccasionRanking",
        alias = "occasion_ranking",
        default
    )]
    pub occasion_ranking: Option<Vec<RawRanking>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawNotes {
    #[serde(rename = "Top", default)]
    pub top: Option<Vec<RawNote>>,
    #[serde(rename = "Middle", default)]
    pub middle: Option<Vec<RawNote>>,
    #[serde(rename = "Base", default)]
    pub base: Option<Vec<RawNote>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawNote {
    #[serde(default)]
    pub name: Option<String>,
}

/// Season or occasion ranking entry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRanking {
    #[serde(alias = "season", alias = "occasion", default)]
    pub name: Option<String>,
    #[serde(alias = "value", default)]
    pub score: Option<Value>,
}

impl RawRanking {
    fn label(&self) -> String {
        self.name.as_deref().unwrap_or_default().to_lowercase()
    }

    fn score(&self) -> f64 {
        self.score
            .as_ref()
            .and_then(number_from_value)
            .unwrap_or(DEFAULT_SUITABILITY as f64)
    }
}

fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn parse_price(price: Option<&Value>) -> f64 {
    match price {
        Some(Value::String(s)) => s
            .replace(['$', '€', ','], "")
            .trim()
            .parse()
            .unwrap_or(DEFAULT_PRICE),
        Some(Value::Number(n)) => n.as_f64().unwrap_or(DEFAULT_PRICE),
        _ => DEFAULT_PRICE,
    }
}

fn note_names(notes: Option<&Vec<RawNote>>) -> Vec<String> {
    notes
        .map(|notes| {
            notes
                .iter()
                .filter_map(|n| n.name.clone())
                .filter(|n| !n.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn or_default_notes(notes: Vec<String>, defaults: &[&str]) -> Vec<String> {
    if notes.is_empty() {
        defaults.iter().map(|n| n.to_string()).collect()
    } else {
        notes
    }
}

fn parse_seasonality(rankings: &[RawRanking]) -> Seasonality {
    let mut seasonality = Seasonality::default();
    for ranking in rankings {
        let label = ranking.label();
        let season = if label.contains("winter") {
            Season::Winter
        } else if label.contains("fall") || label.contains("autumn") {
            Season::Fall
        } else if label.contains("spring") {
            Season::Spring
        } else if label.contains("summer") {
            Season::Summer
        } else {
            continue;
        };
        seasonality.set(season, ranking.score());
    }
    seasonality
}

fn parse_occasion(rankings: &[RawRanking]) -> OccasionScores {
    let mut day_scores = Vec::new();
    let mut night_scores = Vec::new();

    for ranking in rankings {
        let label = ranking.label();
        if DAY_OCCASION_WORDS.iter().any(|w| label.contains(w)) {
            day_scores.push(ranking.score());
        } else if NIGHT_OCCASION_WORDS.iter().any(|w| label.contains(w)) {
            night_scores.push(ranking.score());
        }
    }

    let average = |scores: &[f64]| -> Option<u8> {
        if scores.is_empty() {
            None
        } else {
            Some(fragrance::clamp_suitability(
                scores.iter().sum::<f64>() / scores.len() as f64,
            ))
        }
    };

    let defaults = OccasionScores::default();
    OccasionScores {
        day: average(&day_scores).unwrap_or(defaults.day),
        night: average(&night_scores).unwrap_or(defaults.night),
    }
}

fn parse_size(oil_type: Option<&str>, name: &str) -> String {
    let name = name.to_lowercase();
    match oil_type {
        Some(oil_type) if oil_type.to_lowercase().contains("ml") => oil_type.to_string(),
        _ if name.contains("eau de parfum") || name.contains("eau de toilette") => {
            "100ml".to_string()
        }
        _ => "50ml".to_string(),
    }
}

impl From<RawFragrance> for Fragrance {
    fn from(raw: RawFragrance) -> Self {
        let name = raw.name.clone().unwrap_or_else(|| "Unknown".to_string());
        let notes = raw.notes.clone().unwrap_or_default();
        let main_accords = raw.main_accords.clone().unwrap_or_default();

        // Scent family follows the dominant accord
        let scent_family = main_accords
            .first()
            .map(|accord| ScentFamily::from_accord(accord))
            .unwrap_or(ScentFamily::Fresh);

        let description = format!(
            "A {} fragrance with {} projection.",
            raw.longevity.as_deref().unwrap_or("moderate"),
            raw.sillage.as_deref().unwrap_or("moderate"),
        );

        Fragrance {
            // The id is derived from the raw name, matching the catalog's own keying
            id: fragrance_id(raw.name.as_deref().unwrap_or_default()),
            size: parse_size(raw.oil_type.as_deref(), &name),
            brand: raw.brand.unwrap_or_else(|| "Unknown".to_string()),
            price: parse_price(raw.price.as_ref()),
            description,
            image_url: raw
                .image_url
                .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
            gender: Gender::from_label(raw.gender.as_deref().unwrap_or("Unisex")),
            scent_family,
            seasonality: parse_seasonality(raw.season_ranking.as_deref().unwrap_or_default()),
            occasion: parse_occasion(raw.occasion_ranking.as_deref().unwrap_or_default()),
            top_notes: or_default_notes(note_names(notes.top.as_ref()), &["Bergamot", "Lemon"]),
            heart_notes: or_default_notes(note_names(notes.middle.as_ref()), &["Jasmine", "Rose"]),
            base_notes: or_default_notes(note_names(notes.base.as_ref()), &["Musk", "Vanilla"]),
            main_accords: if main_accords.is_empty() {
                vec!["Fresh".to_string(), "Floral".to_string()]
            } else {
                main_accords
            },
            name,
        }
    }
}
