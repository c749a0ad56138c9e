use serde::Serialize;
use std::cmp::Reverse;

use crate::models::Fragrance;

/// Number of individual notes shown per position before the rest are grouped
const TOP_NOTES: usize = 5;
const REST_LABEL: &str = "Rest";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NoteShare {
    pub note: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SeasonTotals {
    pub winter: u32,
    pub spring: u32,
    pub summer: u32,
    pub fall: u32,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct OccasionTotals {
    pub day: u32,
    pub night: u32,
}

/// Analytics over the user's collection
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CollectionStatistics {
    pub total: usize,
    pub top_notes: Vec<NoteShare>,
    pub heart_notes: Vec<NoteShare>,
    pub base_notes: Vec<NoteShare>,
    pub seasonality: SeasonTotals,
    pub occasion: OccasionTotals,
}

/// Counts notes, keeps the most frequent few and folds the remainder into a
/// "Rest" share. Equal counts keep first-seen order.
fn note_distribution<'a>(notes: impl Iterator<Item = &'a String>) -> Vec<NoteShare> {
    let mut counts: Vec<NoteShare> = Vec::new();
    for note in notes {
        match counts.iter_mut().find(|share| &share.note == note) {
            Some(share) => share.count += 1,
            None => counts.push(NoteShare {
                note: note.clone(),
                count: 1,
            }),
        }
    }

    counts.sort_by_key(|share| Reverse(share.count));

    let rest: usize = counts.iter().skip(TOP_NOTES).map(|share| share.count).sum();
    counts.truncate(TOP_NOTES);
    if rest > 0 {
        counts.push(NoteShare {
            note: REST_LABEL.to_string(),
            count: rest,
        });
    }
    counts
}

pub fn collection_statistics(inventory: &[Fragrance]) -> CollectionStatistics {
    let mut seasonality = SeasonTotals::default();
    let mut occasion = OccasionTotals::default();

    for fragrance in inventory {
        seasonality.winter += u32::from(fragrance.seasonality.winter);
        seasonality.spring += u32::from(fragrance.seasonality.spring);
        seasonality.summer += u32::from(fragrance.seasonality.summer);
        seasonality.fall += u32::from(fragrance.seasonality.fall);
        occasion.day += u32::from(fragrance.occasion.day);
        occasion.night += u32::from(fragrance.occasion.night);
    }

    CollectionStatistics {
        total: inventory.len(),
        top_notes: note_distribution(inventory.iter().flat_map(|f| &f.top_notes)),
        heart_notes: note_distribution(inventory.iter().flat_map(|f| &f.heart_notes)),
        base_notes: note_distribution(inventory.iter().flat_map(|f| &f.base_notes)),
        seasonality,
        occasion,
    }
}
