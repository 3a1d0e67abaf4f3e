use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use reel_logging::reel_error;
use serde::{Deserialize, Serialize};

use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Kill,
    TeamFight,
    Epic,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Kill, Category::TeamFight, Category::Epic];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Kill => "kill",
            Category::TeamFight => "teamfight",
            Category::Epic => "epic",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::Kill => "Kill",
            Category::TeamFight => "Team Fight",
            Category::Epic => "Epic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kill" => Ok(Category::Kill),
            "teamfight" => Ok(Category::TeamFight),
            "epic" => Ok(Category::Epic),
            _ => Err(CoreError::UnknownCategory(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "HD")]
    Hd,
    #[serde(rename = "4K")]
    FourK,
}

impl Quality {
    pub fn as_str(self) -> &'static str {
        match self {
            Quality::Hd => "HD",
            Quality::FourK => "4K",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quality {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HD" => Ok(Quality::Hd),
            "4K" => Ok(Quality::FourK),
            _ => Err(CoreError::UnknownQuality(s.to_string())),
        }
    }
}

/// Category selector of the library view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn admits(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>()
            .map(CategoryFilter::Only)
            .map_err(|_| CoreError::UnknownFilter(s.to_string()))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => f.write_str(category.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightRecord {
    pub id: String,
    pub title: String,
    pub duration_label: String,
    pub created_at: NaiveDate,
    pub view_count: u64,
    pub like_count: u64,
    /// Free-form tags; order is kept for display, matching treats them as a set.
    pub tags: Vec<String>,
    pub category: Category,
    pub quality: Quality,
}

impl HighlightRecord {
    /// `needle` must already be lowercased.
    fn matches_query(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

/// Untyped catalog row as it arrives from outside; parsed by `TryFrom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawHighlight<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub duration: &'a str,
    pub created_at: &'a str,
    pub views: u64,
    pub likes: u64,
    pub tags: &'a [&'a str],
    pub kind: &'a str,
    pub quality: &'a str,
}

impl TryFrom<RawHighlight<'_>> for HighlightRecord {
    type Error = CoreError;

    fn try_from(raw: RawHighlight<'_>) -> Result<Self, Self::Error> {
        let created_at = NaiveDate::parse_from_str(raw.created_at, "%Y-%m-%d").map_err(|err| {
            CoreError::InvalidDate {
                value: raw.created_at.to_string(),
                reason: err.to_string(),
            }
        })?;
        Ok(Self {
            id: raw.id.to_string(),
            title: raw.title.to_string(),
            duration_label: raw.duration.to_string(),
            created_at,
            view_count: raw.views,
            like_count: raw.likes,
            tags: raw.tags.iter().map(|tag| (*tag).to_string()).collect(),
            category: raw.kind.parse()?,
            quality: raw.quality.parse()?,
        })
    }
}

const SEED: [RawHighlight<'static>; 6] = [
    RawHighlight {
        id: "1",
        title: "Epic Sean Elimination",
        duration: "0:45",
        created_at: "2024-01-20",
        views: 1250,
        likes: 89,
        tags: &["kill", "sean", "epic"],
        kind: "kill",
        quality: "HD",
    },
    RawHighlight {
        id: "2",
        title: "Pentakill Highlight",
        duration: "1:12",
        created_at: "2024-01-19",
        views: 2840,
        likes: 156,
        tags: &["pentakill", "teamfight"],
        kind: "teamfight",
        quality: "4K",
    },
    RawHighlight {
        id: "3",
        title: "Lord Steal Victory",
        duration: "0:38",
        created_at: "2024-01-18",
        views: 890,
        likes: 67,
        tags: &["lord", "steal", "victory"],
        kind: "epic",
        quality: "HD",
    },
    RawHighlight {
        id: "4",
        title: "Sean Triple Kill",
        duration: "0:52",
        created_at: "2024-01-17",
        views: 1560,
        likes: 98,
        tags: &["triple", "sean", "kill"],
        kind: "kill",
        quality: "HD",
    },
    RawHighlight {
        id: "5",
        title: "Team Wipe Comeback",
        duration: "1:05",
        created_at: "2024-01-16",
        views: 3200,
        likes: 245,
        tags: &["comeback", "teamwipe"],
        kind: "teamfight",
        quality: "4K",
    },
    RawHighlight {
        id: "6",
        title: "Solo Queue Domination",
        duration: "0:41",
        created_at: "2024-01-15",
        views: 1890,
        likes: 134,
        tags: &["solo", "domination"],
        kind: "epic",
        quality: "HD",
    },
];

/// The fixed library catalog, newest first.
pub fn seed_catalog() -> Vec<HighlightRecord> {
    SEED.iter()
        .filter_map(|raw| match HighlightRecord::try_from(*raw) {
            Ok(record) => Some(record),
            Err(err) => {
                reel_error!("Dropping seed highlight {}: {}", raw.id, err);
                None
            }
        })
        .collect()
}

/// Visible subset of `records` for a search query and category selector.
///
/// Keeps the original order. Matching is a case-insensitive substring test
/// against the title and each tag; an empty query matches everything.
pub fn filter_catalog<'a>(
    records: &'a [HighlightRecord],
    query: &str,
    filter: CategoryFilter,
) -> Vec<&'a HighlightRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| filter.admits(record.category) && record.matches_query(&needle))
        .collect()
}

/// Compact count: `2840` becomes `2.8k`, values under a thousand stay as-is.
pub fn format_count(value: u64) -> String {
    if value >= 1000 {
        format!("{:.1}k", value as f64 / 1000.0)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_parses_every_row() {
        let catalog = seed_catalog();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog[1].quality, Quality::FourK);
        assert_eq!(
            catalog[0].created_at,
            NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
        );
    }

    #[test]
    fn raw_rows_with_unknown_kind_are_rejected() {
        let raw = RawHighlight {
            kind: "assist",
            ..SEED[0]
        };
        assert_eq!(
            HighlightRecord::try_from(raw),
            Err(CoreError::UnknownCategory("assist".to_string()))
        );
    }

    #[test]
    fn format_count_matches_library_badges() {
        assert_eq!(format_count(890), "890");
        assert_eq!(format_count(1000), "1.0k");
        assert_eq!(format_count(2840), "2.8k");
    }
}
