use serde::Serialize;

use crate::{Category, HighlightRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub category: Category,
    pub count: usize,
    /// Rounded share of the catalog, so shares may not add up to exactly 100.
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub highlights: usize,
    pub total_views: u64,
    pub total_likes: u64,
    pub categories: Vec<CategoryShare>,
}

pub fn summarize(records: &[HighlightRecord]) -> CatalogStats {
    let highlights = records.len();
    let categories = Category::ALL
        .iter()
        .map(|&category| {
            let count = records.iter().filter(|r| r.category == category).count();
            let percent = if highlights == 0 {
                0
            } else {
                ((count as f64 * 100.0) / highlights as f64).round() as u8
            };
            CategoryShare {
                category,
                count,
                percent,
            }
        })
        .collect();

    CatalogStats {
        highlights,
        total_views: records.iter().map(|r| r.view_count).sum(),
        total_likes: records.iter().map(|r| r.like_count).sum(),
        categories,
    }
}

/// The `n` most viewed records; ties keep catalog order.
pub fn top_by_views(records: &[HighlightRecord], n: usize) -> Vec<&HighlightRecord> {
    let mut ranked: Vec<&HighlightRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.view_count.cmp(&a.view_count));
    ranked.truncate(n);
    ranked
}
