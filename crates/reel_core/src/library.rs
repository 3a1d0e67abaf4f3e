use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    filter_catalog, format_count, seed_catalog, Category, CategoryFilter, HighlightRecord,
    Quality,
};

/// Why the library has nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmptyReason {
    EmptyCatalog,
    NoMatches,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightRowView {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub created_at: NaiveDate,
    pub views: String,
    pub likes: String,
    pub tags: Vec<String>,
    pub category: Category,
    pub quality: Quality,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryViewModel {
    pub query: String,
    pub filter: CategoryFilter,
    pub total: usize,
    pub rows: Vec<HighlightRowView>,
    pub empty: Option<EmptyReason>,
}

/// Search box and category selector over a fixed catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryState {
    records: Vec<HighlightRecord>,
    query: String,
    filter: CategoryFilter,
}

impl Default for LibraryState {
    fn default() -> Self {
        Self::new(seed_catalog())
    }
}

impl LibraryState {
    pub fn new(records: Vec<HighlightRecord>) -> Self {
        Self {
            records,
            query: String::new(),
            filter: CategoryFilter::All,
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn select(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn records(&self) -> &[HighlightRecord] {
        &self.records
    }

    pub fn visible(&self) -> Vec<&HighlightRecord> {
        filter_catalog(&self.records, &self.query, self.filter)
    }

    pub fn view(&self) -> LibraryViewModel {
        let rows: Vec<HighlightRowView> = self
            .visible()
            .into_iter()
            .map(|record| HighlightRowView {
                id: record.id.clone(),
                title: record.title.clone(),
                duration: record.duration_label.clone(),
                created_at: record.created_at,
                views: format_count(record.view_count),
                likes: format_count(record.like_count),
                tags: record.tags.clone(),
                category: record.category,
                quality: record.quality,
            })
            .collect();

        let empty = if self.records.is_empty() {
            Some(EmptyReason::EmptyCatalog)
        } else if rows.is_empty() {
            Some(EmptyReason::NoMatches)
        } else {
            None
        };

        LibraryViewModel {
            query: self.query.clone(),
            filter: self.filter,
            total: self.records.len(),
            rows,
            empty,
        }
    }
}
