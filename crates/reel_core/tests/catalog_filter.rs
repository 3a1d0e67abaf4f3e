use chrono::NaiveDate;
use reel_core::{
    filter_catalog, seed_catalog, Category, CategoryFilter, CoreError, HighlightRecord, Quality,
};

fn record(id: &str, title: &str, tags: &[&str], category: Category) -> HighlightRecord {
    HighlightRecord {
        id: id.to_string(),
        title: title.to_string(),
        duration_label: "0:45".to_string(),
        created_at: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
        view_count: 100,
        like_count: 10,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        category,
        quality: Quality::Hd,
    }
}

fn two_records() -> Vec<HighlightRecord> {
    vec![
        record(
            "1",
            "Epic Sean Elimination",
            &["kill", "sean", "epic"],
            Category::Kill,
        ),
        record(
            "2",
            "Pentakill Highlight",
            &["pentakill", "teamfight"],
            Category::TeamFight,
        ),
    ]
}

fn ids(records: &[&HighlightRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

#[test]
fn query_matches_title_or_tag() {
    let records = two_records();
    assert_eq!(
        ids(&filter_catalog(&records, "sean", CategoryFilter::All)),
        vec!["1"]
    );
    assert_eq!(
        ids(&filter_catalog(&records, "", CategoryFilter::Only(Category::TeamFight))),
        vec!["2"]
    );
}

#[test]
fn unfiltered_view_is_identity() {
    let records = seed_catalog();
    let visible: Vec<HighlightRecord> = filter_catalog(&records, "", CategoryFilter::All)
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(visible, records);
}

#[test]
fn matching_ignores_case() {
    let records = seed_catalog();
    assert_eq!(
        filter_catalog(&records, "SEAN", CategoryFilter::All),
        filter_catalog(&records, "sean", CategoryFilter::All)
    );
    assert_eq!(
        ids(&filter_catalog(&records, "sEaN", CategoryFilter::All)),
        vec!["1", "4"]
    );
}

#[test]
fn results_are_an_ordered_subset() {
    let records = seed_catalog();
    for query in ["", "kill", "team", "o", "zzz"] {
        for filter in [
            CategoryFilter::All,
            CategoryFilter::Only(Category::Kill),
            CategoryFilter::Only(Category::TeamFight),
            CategoryFilter::Only(Category::Epic),
        ] {
            let visible = filter_catalog(&records, query, filter);
            let mut cursor = records.iter();
            for hit in &visible {
                assert!(cursor.any(|r| r == *hit), "{query:?}/{filter}: out of order");
                assert!(filter.admits(hit.category));
            }
            // Re-filtering a result never changes it.
            let again: Vec<HighlightRecord> = visible.iter().map(|r| (*r).clone()).collect();
            assert_eq!(filter_catalog(&again, query, filter), visible);
        }
    }
}

#[test]
fn query_and_category_combine() {
    let records = seed_catalog();
    assert_eq!(
        ids(&filter_catalog(&records, "kill", CategoryFilter::Only(Category::TeamFight))),
        vec!["2"]
    );
    assert!(filter_catalog(&records, "sean", CategoryFilter::Only(Category::Epic)).is_empty());
}

#[test]
fn empty_catalog_and_no_match_both_yield_nothing() {
    assert!(filter_catalog(&[], "sean", CategoryFilter::All).is_empty());
    assert!(filter_catalog(&[], "", CategoryFilter::All).is_empty());
    assert!(filter_catalog(&seed_catalog(), "baron", CategoryFilter::All).is_empty());
}

#[test]
fn filter_names_parse_at_the_boundary() {
    assert_eq!("ALL".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
    assert_eq!(
        "TeamFight".parse::<CategoryFilter>(),
        Ok(CategoryFilter::Only(Category::TeamFight))
    );
    assert_eq!(
        "assist".parse::<CategoryFilter>(),
        Err(CoreError::UnknownFilter("assist".to_string()))
    );
    assert_eq!(
        "8K".parse::<Quality>(),
        Err(CoreError::UnknownQuality("8K".to_string()))
    );
}
