use reel_core::{Category, CategoryFilter, EmptyReason, LibraryState};

#[test]
fn default_library_shows_whole_seed_catalog() {
    let library = LibraryState::default();
    let view = library.view();
    assert_eq!(view.total, 6);
    assert_eq!(view.rows.len(), 6);
    assert_eq!(view.empty, None);
    assert_eq!(view.rows[1].views, "2.8k");
    assert_eq!(view.rows[2].views, "890");
}

#[test]
fn no_matches_is_distinct_from_empty_catalog() {
    let mut library = LibraryState::default();
    library.set_query("baron");
    assert_eq!(library.view().empty, Some(EmptyReason::NoMatches));

    let mut empty = LibraryState::new(Vec::new());
    assert_eq!(empty.view().empty, Some(EmptyReason::EmptyCatalog));
    empty.set_query("sean");
    assert_eq!(empty.view().empty, Some(EmptyReason::EmptyCatalog));
}

#[test]
fn query_and_selector_drive_visible_rows() {
    let mut library = LibraryState::default();
    library.select(CategoryFilter::Only(Category::Epic));
    let titles: Vec<_> = library.view().rows.into_iter().map(|r| r.title).collect();
    assert_eq!(titles, vec!["Lord Steal Victory", "Solo Queue Domination"]);

    library.set_query("SOLO");
    let view = library.view();
    assert_eq!(view.query, "SOLO");
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].id, "6");

    library.select(CategoryFilter::All);
    library.set_query("");
    assert_eq!(library.visible().len(), library.records().len());
}
