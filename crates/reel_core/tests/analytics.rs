use reel_core::{seed_catalog, summarize, top_by_views, Category, CategoryShare};

#[test]
fn summary_totals_the_seed_catalog() {
    let stats = summarize(&seed_catalog());
    assert_eq!(stats.highlights, 6);
    assert_eq!(stats.total_views, 1250 + 2840 + 890 + 1560 + 3200 + 1890);
    assert_eq!(stats.total_likes, 89 + 156 + 67 + 98 + 245 + 134);
    assert_eq!(
        stats.categories,
        vec![
            CategoryShare {
                category: Category::Kill,
                count: 2,
                percent: 33
            },
            CategoryShare {
                category: Category::TeamFight,
                count: 2,
                percent: 33
            },
            CategoryShare {
                category: Category::Epic,
                count: 2,
                percent: 33
            },
        ]
    );
}

#[test]
fn summary_of_nothing_is_zero() {
    let stats = summarize(&[]);
    assert_eq!(stats.total_views, 0);
    assert!(stats.categories.iter().all(|share| share.percent == 0));
}

#[test]
fn top_by_views_ranks_descending() {
    let catalog = seed_catalog();
    let titles: Vec<_> = top_by_views(&catalog, 3)
        .into_iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Team Wipe Comeback",
            "Pentakill Highlight",
            "Solo Queue Domination"
        ]
    );
    assert_eq!(top_by_views(&catalog, 50).len(), 6);
}
