use super::*;

fn tags(list: &[StyleTag]) -> BTreeSet<StyleTag> {
    list.iter().copied().collect()
}

#[test]
fn metrics_are_zero_before_any_ingestion() {
    let agg = StyleAggregator::new();
    let metrics = agg.metrics();
    assert_eq!(metrics.aggressive, 0.0);
    assert_eq!(metrics.positional, 0.0);
    assert_eq!(metrics.tactical, 0.0);
    assert_eq!(metrics.defensive, 0.0);
    assert_eq!(agg.dominant_style(), None);
}

#[test]
fn metrics_normalize_to_one() {
    let mut agg = StyleAggregator::new();
    agg.ingest(&tags(&[StyleTag::Aggressive, StyleTag::Tactical]));
    agg.ingest(&tags(&[StyleTag::Positional]));
    agg.ingest(&tags(&[StyleTag::Positional, StyleTag::Defensive]));
    let metrics = agg.metrics();
    assert!((metrics.total() - 1.0).abs() < 1e-9);
    assert!((metrics.positional - 0.4).abs() < 1e-9);
}

#[test]
fn multi_tag_moves_bump_each_counter() {
    let mut agg = StyleAggregator::new();
    agg.ingest(&tags(&[StyleTag::Aggressive, StyleTag::Tactical]));
    assert_eq!(agg.tag_count(StyleTag::Aggressive), 1);
    assert_eq!(agg.tag_count(StyleTag::Tactical), 1);
    assert_eq!(agg.total(), 2);
}

#[test]
fn empty_tag_sets_change_nothing() {
    let mut agg = StyleAggregator::new();
    agg.ingest(&BTreeSet::new());
    assert_eq!(agg.total(), 0);
    assert_eq!(agg.dominant_style(), None);
}

#[test]
fn dominant_style_is_the_argmax() {
    let mut agg = StyleAggregator::new();
    agg.ingest(&tags(&[StyleTag::Defensive]));
    agg.ingest(&tags(&[StyleTag::Defensive]));
    agg.ingest(&tags(&[StyleTag::Aggressive]));
    assert_eq!(agg.dominant_style(), Some(StyleTag::Defensive));
}

#[test]
fn ties_resolve_tactical_first() {
    let mut agg = StyleAggregator::new();
    agg.ingest(&tags(&[StyleTag::Aggressive]));
    agg.ingest(&tags(&[StyleTag::Tactical]));
    assert_eq!(agg.dominant_style(), Some(StyleTag::Tactical));
}

#[test]
fn four_way_tie_still_resolves_tactical() {
    let mut agg = StyleAggregator::new();
    agg.ingest(&tags(&StyleTag::ALL));
    assert_eq!(agg.dominant_style(), Some(StyleTag::Tactical));
}

#[test]
fn every_style_gets_a_recommendation_when_nothing_played() {
    let recs = recommendations(&StyleMetrics::default());
    assert_eq!(recs.len(), 4);
    // One entry per style, in priority order, never duplicated.
    assert_eq!(recs[0], recommendation_for(StyleTag::Tactical));
    assert_eq!(recs[1], recommendation_for(StyleTag::Aggressive));
    assert_eq!(recs[2], recommendation_for(StyleTag::Positional));
    assert_eq!(recs[3], recommendation_for(StyleTag::Defensive));
    let unique: BTreeSet<&String> = recs.iter().collect();
    assert_eq!(unique.len(), 4);
}

#[test]
fn well_represented_styles_are_not_recommended() {
    let mut agg = StyleAggregator::new();
    for _ in 0..8 {
        agg.ingest(&tags(&[StyleTag::Aggressive]));
    }
    agg.ingest(&tags(&[StyleTag::Positional]));
    agg.ingest(&tags(&[StyleTag::Tactical]));
    let recs = recommendations(&agg.metrics());
    // Aggressive sits at 0.8; the other three are each 0.1.
    assert_eq!(recs.len(), 3);
    assert!(!recs.contains(&recommendation_for(StyleTag::Aggressive).to_string()));
}

#[test]
fn reset_clears_the_counters() {
    let mut agg = StyleAggregator::new();
    agg.ingest(&tags(&[StyleTag::Tactical]));
    agg.reset();
    assert_eq!(agg.total(), 0);
    assert_eq!(agg.dominant_style(), None);
}
