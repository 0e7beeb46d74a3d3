use sift_core::config::ObservabilityConfig;
use sift_observability::spans::names;

#[test]
fn second_init_is_a_no_op() {
    let config = ObservabilityConfig {
        log_level: "debug".into(),
        json: true,
    };
    let _first = sift_observability::init(&config);
    assert!(!sift_observability::init(&config));
}

#[test]
fn span_macros_build_named_spans() {
    let span = sift_observability::search_span!("capital of france", "hybrid", 5);
    let _guard = span.enter();
    let strategy = sift_observability::strategy_span!("bm25", 15, false);
    drop(strategy);
    assert_eq!(names::SEARCH, "sift.search");
    assert_eq!(names::GRAPH, "sift.graph");
}
