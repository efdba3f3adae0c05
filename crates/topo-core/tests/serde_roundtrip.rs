use topo_core::errors::{ErrorInfo, TopoError};
use topo_core::{DegreeBounds, VertexId};

#[test]
fn errors_round_trip_json() {
    let err = TopoError::SwapBudgetExhausted(
        ErrorInfo::new("swap-budget-exhausted", "attempt cap reached")
            .with_context("accepted", 4)
            .with_context("requested", 10)
            .with_hint("raise attempts_per_swap"),
    );

    let json = serde_json::to_string_pretty(&err).expect("serialize");
    assert!(json.contains("\"kind\": \"SwapBudgetExhausted\""));
    let decoded: TopoError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}

#[test]
fn degree_bounds_and_ids_round_trip_json() {
    let mut bounds = DegreeBounds::unknown();
    for degree in [3, 1, 4] {
        bounds.observe(degree);
    }
    let json = serde_json::to_string(&(bounds, VertexId::from_index(12))).expect("serialize");
    let decoded: (DegreeBounds, VertexId) = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded.0.min_degree, Some(1));
    assert_eq!(decoded.0.max_degree, Some(4));
    assert_eq!(decoded.1.index(), 12);
}
