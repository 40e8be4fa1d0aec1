//! Domain-specific assertion macros for faqs harnesses.
//!
//! These add failure messages that say which card ended up in which state,
//! so a broken reconciliation is readable without a debugger.

/// Assert the ranked anchors of a result list.
///
/// ```rust
/// assert_ranked!(results, [1, 0]);
/// ```
#[macro_export]
macro_rules! assert_ranked {
    ($results:expr, [$($anchor:expr),* $(,)?]) => {{
        let actual: Vec<usize> = $results.iter().map(|hit| hit.record.anchor.0).collect();
        let expected: Vec<usize> = vec![$($anchor),*];
        if actual != expected {
            panic!(
                "assert_ranked! failed:\n  expected anchors: {:?}\n  actual anchors:   {:?}\n  scores: {:?}",
                expected,
                actual,
                $results.iter().map(|hit| hit.score).collect::<Vec<_>>()
            );
        }
    }};
}

/// Assert that no card carries any search-driven state.
#[macro_export]
macro_rules! assert_pristine {
    ($view:expr) => {{
        let view = &$view;
        for card in &view.cards {
            if card.mark.is_some() || card.highlighted {
                panic!(
                    "assert_pristine! failed: card {} still has mark={:?} highlighted={}",
                    card.item.anchor, card.mark, card.highlighted
                );
            }
        }
        if let Some(status) = &view.status {
            panic!("assert_pristine! failed: status still shows {:?}", status);
        }
    }};
}
