//! Property: any committed in-range move leaves stored orders equal to
//! positions; an out-of-range move changes nothing.

use super::fixtures::*;
use ed_02_ordering::{CategoryFilter, StatusFilter};
use proptest::prelude::*;
use serde_json::json;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_committed_move_persists_positions(
        orders in prop::collection::vec(proptest::option::of(0i64..50), 1..12),
        from in 0usize..12,
        to in 0usize..16,
    ) {
        let seeded: Vec<_> = orders
            .iter()
            .enumerate()
            .map(|(i, order)| match order {
                Some(order) => json!({"id": format!("p{i}"), "order": order}),
                None => json!({"id": format!("p{i}")}),
            })
            .collect();
        let h = Harness::new(seeded, writer());
        let from = from % orders.len();

        runtime().block_on(async {
            let before = h
                .console
                .begin_reorder(CategoryFilter::All, StatusFilter::All)
                .await
                .unwrap();
            let after = h.console.move_item(from, Some(to)).unwrap();
            if to >= orders.len() {
                prop_assert_eq!(&after, &before);
                h.console.cancel_reorder();
                return Ok(());
            }
            h.console.commit_reorder().await.unwrap();

            for (position, id) in after.ids().enumerate() {
                prop_assert_eq!(h.stored_order(id.as_str()), Some(position as i64));
            }
            Ok::<(), TestCaseError>(())
        })?;
    }
}
