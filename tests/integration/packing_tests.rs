//! # Packing Integration Tests
//!
//! Known packing scenarios plus property checks over random shipments.

use super::common::test_helpers::{authors, books};
use book_packer::core::{pack, rank, Book, Container, GreedyPacker, PackingError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn totals(containers: &[Container<Book>]) -> Vec<f64> {
    containers.iter().map(|c| c.total_weight).collect()
}

#[test]
fn test_heaviest_book_gets_its_own_box() {
    let shipment = books(&[("Foo", 10.0), ("Bar", 1.0), ("Baz", 5.0)]);

    let boxes = GreedyPacker::default().pack(&shipment).unwrap();

    assert_eq!(boxes.len(), 2);
    assert_eq!(boxes[0].id, 1);
    assert_eq!(authors(&boxes[0].contents), vec!["Foo"]);
    assert_eq!(boxes[0].total_weight, 10.0);
    assert_eq!(boxes[1].id, 2);
    assert_eq!(authors(&boxes[1].contents), vec!["Baz", "Bar"]);
    assert_eq!(boxes[1].total_weight, 6.0);
}

#[test]
fn test_empty_shipment() {
    let boxes = GreedyPacker::default().pack::<Book>(&[]).unwrap();
    assert!(boxes.is_empty());
}

#[test]
fn test_light_books_share_a_box() {
    let boxes = GreedyPacker::default()
        .pack(&books(&[("Foo", 6.0), ("Bar", 1.0)]))
        .unwrap();
    assert_eq!(totals(&boxes), vec![7.0]);
}

#[test]
fn test_full_weight_books_each_fill_a_box() {
    let boxes = GreedyPacker::default()
        .pack(&books(&[("A", 10.0), ("B", 10.0), ("C", 10.0)]))
        .unwrap();

    assert_eq!(boxes.len(), 3);
    for (i, container) in boxes.iter().enumerate() {
        assert_eq!(container.id, i + 1);
        assert_eq!(container.len(), 1);
        assert_eq!(container.total_weight, 10.0);
    }
    assert_eq!(authors(boxes.iter().flat_map(|c| &c.contents)), vec!["A", "B", "C"]);
}

#[test]
fn test_later_pass_backfills_with_smaller_books() {
    // 7 and 3 fill box one; 6 and both 2s go to box two
    let ranked = rank(&books(&[("a", 7.0), ("b", 6.0), ("c", 3.0), ("d", 2.0), ("e", 2.0)]));

    let boxes = pack(ranked, 10.0).unwrap();

    assert_eq!(authors(&boxes[0].contents), vec!["a", "c"]);
    assert_eq!(authors(&boxes[1].contents), vec!["b", "d", "e"]);
    assert_eq!(totals(&boxes), vec![10.0, 10.0]);
}

#[test]
fn test_packed_books_are_marked() {
    let boxes = GreedyPacker::default()
        .pack(&books(&[("Foo", 3.0), ("Bar", 4.0)]))
        .unwrap();
    assert!(boxes.iter().flat_map(|c| &c.contents).all(|b| b.packed));
}

#[test]
fn test_input_is_left_untouched() {
    let shipment = books(&[("Bar", 1.0), ("Foo", 10.0)]);
    let before = shipment.clone();

    GreedyPacker::default().pack(&shipment).unwrap();

    assert_eq!(shipment, before);
}

#[test]
fn test_signed_zero_weights_keep_input_order() {
    let shipment = books(&[("A", -0.0), ("B", 0.0)]);

    assert_eq!(authors(&rank(&shipment)), vec!["A", "B"]);

    let boxes = GreedyPacker::default().pack(&shipment).unwrap();
    assert_eq!(boxes.len(), 1);
    assert_eq!(authors(&boxes[0].contents), vec!["A", "B"]);
}

#[test]
fn test_oversized_book_fails_fast() {
    let shipment = books(&[("Foo", 3.0), ("Heavy", 10.5), ("Bar", 1.0)]);

    let err = GreedyPacker::default().pack(&shipment).unwrap_err();

    assert_eq!(
        err,
        PackingError::ExceedsCapacity {
            index: 1,
            weight: 10.5,
            capacity: 10.0
        }
    );
    assert_eq!(err.offending_index(), Some(1));
}

#[test]
fn test_reused_books_are_rejected() {
    let boxes = GreedyPacker::default()
        .pack(&books(&[("Foo", 3.0)]))
        .unwrap();
    let repacked: Vec<Book> = boxes.into_iter().flat_map(|c| c.contents).collect();

    let err = GreedyPacker::default().pack(&repacked).unwrap_err();
    assert_eq!(err, PackingError::AlreadyPlaced { index: 0 });
}

fn shipment_weights() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(0.0f64..=10.0, 0..40)
}

fn numbered(weights: &[f64]) -> Vec<Book> {
    weights
        .iter()
        .enumerate()
        .map(|(i, w)| Book::with_weight(format!("book-{i}"), *w))
        .collect()
}

proptest! {
    #[test]
    fn prop_boxes_respect_capacity(weights in shipment_weights()) {
        let boxes = GreedyPacker::default().pack(&numbered(&weights)).unwrap();

        for container in &boxes {
            let in_order_sum = container.contents.iter().fold(0.0, |acc, b| acc + b.weight);
            prop_assert_eq!(container.total_weight.to_bits(), in_order_sum.to_bits());
            prop_assert!(container.total_weight <= 10.0);
            prop_assert!(!container.is_empty());
        }
    }

    #[test]
    fn prop_every_book_is_packed_once(weights in shipment_weights()) {
        let shipment = numbered(&weights);
        let boxes = GreedyPacker::default().pack(&shipment).unwrap();

        let mut packed: Vec<String> = boxes
            .iter()
            .flat_map(|c| c.contents.iter().map(|b| b.author.clone()))
            .collect();
        let mut expected: Vec<String> = shipment.iter().map(|b| b.author.clone()).collect();
        packed.sort();
        expected.sort();
        prop_assert_eq!(packed, expected);
    }

    #[test]
    fn prop_ids_are_sequential(weights in shipment_weights()) {
        let boxes = GreedyPacker::default().pack(&numbered(&weights)).unwrap();
        let ids: Vec<usize> = boxes.iter().map(|c| c.id).collect();
        let expected: Vec<usize> = (1..=boxes.len()).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn prop_packing_is_deterministic(weights in shipment_weights()) {
        let shipment = numbered(&weights);
        let first = GreedyPacker::default().pack(&shipment).unwrap();
        let second = GreedyPacker::default().pack(&shipment).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_rank_is_stable(tenths in proptest::collection::vec(-1i8..5, 0..30)) {
        // Few distinct weights so ties are common; -1 stands for a signed zero
        let weights: Vec<f64> = tenths
            .iter()
            .map(|t| if *t < 0 { -0.0 } else { f64::from(*t) / 10.0 })
            .collect();
        let ranked = rank(&numbered(&weights));

        for pair in ranked.windows(2) {
            prop_assert!(pair[0].weight >= pair[1].weight);
            if pair[0].weight == pair[1].weight {
                let index = |b: &Book| b.author["book-".len()..].parse::<usize>().unwrap();
                prop_assert!(index(&pair[0]) < index(&pair[1]));
            }
        }
    }

    #[test]
    fn prop_oversized_book_is_rejected(
        weights in shipment_weights(),
        heavy in 10.001f64..1000.0,
        position in any::<prop::sample::Index>(),
    ) {
        let mut weights = weights;
        let index = position.index(weights.len() + 1);
        weights.insert(index, heavy);

        let err = GreedyPacker::default().pack(&numbered(&weights)).unwrap_err();
        prop_assert_eq!(
            err,
            PackingError::ExceedsCapacity { index, weight: heavy, capacity: 10.0 }
        );
    }
}
