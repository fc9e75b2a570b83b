//! End-to-end scenarios over the public sequence API.

use strand_core::{GrowthConfig, IndexError, SeqError};
use strand_seq::Sequence;
use strand_test_utils::{ascending, init_tracing, one_to_five, ten_to_forty};

#[test]
fn remove_two_from_middle() {
    init_tracing();
    let mut s = ten_to_forty();
    s.remove(1, 2).unwrap();
    assert_eq!(s.to_vec(), vec![10, 40]);
    assert_eq!(s.len(), 2);
}

#[test]
fn insert_many_into_empty() {
    let mut s = Sequence::new();
    s.insert_many(0, [1, 2, 3]).unwrap();
    assert_eq!(s.to_vec(), vec![1, 2, 3]);
    assert!(s.capacity() >= 3);
}

#[test]
fn replace_same_length_does_not_shift() {
    let mut s = one_to_five();
    let capacity = s.capacity();
    s.replace(1, [9, 9], 2).unwrap();
    assert_eq!(s.to_vec(), vec![1, 9, 9, 4, 5]);
    assert_eq!(s.capacity(), capacity);
}

#[test]
fn self_filter_keeps_evens() {
    let mut s = one_to_five();
    let capacity = s.capacity();
    s.filter_in_place(|x| x % 2 == 0);
    assert_eq!(s.to_vec(), vec![2, 4]);
    assert_eq!(s.len(), 2);
    assert!(s.capacity() >= capacity);
}

#[test]
fn find_greater_than_three() {
    let s = one_to_five();
    assert_eq!(s.find(|&x| x > 3, 0), Ok(Some(3)));
    assert_eq!(s.get(3usize), Ok(&4));
    assert_eq!(s.find(|&x| x > 10, 0), Ok(None));
}

#[test]
fn negative_positions_are_uniform_across_mutations() {
    let mut s = ascending(5);
    s.insert(-2, 100).unwrap();
    assert_eq!(s.to_vec(), vec![0, 1, 2, 100, 3, 4]);
    s.remove(-3, 1).unwrap();
    assert_eq!(s.to_vec(), vec![0, 1, 2, 3, 4]);
    s.replace(-1, [40, 41], 1).unwrap();
    assert_eq!(s.to_vec(), vec![0, 1, 2, 3, 40, 41]);
    assert_eq!(s.set(-6, 9), Ok(0));
    assert_eq!(s.get(0usize), Ok(&9));
}

#[test]
fn failed_operations_leave_sequence_intact() {
    let mut s = ten_to_forty();
    let before = s.clone();
    let capacity = s.capacity();

    assert!(s.insert(5, 0).is_err());
    assert!(s.insert(-5, 0).is_err());
    assert!(s.remove(3, 2).is_err());
    assert!(s.replace(2, [1, 2, 3], 3).is_err());
    assert!(s.set(4, 0).is_err());

    assert_eq!(s, before);
    assert_eq!(s.capacity(), capacity);
}

#[test]
fn bounded_sequence_rejects_growth_before_mutating() {
    let mut s = Sequence::with_config(GrowthConfig::bounded(4)).unwrap();
    s.insert_many(0, [1, 2, 3]).unwrap();
    let err = s.insert_many(1, [7, 8]).unwrap_err();
    assert_eq!(
        err,
        SeqError::CapacityExceeded {
            requested: 5,
            max: 4
        }
    );
    assert_eq!(s.to_vec(), vec![1, 2, 3]);

    // Doubling from 3 clamps to the ceiling instead of failing.
    s.insert(3, 4).unwrap();
    assert_eq!(s.capacity(), 4);
}

#[test]
fn bounded_resize_fails_before_filling() {
    let mut s = Sequence::with_config(GrowthConfig::bounded(4)).unwrap();
    s.insert_many(0, [1, 2, 3]).unwrap();
    let capacity = s.capacity();
    let reallocations = s.reallocations();

    let exceeded = Err(SeqError::CapacityExceeded {
        requested: 6,
        max: 4,
    });
    assert_eq!(s.resize(6, Some(0)), exceeded);
    assert_eq!(s.resize(6, None), exceeded);
    assert_eq!(s.to_vec(), vec![1, 2, 3]);
    assert_eq!(s.capacity(), capacity);
    assert_eq!(s.reallocations(), reallocations);

    s.resize(4, Some(0)).unwrap();
    assert_eq!(s.to_vec(), vec![1, 2, 3, 0]);
    assert_eq!(s.capacity(), 4);
}

#[test]
fn invalid_config_is_rejected() {
    let config = GrowthConfig {
        growth_factor: 0,
        ..GrowthConfig::default()
    };
    assert!(Sequence::<u8>::with_config(config).is_err());
}

#[test]
fn range_then_reverse_then_sort_pipeline() {
    let source: Sequence<i32> = Sequence::from([5, 3, 9, 1, 7, 2]);
    let mut window = Sequence::new();
    source.range_into(1, 5, &mut window).unwrap();
    assert_eq!(window.to_vec(), vec![3, 9, 1, 7]);

    let mut reversed = Sequence::new();
    window.reversed_into(&mut reversed).unwrap();
    assert_eq!(reversed.to_vec(), vec![7, 1, 9, 3]);

    let mut sorted = Sequence::new();
    reversed.sorted_into(|a, b| a.cmp(b), &mut sorted).unwrap();
    assert_eq!(sorted.to_vec(), vec![1, 3, 7, 9]);
}

#[test]
fn range_errors_only_for_non_empty_ranges() {
    let s = ascending(3);
    let mut out = ascending(2);
    assert!(s.range_into(5, 5, &mut out).is_ok());
    assert_eq!(
        s.range_into(2, 4, &mut out),
        Err(SeqError::Index(IndexError::Range {
            start: 2,
            count: 2,
            len: 3
        }))
    );
    assert_eq!(out.to_vec(), vec![0, 1]);
}

#[test]
fn map_then_partition() {
    let s = ascending(6);
    let mut squares = Sequence::new();
    s.map_into(|x| x * x, &mut squares).unwrap();
    assert_eq!(squares.to_vec(), vec![0, 1, 4, 9, 16, 25]);

    let mut small = Sequence::new();
    let mut large = Sequence::new();
    squares
        .partition_into(|&x| x < 10, &mut small, &mut large)
        .unwrap();
    assert_eq!(small.to_vec(), vec![0, 1, 4, 9]);
    assert_eq!(large.to_vec(), vec![16, 25]);
}

#[test]
fn clear_then_reuse() {
    let mut s = ascending(10);
    s.clear();
    assert_eq!(s.capacity(), 0);
    s.insert(0, 42).unwrap();
    assert_eq!(s.to_vec(), vec![42]);
    assert_eq!(s.capacity(), 1);
}

#[test]
fn iterate_by_reference() {
    let s = ascending(4);
    let total: i32 = (&s).into_iter().sum();
    assert_eq!(total, 6);
    let doubled: Vec<i32> = s.iter().map(|x| x * 2).collect();
    assert_eq!(doubled, vec![0, 2, 4, 6]);
    assert_eq!(s.iter().rev().next(), Some(&3));
}
