use rstest::rstest;

use crate::sequence::*;

#[test]
fn test_insert_at_clamps() {
    let mut seq = Sequence::from([1, 2]);
    seq.insert_at(1, 10);
    assert_eq!(*seq, [1, 10, 2]);
    seq.insert_at(-3, 20);
    assert_eq!(*seq, [20, 1, 10, 2], "Negative indices should insert at the head.");
    seq.insert_at(4, 30);
    seq.insert_at(isize::MAX, 40);
    assert_eq!(*seq, [20, 1, 10, 2, 30, 40], "Indices past the end should append.");

    let mut empty = Sequence::new();
    empty.insert_at(5, 'a');
    assert_eq!(*empty, ['a']);
}

#[test]
fn test_insert_before_and_after() {
    let mut seq = Sequence::from([1, 2, 3]);
    seq.insert_before(|&i| i == 2, 10);
    assert_eq!(*seq, [1, 10, 2, 3]);
    seq.insert_after(|&i| i == 2, 20);
    assert_eq!(*seq, [1, 10, 2, 20, 3]);

    let mut seq = Sequence::from([1, 2]);
    seq.insert_before(|&i| i == 9, 0);
    seq.insert_after(|&i| i == 9, -1);
    assert_eq!(
        *seq,
        [-1, 0, 1, 2],
        "Inserting relative to a missing element should insert at the head."
    );
}

#[test]
fn test_remove_at() {
    let mut seq = Sequence::from(['a', 'b', 'c']);
    assert_eq!(seq.remove_at(-1), None, "Negative indices should be a no-op.");
    assert_eq!(seq.remove_at(3), None, "Indices past the end should be a no-op.");
    assert_eq!(*seq, ['a', 'b', 'c']);
    assert_eq!(seq.remove_at(1), Some('b'));
    assert_eq!(*seq, ['a', 'c']);
}

#[test]
fn test_swap_index() {
    let mut seq = Sequence::from([1, 2, 3]);
    seq.swap_index(0, 2);
    assert_eq!(*seq, [3, 2, 1]);
    seq.swap_index(0, 3);
    seq.swap_index(-1, 1);
    assert_eq!(*seq, [3, 2, 1], "Out of bounds swaps should be a no-op.");
    seq.swap_index(1, 1);
    assert_eq!(*seq, [3, 2, 1]);
}

#[rstest]
#[case(-5)]
#[case(-1)]
#[case(0)]
#[case(1)]
#[case(3)]
#[case(4)]
#[case(5)]
#[case(isize::MAX)]
fn test_split_at_recovers_original(#[case] index: isize) {
    let seq = Sequence::from([1, 2, 3, 4]);
    let split = seq.split_at(index);
    assert_eq!(split.len(), 2, "split_at should always produce two rows.");
    assert_eq!(
        split.flatten(),
        seq,
        "Concatenating both halves should give back the original."
    );
}

#[test]
fn test_split_at_boundaries() {
    let seq = Sequence::from([1, 2, 3]);

    let split = seq.split_at(-1);
    assert!(split[0].is_empty(), "A negative index should put everything in the second half.");
    assert_eq!(split[1], seq);

    let split = seq.split_at(3);
    assert_eq!(split[0], seq, "An index at the end should put everything in the first half.");
    assert!(split[1].is_empty());

    let split = seq.split_at(2);
    assert_eq!(*split[0], [1, 2]);
    assert_eq!(*split[1], [3]);

    let split = Sequence::<u8>::new().split_at(0);
    assert_eq!(split.lengths(), Sequence::from([0, 0]));
}

#[test]
fn test_split_before_and_after() {
    let seq = Sequence::from([1, 2, 3, 4]);

    let before = seq.split_before(|&i| i == 3);
    assert_eq!(*before[0], [1, 2]);
    assert_eq!(*before[1], [3, 4]);

    let after = seq.split_after(|&i| i == 3);
    assert_eq!(*after[0], [1, 2, 3]);
    assert_eq!(*after[1], [4]);

    for split in [seq.split_before(|&i| i > 9), seq.split_after(|&i| i > 9)] {
        assert_eq!(split[0], seq, "Without a match, everything should be in the first half.");
        assert!(split[1].is_empty());
    }
}

#[test]
fn test_take_and_skip() {
    let seq = Sequence::from([1, 2, 3]);

    assert_eq!(*seq.take(2), [1, 2]);
    assert!(seq.take(-1).is_empty(), "Taking a negative count should take nothing.");
    assert_eq!(seq.take(10), seq, "Taking past the end should take everything.");

    assert_eq!(*seq.skip(2), [3]);
    assert_eq!(seq.skip(-1), seq, "Skipping a negative count should skip nothing.");
    assert!(seq.skip(10).is_empty(), "Skipping past the end should skip everything.");
}

#[test]
fn test_take_and_skip_while() {
    let seq = Sequence::from([1, 2, 5, 1]);
    assert_eq!(*seq.take_while(|&i| i < 3), [1, 2]);
    assert_eq!(*seq.skip_while(|&i| i < 3), [5, 1]);
    assert_eq!(seq.take_while(|_| true), seq);
    assert!(seq.skip_while(|_| true).is_empty());
}
