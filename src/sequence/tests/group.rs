use crate::sequence::*;

/// Puts rows in a deterministic order, since grouping makes no promises about row order.
fn sorted(mut grid: Grid<i32>) -> Grid<i32> {
    grid.sort(|a, b| a.head() < b.head());
    grid
}

#[test]
fn test_group() {
    let seq = Sequence::from([3, 10, 4, 21, 5, 12]);
    let groups = sorted(seq.group(|i| i % 3));
    assert_eq!(groups.len(), 3);
    assert_eq!(*groups[0], [3, 21, 12], "Elements within a bucket should keep input order.");
    assert_eq!(*groups[1], [5]);
    assert_eq!(*groups[2], [10, 4]);

    assert!(Sequence::<i32>::new().group(|&i| i).is_empty());
}

#[test]
fn test_group_i() {
    let seq = Sequence::from([10, 11, 12, 13, 14]);
    let groups = sorted(seq.group_i(|i, _| i / 2));
    assert_eq!(groups.lengths(), Sequence::from([2, 2, 1]));
    assert_eq!(groups.flatten(), seq);
}

#[test]
fn test_partition() {
    let seq = Sequence::from_iter(1..=6);
    let parts = seq.partition(|i| i % 2 == 0);
    assert_eq!(parts.len(), 2);
    let evens = parts.first(|row| row.all(|i| i % 2 == 0));
    let odds = parts.first(|row| row.all(|i| i % 2 == 1));
    assert_eq!(evens.map(|row| &**row), Some(&[2, 4, 6][..]));
    assert_eq!(odds.map(|row| &**row), Some(&[1, 3, 5][..]));

    let parts = seq.partition(|_| true);
    assert_eq!(parts.len(), 1, "Empty sides shouldn't produce a row.");
    assert_eq!(parts[0], seq);
}

#[test]
fn test_group_by_trait_prunes_subsets() {
    let seq = Sequence::from([1_i32, 2, 3, 4, 10]);
    let groups = seq.group_by_trait(|a, b| (a - b).abs() <= 1);
    assert_eq!(
        groups,
        Grid::from_rows([
            Sequence::from([1, 2, 3]),
            Sequence::from([2, 3, 4]),
            Sequence::from([10]),
        ]),
        "[1, 2] should be pruned once [1, 2, 3] is established and [3, 4] dropped as a subset."
    );
}

#[test]
fn test_group_by_trait_is_positional() {
    let seq = Sequence::from([7, 7]);
    let groups = seq.group_by_trait(|a, b| a == b);
    assert_eq!(groups.len(), 1);
    assert_eq!(*groups[0], [7, 7], "Equal elements are still separate members.");

    let seq = Sequence::from([1, 2, 3]);
    let groups = seq.group_by_trait(|a, b| a != b);
    assert_eq!(
        groups,
        Grid::from_rows([
            Sequence::from([2, 3]),
            Sequence::from([1, 3]),
            Sequence::from([1, 2]),
        ]),
        "A trait needn't be reflexive."
    );

    assert!(Sequence::<i32>::new().group_by_trait(|_, _| true).is_empty());
}
