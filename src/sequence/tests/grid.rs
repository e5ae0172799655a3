use crate::sequence::*;

#[test]
fn test_rows() {
    let grid = Grid::from_rows([Sequence::from([1, 2]), Sequence::new(), Sequence::from([3])]);
    assert_eq!(grid.len(), 3);
    assert_eq!(*grid.lengths(), [2, 0, 1]);
    assert_eq!(*grid.flatten(), [1, 2, 3], "flatten should concatenate rows in order.");
    assert!(Grid::<u8>::new().flatten().is_empty());
}

#[test]
fn test_sequence_operations_apply_to_rows() {
    let grid = Grid::from_rows([
        Sequence::from([3, 1]),
        Sequence::from([2]),
        Sequence::from([3, 1]),
        Sequence::new(),
    ]);

    let distinct = grid.distinct(|a, b| a == b);
    assert_eq!(distinct.len(), 3, "Rows should be compared as whole elements.");

    let mut by_len = grid.clone();
    by_len.sort(|a, b| a.len() < b.len());
    assert_eq!(*by_len.lengths(), [0, 1, 2, 2]);

    let mut sums = grid.collect(|row| row.fold(0, |acc, i| acc + i));
    sums.filter(|&sum| sum > 0);
    assert_eq!(*sums, [4, 2, 4]);

    assert_eq!(grid.to_string(), "[[3, 1], [2], [3, 1], []]");
}

#[test]
fn test_nested_results() {
    let seq = Sequence::from_iter(0..6);
    let halves = seq.split_at(3);
    let zipped = halves[0].zip(&halves[1]);
    assert_eq!(*zipped, [0, 3, 1, 4, 2, 5]);

    let nested = zipped.unzip().collect(|row| row.split_at(1));
    assert_eq!(nested.len(), 2);
    assert_eq!(nested[1].to_string(), "[[3], [4, 5]]");
}
