use crate::sequence::*;

fn lengths<T>(seq: &Sequence<T>, size: usize) -> [Sequence<usize>; 3] {
    [
        seq.window_left(size, |w| w.len()),
        seq.window_right(size, |w| w.len()),
        seq.window_centered(size, |w| w.len()),
    ]
}

#[test]
fn test_window_centered() {
    let seq = Sequence::from(["1", "2", "3"]);
    assert_eq!(*seq.window_centered(3, |w| w.concat()), ["12", "123", "23"]);

    let seq = Sequence::from_iter(0..5);
    assert_eq!(
        *seq.window_centered(4, |w| w.len()),
        [2, 3, 4, 4, 3],
        "An even window should reach further back than forward."
    );
    assert_eq!(
        *seq.window_centered(4, |w| w[0]),
        [0, 0, 0, 1, 2],
        "Each window should be aligned to its own position."
    );
    assert_eq!(*seq.window_centered(1, |w| w[0]), [0, 1, 2, 3, 4]);
}

#[test]
fn test_window_left_and_right() {
    let seq = Sequence::from_iter(1..=5);
    assert_eq!(*seq.window_left(3, |w| w.iter().sum::<i32>()), [1, 3, 6, 9, 12]);
    assert_eq!(*seq.window_right(3, |w| w.iter().sum::<i32>()), [6, 9, 12, 9, 5]);

    let [left, right, _] = lengths(&seq, 3);
    assert_eq!(*left, [1, 2, 3, 3, 3], "Left windows should be partial at the head.");
    assert_eq!(*right, [3, 3, 3, 2, 1], "Right windows should be partial at the end.");
}

#[test]
fn test_window_sizes() {
    let seq = Sequence::from_iter(0..3);
    for windows in lengths(&seq, 0) {
        assert!(windows.is_empty(), "A window of size 0 should produce nothing.");
    }
    let [left, right, centered] = lengths(&seq, 10);
    assert_eq!(*left, [1, 2, 3], "Oversized windows should be clipped to the Sequence.");
    assert_eq!(*right, [3, 2, 1]);
    assert_eq!(*centered, [3, 3, 3]);
    for windows in lengths(&Sequence::<u8>::new(), 3) {
        assert!(windows.is_empty());
    }
}

#[test]
fn test_pairwise() {
    let seq = Sequence::from([1, 3, 6, 10]);
    assert_eq!(*seq.pairwise(|a, b| b - a), [2, 3, 4]);
    assert!(Sequence::from([1]).pairwise(|a, b| a + b).is_empty());
    assert!(Sequence::<i32>::new().pairwise(|a, b| a + b).is_empty());
}

#[test]
fn test_zip() {
    let a = Sequence::from([1, 2, 3]);
    let b = Sequence::from([7, 8, 9]);
    assert_eq!(*a.zip(&b), [1, 7, 2, 8, 3, 9]);
    assert_eq!(*Sequence::from([1, 2]).zip(&b), [1, 7, 2, 8, 9]);
    assert_eq!(*b.zip(&Sequence::from([1, 2])), [7, 1, 8, 2, 9]);
    assert_eq!(Sequence::new().zip(&b), b, "Zipping with nothing should leave other as is.");
    assert_eq!(a.zip(&Sequence::new()), a);
}

#[test]
fn test_unzip() {
    let a = Sequence::from([1, 2, 3]);
    let b = Sequence::from([7, 8, 9]);
    let rows = a.zip(&b).unzip();
    assert_eq!(rows, Grid::from_rows([a, b]), "unzip should undo zip.");

    let rows = Sequence::<u8>::new().unzip();
    assert_eq!(rows.len(), 2, "unzip should always produce two rows.");
    assert!(rows.all(|row| row.is_empty()));
}
