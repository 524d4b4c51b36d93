use romkit_common::error::ErrorKind;

use crate::Selection;

#[test]
fn test_virtual_to_physical() {
    let sel = Selection::from_intervals(10, [0..2, 7..10]);
    let physical: Vec<_> = (0..5).map(|v| sel.virtual_to_physical(v).unwrap()).collect();
    assert_eq!(physical, vec![0, 1, 7, 8, 9]);
    assert_eq!(sel.virtual_to_physical(-1).unwrap(), 9);
    assert_eq!(sel.virtual_to_physical(-5).unwrap(), 0);

    let err = sel.virtual_to_physical(5).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::OutOfRange { index: 5, len: 5 }));
    assert!(sel.virtual_to_physical(-6).unwrap_err().is_out_of_range());
    assert!(
        Selection::empty(10)
            .virtual_to_physical(0)
            .unwrap_err()
            .is_out_of_range()
    );
}

#[test]
fn test_physical_to_virtual() {
    let sel = Selection::from_intervals(10, [0..2, 7..10]);
    assert_eq!(sel.physical_to_virtual(0).unwrap(), 0);
    assert_eq!(sel.physical_to_virtual(1).unwrap(), 1);
    assert_eq!(sel.physical_to_virtual(7).unwrap(), 2);
    assert_eq!(sel.physical_to_virtual(9).unwrap(), 4);

    let err = sel.physical_to_virtual(4).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::NotSelected { position: 4 }));
    assert!(sel.physical_to_virtual(10).unwrap_err().is_out_of_range());
}

#[test]
fn test_translation_round_trips() {
    let sel = Selection::from_intervals(40, [1..3, 5..6, 9..17, 30..31, 35..40]);
    for p in sel.positions() {
        let v = sel.physical_to_virtual(p).unwrap();
        assert_eq!(sel.virtual_to_physical(v as i64).unwrap(), p);
    }
    for v in 0..sel.len() {
        let p = sel.virtual_to_physical(v as i64).unwrap();
        assert_eq!(sel.physical_to_virtual(p).unwrap(), v);
    }
}

#[test]
fn test_rank_index_follows_edits() {
    let mut sel = Selection::full(10);
    assert_eq!(sel.virtual_to_physical(3).unwrap(), 3);
    sel.exclude(1..3);
    sel.check_invariants();
    assert_eq!(sel.virtual_to_physical(1).unwrap(), 3);
    sel.invert();
    assert_eq!(sel.virtual_to_physical(1).unwrap(), 2);
    assert_eq!(sel.physical_to_virtual(2).unwrap(), 1);
    sel.include(..);
    assert_eq!(sel.physical_to_virtual(9).unwrap(), 9);
    sel.check_invariants();
}

#[test]
fn test_virtual_range_to_physical() {
    let sel = Selection::from_intervals(20, [2..5, 8..10, 14..20]);
    // Virtual indices: 0..3 -> 2..5, 3..5 -> 8..10, 5..11 -> 14..20.
    let phys = sel.virtual_range_to_physical(1..4);
    assert_eq!(phys.intervals().collect::<Vec<_>>(), vec![3..5, 8..9]);
    assert_eq!(phys.len(), 3);
    phys.check_invariants();

    let phys = sel.virtual_range_to_physical(-2..);
    assert_eq!(phys.intervals().collect::<Vec<_>>(), vec![18..20]);

    let phys = sel.virtual_range_to_physical(..);
    assert_eq!(phys, sel);

    let phys = sel.virtual_range_to_physical(4..100);
    assert_eq!(phys.intervals().collect::<Vec<_>>(), vec![9..10, 14..20]);

    assert!(sel.virtual_range_to_physical(3..3).is_empty());
    assert!(sel.virtual_range_to_physical(11..20).is_empty());
}

#[test]
fn test_virtual_exclude_chain() {
    let mut sel = Selection::full(5);
    assert_eq!(sel.exclude_virtual(1..2), 1);
    assert_eq!(sel.intervals().collect::<Vec<_>>(), vec![0..1, 2..5]);
    assert_eq!(sel.exclude_virtual(1..2), 1);
    assert_eq!(sel.intervals().collect::<Vec<_>>(), vec![0..1, 3..5]);
    sel.check_invariants();
}

#[test]
fn test_virtual_edits_clamp() {
    let mut sel = Selection::from_intervals(10, [1..3, 6..8]);
    // Virtual index 3 is physical 7; an end past the selection clamps to the universe.
    assert_eq!(sel.exclude_virtual(3..50), 1);
    assert_eq!(sel.intervals().collect::<Vec<_>>(), vec![1..3, 6..7]);

    // A start before the selection clamps to position 0.
    assert_eq!(sel.include_virtual(-50..1), 1);
    assert_eq!(sel.intervals().collect::<Vec<_>>(), vec![0..3, 6..7]);

    // Including between two selected positions fills the gap between them.
    assert_eq!(sel.include_virtual(1..3), 3);
    assert_eq!(sel.intervals().collect::<Vec<_>>(), vec![0..7]);

    assert_eq!(sel.exclude_virtual(-2..), 2);
    assert_eq!(sel.intervals().collect::<Vec<_>>(), vec![0..5]);

    assert_eq!(sel.exclude_virtual(4..2), 0);
    assert_eq!(sel.include_virtual(7..), 0);
    sel.check_invariants();
}

#[test]
fn test_virtual_reveals() {
    let mut sel = Selection::from_intervals(20, [0..2, 10..12, 18..20]);
    // Virtual 1..5 spans physical 1..19.
    assert_eq!(sel.include_partially_virtual(1..5, (2u64, 1u64)), 3);
    assert_eq!(
        sel.intervals().collect::<Vec<_>>(),
        vec![0..4, 10..12, 17..20]
    );

    let mut sel = Selection::from_intervals(20, [0..2, 10..12, 18..20]);
    // Virtual 1..4 spans physical 1..18; the run at 18 lies outside and stays put.
    assert_eq!(sel.include_expand_virtual(1..4, 1u64), 3);
    assert_eq!(sel.intervals().collect::<Vec<_>>(), vec![0..3, 9..13, 18..20]);
    sel.check_invariants();
}
