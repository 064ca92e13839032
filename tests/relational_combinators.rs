use fct_core::list::{
    elem, intersect, is_infix_of, is_prefix_of, is_suffix_of, not_elem, nub, union_of,
};

#[test]
fn membership_uses_element_equality() {
    let xs = vec!["alpha".to_string(), "beta".to_string()];
    assert!(elem(&"beta".to_string(), &xs));
    assert!(not_elem(&"gamma".to_string(), &xs));
    assert!(not_elem(&1, &Vec::<i32>::new()));
}

#[test]
fn intersect_keeps_order_and_multiplicity_of_left() {
    let xs = vec![3, 1, 3, 2, 4];
    let ys = vec![4, 3, 9];
    assert_eq!(intersect(&xs, &ys), vec![3, 3, 4]);

    // not symmetric when the left side has duplicates
    assert_eq!(intersect(&ys, &xs), vec![4, 3]);
    assert_eq!(intersect(&xs, &vec![]), Vec::<i32>::new());
}

#[test]
fn intersect_does_not_swap_by_size() {
    let short = vec![2, 1];
    let long = vec![1, 2, 3, 4, 5];
    assert_eq!(intersect(&short, &long), vec![2, 1]);
    assert_eq!(intersect(&long, &short), vec![1, 2]);
}

#[test]
fn union_appends_right_side_whole() {
    let xs = vec![1, 2, 2, 5];
    let ys = vec![2, 3, 3];
    assert_eq!(union_of(&xs, &ys), vec![1, 5, 2, 3, 3]);
    assert_eq!(union_of(&vec![], &ys), vec![2, 3, 3]);
    assert_eq!(union_of(&xs, &vec![]), vec![1, 2, 2, 5]);
}

#[test]
fn empty_needle_is_contained_everywhere() {
    let empty: Vec<u8> = vec![];
    let xs = vec![1, 2, 3];
    for haystack in [&empty, &xs] {
        assert!(is_prefix_of(&empty, haystack));
        assert!(is_suffix_of(&empty, haystack));
        assert!(is_infix_of(&empty, haystack));
    }
}

#[test]
fn containment_tests() {
    let xs = vec![1, 2, 3, 4];

    assert!(is_prefix_of(&vec![1, 2], &xs));
    assert!(!is_prefix_of(&vec![2, 3], &xs));
    assert!(is_prefix_of(&xs, &xs));
    assert!(!is_prefix_of(&vec![1, 2, 3, 4, 5], &xs));

    assert!(is_suffix_of(&vec![3, 4], &xs));
    assert!(!is_suffix_of(&vec![2, 3], &xs));
    assert!(!is_suffix_of(&vec![0, 1, 2, 3, 4], &xs));

    assert!(is_infix_of(&vec![2, 3], &xs));
    assert!(is_infix_of(&vec![1, 2, 3, 4], &xs));
    assert!(is_infix_of(&vec![4], &xs));
    assert!(!is_infix_of(&vec![1, 3], &xs));
    assert!(!is_infix_of(&vec![4, 5], &xs));
}

#[test]
fn nub_keeps_first_occurrences() {
    assert_eq!(nub(&vec![3, 1, 3, 2, 1, 4]), vec![3, 1, 2, 4]);
    assert_eq!(nub(&vec!['a', 'a', 'a']), vec!['a']);
    assert_eq!(nub(&Vec::<i32>::new()), Vec::<i32>::new());
}
