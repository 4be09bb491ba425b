use super::*;

parameterized_test! {can_compare_floats, (a, b, expected), {
    assert_eq!(compare_floats(a, b), expected);
}}

can_compare_floats! {
    case_01: (1., 2., Ordering::Less),
    case_02: (2., 1., Ordering::Greater),
    case_03: (1., 1., Ordering::Equal),
    case_04: (Float::NAN, 1., Ordering::Greater),
    case_05: (1., Float::NAN, Ordering::Less),
    case_06: (Float::NAN, Float::NAN, Ordering::Equal),
    case_07: (Float::INFINITY, Float::MAX, Ordering::Greater),
}

#[test]
fn can_sort_floats_with_nan_last() {
    let mut values = vec![3., Float::NAN, 1., 2.];

    values.sort_by(compare_floats_refs);

    assert_eq!(&values[..3], &[1., 2., 3.]);
    assert!(values[3].is_nan());
}
