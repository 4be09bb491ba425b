use super::*;

#[test]
fn can_produce_values_within_range() {
    let random = DefaultRandom::default();

    (0..100).for_each(|_| {
        let int_value = random.uniform_int(-5, 5);
        let real_value = random.uniform_real(1., 2.);

        assert!((-5..=5).contains(&int_value));
        assert!((1. ..2.).contains(&real_value));
    });
}

#[test]
fn can_return_bound_when_range_is_empty() {
    let random = DefaultRandom::default();

    assert_eq!(random.uniform_int(3, 3), 3);
    assert_eq!(random.uniform_real(0.5, 0.5), 0.5);
}

#[test]
fn can_repeat_sequence_with_the_same_seed() {
    let generate = |seed| {
        let random = DefaultRandom::new_repeatable(seed);
        (0..10).map(|_| random.uniform_int(0, 1000)).collect::<Vec<_>>()
    };

    assert_eq!(generate(42), generate(42));
    assert_ne!(generate(42), generate(43));
}
