use commons::rng::{CANDIDATE_CHARS, Random};

#[test]
fn next_index_stays_in_range() {
    let mut rng = Random::new();

    for _ in 0..2_000 {
        assert!(rng.next_index(10) < 10);
    }
}

#[test]
fn next_index_of_one_is_always_zero() {
    let mut rng = Random::new();

    for _ in 0..100 {
        assert_eq!(rng.next_index(1), 0);
    }
}

#[test]
fn next_index_in_covers_the_slice() {
    let mut rng = Random::new();
    let items = [10, 20, 30];

    let mut seen = [false; 3];
    for _ in 0..1_000 {
        seen[rng.next_index_in(&items)] = true;
    }

    assert_eq!(seen, [true; 3]);
}

#[test]
fn inclusive_range_stays_in_bounds() {
    let mut rng = Random::new();

    for _ in 0..2_000 {
        let value = rng.next_i32_in(-5, 5).unwrap();
        assert!((-5..=5).contains(&value));
    }
}

#[test]
fn degenerate_range_always_returns_low() {
    let mut rng = Random::new();

    for _ in 0..100 {
        assert_eq!(rng.next_i32_in(7, 7).unwrap(), 7);
    }
}

#[test]
fn inverted_range_fails() {
    let mut rng = Random::new();

    assert!(rng.next_i32_in(5, 3).is_err());
    assert!(rng.next_i32_in(i32::MIN + 1, i32::MIN).is_err());
}

#[test]
fn empty_range_fails() {
    let mut rng = Random::new();

    assert!(rng.next_i32_in(0, -1).is_err());
}

#[test]
fn full_domain_range_is_valid() {
    let mut rng = Random::new();

    assert!(rng.next_i32_in(i32::MIN, i32::MAX).is_ok());
}

#[test]
fn two_value_range_hits_both_endpoints() {
    let mut rng = Random::new();

    let mut seen = [false; 2];
    for _ in 0..1_000 {
        seen[rng.next_i32_in(0, 1).unwrap() as usize] = true;
    }

    assert_eq!(seen, [true, true]);
}

#[test]
fn next_char_comes_from_the_alphabet() {
    let mut rng = Random::new();

    for _ in 0..500 {
        let c = rng.next_char();
        assert!(CANDIDATE_CHARS.contains(&(c as u8)));
    }
}

#[test]
fn random_string_has_exact_length_and_alphabet() {
    let mut rng = Random::new();

    let s = rng.random_string(64);

    assert_eq!(s.chars().count(), 64);
    assert!(s.bytes().all(|b| CANDIDATE_CHARS.contains(&b)));
}

#[test]
fn random_string_of_zero_is_empty() {
    let mut rng = Random::new();

    assert_eq!(rng.random_string(0), "");
}

#[test]
fn non_negative_i64_folds_the_sign() {
    let mut rng = Random::new();

    let mut negatives = 0;
    let mut positives = 0;

    for _ in 0..500 {
        let draw = rng.next_non_negative_i64();
        assert!(draw.value >= 0);

        if draw.was_negative {
            negatives += 1;
        } else {
            positives += 1;
        }
    }

    assert!(negatives > 0);
    assert!(positives > 0);
}

#[test]
fn non_negative_i32_folds_the_sign() {
    let mut rng = Random::new();

    let mut negatives = 0;
    let mut positives = 0;

    for _ in 0..500 {
        let draw = rng.next_non_negative_i32();
        assert!(draw.value >= 0);

        if draw.was_negative {
            negatives += 1;
        } else {
            positives += 1;
        }
    }

    assert!(negatives > 0);
    assert!(positives > 0);
}

#[test]
fn next_bool_produces_both_values() {
    let mut rng = Random::new();

    let mut seen_true = false;
    let mut seen_false = false;

    for _ in 0..500 {
        if rng.next_bool() {
            seen_true = true;
        } else {
            seen_false = true;
        }
    }

    assert!(seen_true && seen_false);
}

#[test]
fn next_byte_covers_the_full_range() {
    let mut rng = Random::new();

    let mut seen = [false; 256];
    for _ in 0..16_384 {
        seen[rng.next_byte() as usize] = true;
    }

    assert!(seen.iter().all(|&s| s));
}

#[test]
fn choose_over_one_element_returns_it() {
    let mut rng = Random::new();
    let only = ["alone"];

    for _ in 0..100 {
        assert_eq!(*rng.choose(&only).unwrap(), "alone");
    }
}

#[test]
fn choose_returns_a_member() {
    let mut rng = Random::new();
    let set = ["north", "south", "east", "west"];

    for _ in 0..500 {
        let picked = rng.choose(&set).unwrap();
        assert!(set.contains(picked));
    }
}

#[test]
fn choose_eventually_picks_every_member() {
    let mut rng = Random::new();
    let set = [1, 2, 3];

    let mut seen = [false; 3];
    for _ in 0..1_000 {
        seen[(rng.choose(&set).unwrap() - 1) as usize] = true;
    }

    assert_eq!(seen, [true; 3]);
}

#[test]
fn choose_over_empty_fails() {
    let mut rng = Random::new();
    let empty: [u8; 0] = [];

    assert!(rng.choose(&empty).is_err());
}
