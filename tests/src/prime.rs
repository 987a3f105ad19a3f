#![cfg(test)]
use numkit_core::{is_prime, smallest_divisor};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn has_divisor_up_to_sqrt(n: i64) -> bool {
    (2..=n.isqrt()).any(|i| n % i == 0)
}

#[test]
fn documented_values() {
    assert!(is_prime(2));
    assert!(is_prime(17));
    assert!(!is_prime(4));
    assert!(!is_prime(1));
}

#[test]
fn primes_below_one_hundred() {
    let primes: Vec<i64> = (0..100).filter(|&n| is_prime(n)).collect();
    assert_eq!(
        primes,
        vec![
            2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79,
            83, 89, 97
        ]
    );
}

/// For n >= 2, prime exactly when nothing in [2, floor(sqrt(n))] divides n.
#[test]
fn random_inputs_follow_trial_division() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..2_000 {
        let n: i64 = rng.random_range(2..=1_000_000);
        assert_eq!(is_prime(n), !has_divisor_up_to_sqrt(n), "n = {n}");
    }
}

#[test]
fn random_inputs_below_two_are_not_prime() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..500 {
        let n: i64 = rng.random_range(i64::MIN..2);
        assert!(!is_prime(n), "n = {n}");
    }
}

#[test]
fn divisor_explains_composites() {
    for n in 4..500 {
        match smallest_divisor(n) {
            Some(d) => {
                assert!(!is_prime(n));
                assert_eq!(n % d, 0);
                assert!(d * d <= n);
            }
            None => assert!(is_prime(n)),
        }
    }
}

#[test]
fn repeated_calls_agree() {
    for n in [-3, 0, 1, 2, 17, 561, 7919] {
        assert_eq!(is_prime(n), is_prime(n));
    }
}
