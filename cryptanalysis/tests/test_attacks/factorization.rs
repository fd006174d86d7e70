use cryptanalysis::attacks::FactorRecovery;
use num_bigint::BigUint;
use num_traits::Zero;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn big(n: u64) -> BigUint {
    BigUint::from(n)
}

#[test]
fn test_recover_factors_from_valid_pair() {
    // n = 277 · 331, d = 17, e = 17^{-1} mod φ(n) = 16073
    let n = big(91687);
    let e = big(16073);
    let d = big(17);
    let mut rng = StdRng::seed_from_u64(0xFAC7);

    let (p, q) = FactorRecovery::recover(&n, &e, &d, &mut rng).expect("recovery failed");
    assert_eq!(&p * &q, n);
    assert!(
        (p == big(277) && q == big(331)) || (p == big(331) && q == big(277)),
        "unexpected factors {} and {}",
        p,
        q
    );
}

#[test]
fn test_recover_rejects_odd_exponent_product() {
    // e·d − 1 = 3 — нечётное, разложение 2^u недоступно
    let mut rng = StdRng::seed_from_u64(1);
    assert!(FactorRecovery::recover(&big(15), &big(2), &big(2), &mut rng).is_none());
}

#[test]
fn test_recover_rejects_zero_exponents() {
    let mut rng = StdRng::seed_from_u64(2);
    assert!(FactorRecovery::recover(&big(91687), &BigUint::zero(), &big(17), &mut rng).is_none());
    assert!(FactorRecovery::recover(&big(91687), &big(16073), &BigUint::zero(), &mut rng).is_none());
}

#[test]
fn test_recover_exhausts_trials_on_prime_modulus() {
    // у простого n нетривиального НОД не существует: все 100 попыток впустую
    let mut rng = StdRng::seed_from_u64(3);
    assert!(FactorRecovery::recover(&big(101), &big(7), &big(3), &mut rng).is_none());
}

#[test]
fn test_identical_seed_gives_identical_factors() {
    let n = big(91687);
    let e = big(16073);
    let d = big(17);

    let mut first_rng = StdRng::seed_from_u64(99);
    let mut second_rng = StdRng::seed_from_u64(99);

    assert_eq!(
        FactorRecovery::recover(&n, &e, &d, &mut first_rng),
        FactorRecovery::recover(&n, &e, &d, &mut second_rng)
    );
}
