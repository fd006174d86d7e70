use cryptanalysis::attacks::WienerAttack;
use cryptanalysis::number_theory::extended_gcd;
use cryptanalysis::primality::{MillerRabinTest, PrimalityTest};
use num_bigint::{BigUint, RandBigInt, ToBigInt};
use num_traits::{One, Zero};
use quickcheck::quickcheck;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn big(n: u64) -> BigUint {
    BigUint::from(n)
}

#[test]
fn test_wiener_attack_classic_vulnerable_key() {
    // хрестоматийный уязвимый ключ: n = 239 · 379, d = 5 < n^{1/4}/3
    let e = big(17993);
    let n = big(90581);
    let mut rng = StdRng::seed_from_u64(0x317E);

    let result = WienerAttack::attack(&e, &n, &mut rng).expect("attack failed");
    assert_eq!(result.d, big(5));
    assert_eq!(&result.p * &result.q, n);
    assert!(
        (result.p == big(239) && result.q == big(379))
            || (result.p == big(379) && result.q == big(239))
    );
}

#[test]
fn test_wiener_attack_recovers_decryption() {
    let e = big(17993);
    let n = big(90581);
    let mut rng = StdRng::seed_from_u64(0x317F);

    let result = WienerAttack::attack(&e, &n, &mut rng).expect("attack failed");

    let m = big(42);
    let c = m.modpow(&e, &n);
    assert_eq!(c.modpow(&result.d, &n), m);
}

#[test]
fn test_wiener_attack_fails_on_large_d() {
    // n = 277 · 331, e = 7, d = 26023 сопоставимо с n: разложение e/n
    // не содержит годного кандидата
    let e = big(7);
    let n = big(91687);
    let mut rng = StdRng::seed_from_u64(0x3180);

    assert!(WienerAttack::attack(&e, &n, &mut rng).is_none());
}

#[test]
fn test_wiener_attack_e_zero() {
    let mut rng = StdRng::seed_from_u64(1);
    let result = WienerAttack::attack(&BigUint::zero(), &big(90581), &mut rng);
    assert!(result.is_none(), "Атака не должна работать при e = 0");
}

#[test]
fn test_wiener_attack_invalid_n() {
    let mut rng = StdRng::seed_from_u64(2);
    for n in [0u64, 1u64] {
        let result = WienerAttack::attack(&big(3), &big(n), &mut rng);
        assert!(result.is_none(), "Атака не должна работать при n = {}", n);
    }
}

#[test]
fn test_wiener_attack_e_ge_n() {
    let mut rng = StdRng::seed_from_u64(3);
    let result = WienerAttack::attack(&big(70000), &big(65537), &mut rng);
    assert!(result.is_none(), "Атака не должна работать при e >= n");
}

fn gen_prime_in_range(low: u64, high: u64, rng: &mut StdRng) -> BigUint {
    let test = MillerRabinTest;
    loop {
        let candidate = rng.gen_biguint_range(&BigUint::from(low), &BigUint::from(high));
        // p ≡ 2 (mod 3), чтобы d = 3 был обратим по модулю φ(n)
        if &candidate % 3u8 == BigUint::from(2u8) && test.is_probably_prime(&candidate, 10, rng) {
            return candidate;
        }
    }
}

quickcheck! {
    // для ключей с d = 3 и близкими по величине множителями атака
    // обязана разложить модуль; подходящая дробь k/3 гарантированно
    // встречается в разложении e/n
    fn prop_wiener_attack_detects_small_d(seed: u64) -> bool {
        let mut rng = StdRng::seed_from_u64(seed);

        let p = gen_prime_in_range(2048, 4096, &mut rng);
        let mut q;
        loop {
            q = gen_prime_in_range(2048, 4096, &mut rng);
            if q != p {
                break;
            }
        }

        let n = &p * &q;
        let phi = (&p - BigUint::one()) * (&q - BigUint::one());

        let d = BigUint::from(3u8);
        let phi_bigint = phi.to_bigint().unwrap();
        let (_, mut e_big, _) = extended_gcd(&d.to_bigint().unwrap(), &phi_bigint);
        e_big = ((e_big % &phi_bigint) + &phi_bigint) % &phi_bigint;
        let e = e_big.to_biguint().unwrap();

        match WienerAttack::attack(&e, &n, &mut rng) {
            Some(result) => &result.p * &result.q == n && (result.p == p || result.p == q),
            None => false,
        }
    }
}
