use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = a % &b;
        a = b;
        b = r;
    }
    a
}

/// Возвращает (g, x, y) такие что: ax + by = g = gcd(a, b)
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;

        let tmp_r = old_r - &q * &r;
        old_r = r;
        r = tmp_r;

        let tmp_s = old_s - &q * &s;
        old_s = s;
        s = tmp_s;

        let tmp_t = old_t - &q * &t;
        old_t = t;
        t = tmp_t;
    }

    (old_r, old_s, old_t)
}

/// Возведение в степень по модулю: base^exp mod modulus
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_zero() {
        return BigUint::zero();
    }
    let mut base = base.clone() % modulus;
    let mut exp = exponent.clone();
    let mut result = BigUint::one();

    while !exp.is_zero() {
        if &exp % 2u8 == BigUint::one() {
            result = (result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }
    result
}

/// Разложение t = odd · 2^u, odd — нечётное. Для t = 0 возвращает (0, 0).
pub fn split_power_of_two(t: &BigUint) -> (BigUint, u32) {
    if t.is_zero() {
        return (BigUint::zero(), 0);
    }
    let mut odd = t.clone();
    let mut u = 0u32;
    while &odd % 2u8 == BigUint::zero() {
        odd >>= 1;
        u += 1;
    }
    (odd, u)
}
