use crate::number_theory::{gcd, mod_pow, split_power_of_two};
use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::RngCore;

/// Число случайных оснований, после которого поиск прекращается.
const MAX_TRIALS: u32 = 100;

/// Вероятностное восстановление простых множителей модуля n
/// по согласованной паре показателей (e, d).
pub struct FactorRecovery;

impl FactorRecovery {
    /// Возвращает (p, q) с p·q = n, либо None после MAX_TRIALS попыток.
    /// Отрицательный ответ не опровергает d — неудача ограниченного
    /// поиска является штатным исходом.
    pub fn recover(
        n: &BigUint,
        e: &BigUint,
        d: &BigUint,
        rng: &mut dyn RngCore,
    ) -> Option<(BigUint, BigUint)> {
        let one = BigUint::one();
        let two = BigUint::from(2u8);

        if e.is_zero() || d.is_zero() || *n <= two {
            return None;
        }

        // алгоритму требуется чётное e·d − 1
        let t = e * d - &one;
        if t.is_zero() || t.bit(0) {
            return None;
        }

        // t = s · 2^u, s нечётное
        let (s, _u) = split_power_of_two(&t);
        let upper = n - &one;

        for _ in 0..MAX_TRIALS {
            let g = rng.gen_biguint_range(&two, n);
            let y = mod_pow(&g, &s, n);

            if y <= one || y == upper {
                continue;
            }

            let p = gcd(&(&y - &one), n);
            if p > one && &p < n {
                let q = n / &p;
                log::debug!("factor recovery: nontrivial gcd {}", p);
                return Some((p, q));
            }
        }

        None
    }
}
