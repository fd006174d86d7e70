use crate::number_theory::{mod_pow, split_power_of_two};
use crate::primality::PrimalityTest;
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::RngCore;

/// Структура, реализующая тест Миллера–Рабина
pub struct MillerRabinTest;

impl PrimalityTest for MillerRabinTest {
    fn run_round(&self, n: &BigUint, rng: &mut dyn RngCore) -> bool {
        let one = BigUint::one();
        let two = BigUint::from(2u8);

        if *n <= two {
            return false;
        }

        let upper = n - &one;
        if two >= upper {
            return false; // защита от генерирования a ∈ [2, n-2], если диапазон пуст
        }

        // n - 1 = 2^r · d, d нечётное
        let (d, r) = split_power_of_two(&upper);
        if r == 0 {
            return false;
        }

        let a = rng.gen_biguint_range(&two, &upper);
        let mut x = mod_pow(&a, &d, n);

        if x == one || x == upper {
            return true;
        }

        for _ in 0..r - 1 {
            x = mod_pow(&x, &two, n);

            if x == upper {
                return true;
            }

            if x == one {
                return false;
            }
        }

        false
    }
}
