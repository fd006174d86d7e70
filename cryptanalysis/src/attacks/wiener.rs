use crate::attacks::continued_fraction::ContinuedFraction;
use crate::attacks::factorization::FactorRecovery;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::RngCore;

/// Результат атаки Винера: множители модуля и восстановленный
/// секретный показатель.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WienerAttackResult {
    pub p: BigUint,
    pub q: BigUint,
    pub d: BigUint,
}

/// Атака Винера на RSA с малым секретным показателем.
pub struct WienerAttack;

impl WienerAttack {
    /// Кандидаты (k, d) берутся из подходящих дробей e/n, от короткой к
    /// длинной — порядок перебора из теоремы Винера (d < n^{1/4}/3
    /// гарантированно встречается в разложении). Первый кандидат, по
    /// которому FactorRecovery находит множители, побеждает; дальше
    /// перебор не продолжается.
    pub fn attack(e: &BigUint, n: &BigUint, rng: &mut dyn RngCore) -> Option<WienerAttackResult> {
        if e.is_zero() || n <= &BigUint::one() || e >= n {
            return None;
        }

        let one = BigUint::one();
        let expansion = ContinuedFraction::expand(e, n);

        for convergent in expansion.convergents() {
            let k = &convergent.p;
            let d = &convergent.q;

            if k.is_zero() {
                continue;
            }

            // для верного кандидата e·d − 1 = k·φ(n): деление обязано быть точным
            let ed_minus_1 = e * d - &one;
            if &ed_minus_1 % k != BigUint::zero() {
                continue;
            }

            let phi = &ed_minus_1 / k;
            if &phi >= n {
                continue;
            }

            log::debug!("wiener: trying candidate d = {}", d);
            if let Some((p, q)) = FactorRecovery::recover(n, e, d, rng) {
                log::info!("wiener: private exponent recovered, d = {}", d);
                return Some(WienerAttackResult {
                    p,
                    q,
                    d: d.clone(),
                });
            }
        }

        None
    }
}
