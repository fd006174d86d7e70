pub(crate) mod miller_rabin;
pub use miller_rabin::MillerRabinTest;

use num_bigint::BigUint;
use num_traits::One;
use rand::RngCore;

/// Вердикт теста простоты с числом фактически выполненных раундов.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrimalityVerdict {
    Prime { rounds: u32 },
    Composite { rounds: u32 },
}

impl PrimalityVerdict {
    pub fn is_prime(&self) -> bool {
        matches!(self, PrimalityVerdict::Prime { .. })
    }
}

/// Интерфейс для вероятностного теста простоты.
/// Использует шаблонный метод: фиксированный public API, переопределяется один раунд.
/// Источник случайности передаётся явно, чтобы тесты могли подставить
/// детерминированную последовательность.
pub trait PrimalityTest {
    /// Один раунд со случайным свидетелем — реализуется в подклассах.
    /// false означает, что n точно составное.
    fn run_round(&self, n: &BigUint, rng: &mut dyn RngCore) -> bool;

    /// Основной метод: true, если n — вероятно простое после rounds раундов.
    /// Вероятность ложного срабатывания не превышает 4^(-rounds).
    fn is_probably_prime(&self, n: &BigUint, rounds: u32, rng: &mut dyn RngCore) -> bool {
        self.verdict(n, rounds, rng).is_prime()
    }

    /// То же, но с числом раундов, которое потребовалось для ответа.
    fn verdict(&self, n: &BigUint, rounds: u32, rng: &mut dyn RngCore) -> PrimalityVerdict {
        let two = BigUint::from(2u8);
        let three = BigUint::from(3u8);

        if *n <= BigUint::one() {
            return PrimalityVerdict::Composite { rounds: 0 };
        }
        if *n == two || *n == three {
            return PrimalityVerdict::Prime { rounds: 0 };
        }
        if !n.bit(0) {
            return PrimalityVerdict::Composite { rounds: 0 };
        }

        for i in 0..rounds {
            if !self.run_round(n, rng) {
                return PrimalityVerdict::Composite { rounds: i + 1 };
            }
        }
        PrimalityVerdict::Prime { rounds }
    }
}
