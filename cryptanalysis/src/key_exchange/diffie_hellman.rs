use crate::primality::PrimalityTest;
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::RngCore;
use thiserror::Error;

/// Ошибки валидации параметров обмена.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DhError {
    #[error("modulus failed the primality test")]
    NotPrime,
    #[error("generator must lie strictly between 1 and p")]
    InvalidGenerator,
}

/// Общие параметры обмена: модуль p и генератор g.
#[derive(Clone, Debug)]
pub struct DhParameters {
    pub p: BigUint,
    pub g: BigUint,
}

/// Закрытый показатель и открытое значение одной стороны.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPair {
    pub private_key: BigUint,
    pub public_key: BigUint,
}

/// Отчёт честного обмена. Секреты сторон обязаны совпадать.
#[derive(Clone, Debug)]
pub struct DhExchangeReport {
    pub alice: KeyPair,
    pub bob: KeyPair,
    pub alice_secret: BigUint,
    pub bob_secret: BigUint,
}

impl DhExchangeReport {
    pub fn secrets_match(&self) -> bool {
        self.alice_secret == self.bob_secret
    }
}

/// Отчёт обмена с активным посредником: пара ключей посредника на каждую
/// сторону и четыре парных секрета. Секреты внутри каждой пары совпадают,
/// а настоящий секрет Алисы и Боба в общем случае отличается от обоих.
#[derive(Clone, Debug)]
pub struct MitmExchangeReport {
    pub alice: KeyPair,
    pub bob: KeyPair,
    /// M1 = g^m1 — подменяет открытое значение Алисы для Боба
    pub mallory_to_bob: KeyPair,
    /// M2 = g^m2 — подменяет открытое значение Боба для Алисы
    pub mallory_to_alice: KeyPair,
    pub alice_mallory_secret: BigUint,
    pub mallory_alice_secret: BigUint,
    pub bob_mallory_secret: BigUint,
    pub mallory_bob_secret: BigUint,
    /// секрет, который получился бы без вмешательства
    pub true_secret: BigUint,
}

impl MitmExchangeReport {
    pub fn alice_side_matches(&self) -> bool {
        self.alice_mallory_secret == self.mallory_alice_secret
    }

    pub fn bob_side_matches(&self) -> bool {
        self.bob_mallory_secret == self.mallory_bob_secret
    }
}

/// Симулятор обмена Диффи–Хеллмана поверх инжектированного теста простоты.
pub struct DhSimulator<T: PrimalityTest> {
    test: T,
    rounds: u32,
}

impl<T: PrimalityTest> DhSimulator<T> {
    pub fn new(test: T, rounds: u32) -> Self {
        Self { test, rounds }
    }

    /// Проверка параметров: p проходит тест простоты, 1 < g < p.
    pub fn validate(&self, params: &DhParameters, rng: &mut dyn RngCore) -> Result<(), DhError> {
        if !self.test.is_probably_prime(&params.p, self.rounds, rng) {
            return Err(DhError::NotPrime);
        }
        if params.g <= BigUint::one() || params.g >= params.p {
            return Err(DhError::InvalidGenerator);
        }
        Ok(())
    }

    /// Честный обмен: оба секрета считаются независимо.
    pub fn simulate(
        &self,
        params: &DhParameters,
        rng: &mut dyn RngCore,
    ) -> Result<DhExchangeReport, DhError> {
        self.validate(params, rng)?;

        let alice = generate_keypair(params, rng);
        let bob = generate_keypair(params, rng);

        let alice_secret = bob.public_key.modpow(&alice.private_key, &params.p);
        let bob_secret = alice.public_key.modpow(&bob.private_key, &params.p);
        debug_assert_eq!(alice_secret, bob_secret);

        Ok(DhExchangeReport {
            alice,
            bob,
            alice_secret,
            bob_secret,
        })
    }

    /// Обмен с активным посредником поверх тех же параметров.
    pub fn simulate_mitm(
        &self,
        params: &DhParameters,
        rng: &mut dyn RngCore,
    ) -> Result<MitmExchangeReport, DhError> {
        self.validate(params, rng)?;

        let alice = generate_keypair(params, rng);
        let bob = generate_keypair(params, rng);
        let mallory_to_bob = generate_keypair(params, rng);
        let mallory_to_alice = generate_keypair(params, rng);

        // Алиса получила M2 вместо B, Боб — M1 вместо A
        let alice_mallory_secret = mallory_to_alice
            .public_key
            .modpow(&alice.private_key, &params.p);
        let mallory_alice_secret = alice
            .public_key
            .modpow(&mallory_to_alice.private_key, &params.p);
        let bob_mallory_secret = mallory_to_bob
            .public_key
            .modpow(&bob.private_key, &params.p);
        let mallory_bob_secret = bob
            .public_key
            .modpow(&mallory_to_bob.private_key, &params.p);

        let true_secret = bob.public_key.modpow(&alice.private_key, &params.p);

        log::info!(
            "mitm: alice side matched = {}, bob side matched = {}",
            alice_mallory_secret == mallory_alice_secret,
            bob_mallory_secret == mallory_bob_secret
        );

        Ok(MitmExchangeReport {
            alice,
            bob,
            mallory_to_bob,
            mallory_to_alice,
            alice_mallory_secret,
            mallory_alice_secret,
            bob_mallory_secret,
            mallory_bob_secret,
            true_secret,
        })
    }
}

/// Закрытый показатель из [2, p−2]: равномерная выборка ниже p−1,
/// значения ≤ 1 поднимаются до 2.
fn sample_private_exponent(p: &BigUint, rng: &mut dyn RngCore) -> BigUint {
    let one = BigUint::one();
    let x = rng.gen_biguint_below(&(p - &one));
    if x <= one { BigUint::from(2u8) } else { x }
}

fn generate_keypair(params: &DhParameters, rng: &mut dyn RngCore) -> KeyPair {
    let private_key = sample_private_exponent(&params.p, rng);
    let public_key = params.g.modpow(&private_key, &params.p);
    KeyPair {
        private_key,
        public_key,
    }
}
