use crate::analysis::{DifferentialAnalysis, DifferentialReport, KasiskiExamination, KasiskiReport};
use crate::attacks::{FactorRecovery, WienerAttack, WienerAttackResult};
use crate::ciphers;
use crate::key_exchange::{DhError, DhExchangeReport, DhParameters, DhSimulator, MitmExchangeReport};
use crate::primality::{MillerRabinTest, PrimalityTest, PrimalityVerdict};
use num_bigint::BigUint;
use rand::RngCore;
use thiserror::Error;

/// Число раундов Миллера–Рабина при проверке модуля обмена.
pub const DEFAULT_PRIMALITY_ROUNDS: u32 = 10;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ToolkitError {
    #[error(transparent)]
    KeyExchange(#[from] DhError),
}

/// Запрос презентационного слоя: по одному помеченному варианту на
/// компонент ядра. Аргументы уже разобраны и проверены снаружи.
#[derive(Clone, Debug)]
pub enum ToolkitRequest {
    Primality { n: BigUint, rounds: u32 },
    Wiener { e: BigUint, n: BigUint },
    FactorRecovery { n: BigUint, e: BigUint, d: BigUint },
    Kasiski { ciphertext: String },
    VigenereEncrypt { text: String, key: String },
    RsaEncrypt { message: String, e: BigUint, n: BigUint },
    DiffieHellman { p: BigUint, g: BigUint },
    Differential { left: Vec<u8>, right: Vec<u8> },
}

/// Структурированный результат; текстовый отчёт строит презентационный слой.
#[derive(Clone, Debug)]
pub enum ToolkitResponse {
    Primality(PrimalityVerdict),
    Wiener(Option<WienerAttackResult>),
    FactorRecovery(Option<(BigUint, BigUint)>),
    Kasiski(KasiskiReport),
    VigenereEncrypt(String),
    RsaEncrypt(Vec<BigUint>),
    DiffieHellman {
        exchange: DhExchangeReport,
        mitm: MitmExchangeReport,
    },
    Differential(DifferentialReport),
}

/// Диспетчеризация по помеченному варианту вместо сравнения строк.
/// Каждый вызов обращается ровно к одному компоненту.
pub fn dispatch(
    request: ToolkitRequest,
    rng: &mut dyn RngCore,
) -> Result<ToolkitResponse, ToolkitError> {
    match request {
        ToolkitRequest::Primality { n, rounds } => {
            log::info!("dispatch: primality test, {} rounds", rounds);
            Ok(ToolkitResponse::Primality(
                MillerRabinTest.verdict(&n, rounds, rng),
            ))
        }
        ToolkitRequest::Wiener { e, n } => {
            log::info!("dispatch: wiener attack");
            Ok(ToolkitResponse::Wiener(WienerAttack::attack(&e, &n, rng)))
        }
        ToolkitRequest::FactorRecovery { n, e, d } => {
            log::info!("dispatch: factor recovery");
            Ok(ToolkitResponse::FactorRecovery(FactorRecovery::recover(
                &n, &e, &d, rng,
            )))
        }
        ToolkitRequest::Kasiski { ciphertext } => {
            log::info!("dispatch: kasiski examination");
            Ok(ToolkitResponse::Kasiski(KasiskiExamination::examine(
                &ciphertext,
            )))
        }
        ToolkitRequest::VigenereEncrypt { text, key } => Ok(ToolkitResponse::VigenereEncrypt(
            ciphers::vigenere::encrypt(&text, &key),
        )),
        ToolkitRequest::RsaEncrypt { message, e, n } => Ok(ToolkitResponse::RsaEncrypt(
            ciphers::rsa::encrypt(&message, &e, &n),
        )),
        ToolkitRequest::DiffieHellman { p, g } => {
            log::info!("dispatch: diffie-hellman simulation");
            let params = DhParameters { p, g };
            let simulator = DhSimulator::new(MillerRabinTest, DEFAULT_PRIMALITY_ROUNDS);
            let exchange = simulator.simulate(&params, rng)?;
            let mitm = simulator.simulate_mitm(&params, rng)?;
            Ok(ToolkitResponse::DiffieHellman { exchange, mitm })
        }
        ToolkitRequest::Differential { left, right } => Ok(ToolkitResponse::Differential(
            DifferentialAnalysis::analyze(&left, &right),
        )),
    }
}
