pub mod diffie_hellman;

pub use diffie_hellman::{
    DhError, DhExchangeReport, DhParameters, DhSimulator, KeyPair, MitmExchangeReport,
};
