pub mod continued_fraction;
pub mod factorization;
pub mod wiener;

pub use continued_fraction::{ContinuedFraction, Convergent};
pub use factorization::FactorRecovery;
pub use wiener::{WienerAttack, WienerAttackResult};
