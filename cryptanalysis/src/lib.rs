pub mod analysis;
pub mod attacks;
pub mod ciphers;
pub mod key_exchange;
pub mod number_theory;
pub mod primality;
pub mod toolkit;

pub use analysis::{DifferentialAnalysis, DifferentialReport, KasiskiExamination, KasiskiReport};
pub use attacks::{ContinuedFraction, Convergent, FactorRecovery, WienerAttack, WienerAttackResult};
pub use key_exchange::{DhError, DhParameters, DhSimulator};
pub use primality::{MillerRabinTest, PrimalityTest, PrimalityVerdict};
pub use toolkit::{ToolkitError, ToolkitRequest, ToolkitResponse};
