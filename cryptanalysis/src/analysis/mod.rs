pub mod differential;
pub mod kasiski;

pub use differential::{DifferentialAnalysis, DifferentialReport, DifferentialStrength};
pub use kasiski::{KasiskiExamination, KasiskiReport, RepeatedSequence};
