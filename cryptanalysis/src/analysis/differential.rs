/// Пороговые константы классификации — фиксированные, не выводятся.
const MEDIUM_THRESHOLD: u32 = 4;
const HIGH_THRESHOLD: u32 = 10;

/// Сила дифференциала по суммарному числу различающихся битов.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DifferentialStrength {
    Low,
    Medium,
    High,
}

/// Отчёт XOR-сравнения пары байтовых строк.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DifferentialReport {
    pub xor_bytes: Vec<u8>,
    pub bit_counts: Vec<u32>,
    pub total_bit_differences: u32,
    pub strength: DifferentialStrength,
}

pub struct DifferentialAnalysis;

impl DifferentialAnalysis {
    /// Позиционное сравнение до длины более короткого входа:
    /// XOR-байт и число установленных битов в нём на каждую позицию.
    pub fn analyze(a: &[u8], b: &[u8]) -> DifferentialReport {
        let xor_bytes: Vec<u8> = a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect();
        let bit_counts: Vec<u32> = xor_bytes.iter().map(|x| x.count_ones()).collect();
        let total_bit_differences: u32 = bit_counts.iter().sum();

        let strength = if total_bit_differences < MEDIUM_THRESHOLD {
            DifferentialStrength::Low
        } else if total_bit_differences < HIGH_THRESHOLD {
            DifferentialStrength::Medium
        } else {
            DifferentialStrength::High
        };

        DifferentialReport {
            xor_bytes,
            bit_counts,
            total_bit_differences,
            strength,
        }
    }
}
