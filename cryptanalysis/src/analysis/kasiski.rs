use num_integer::Integer;
use std::collections::BTreeMap;

const MIN_SEQUENCE_LEN: usize = 3;
const MAX_SEQUENCE_LEN: usize = 5;

/// Повторившаяся подстрока нормализованного шифртекста
/// и упорядоченные позиции её вхождений.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepeatedSequence {
    pub sequence: String,
    pub positions: Vec<usize>,
}

/// Отчёт экзамена Касиски.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KasiskiReport {
    pub repeats: Vec<RepeatedSequence>,
    pub distances: Vec<usize>,
    /// None — повторов не нашлось, оценка недоступна
    pub key_length: Option<usize>,
}

/// Оценка длины ключа шифра с повторяющимся ключом
/// по расстояниям между повторами подстрок.
pub struct KasiskiExamination;

impl KasiskiExamination {
    /// Нормализация: верхний регистр, только латинские буквы.
    pub fn normalize(ciphertext: &str) -> String {
        ciphertext
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }

    pub fn examine(ciphertext: &str) -> KasiskiReport {
        let normalized = Self::normalize(ciphertext);
        let chars: Vec<char> = normalized.chars().collect();

        // BTreeMap вместо HashMap ради детерминированного порядка отчёта
        let mut occurrences: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for length in MIN_SEQUENCE_LEN..=MAX_SEQUENCE_LEN {
            if chars.len() < length {
                break;
            }
            for start in 0..=chars.len() - length {
                let sequence: String = chars[start..start + length].iter().collect();
                occurrences.entry(sequence).or_default().push(start);
            }
        }

        let mut repeats = Vec::new();
        let mut distances = Vec::new();

        for (sequence, positions) in occurrences {
            if positions.len() < 2 {
                continue;
            }

            for i in 0..positions.len() - 1 {
                for j in i + 1..positions.len() {
                    let distance = positions[j] - positions[i];
                    // расстояние 1 — соседние вхождения, шум
                    if distance > 1 {
                        distances.push(distance);
                    }
                }
            }

            repeats.push(RepeatedSequence {
                sequence,
                positions,
            });
        }

        // НОД слева направо по всей коллекции расстояний
        let key_length = distances
            .split_first()
            .map(|(first, rest)| rest.iter().fold(*first, |acc, d| acc.gcd(d)));

        KasiskiReport {
            repeats,
            distances,
            key_length,
        }
    }
}
