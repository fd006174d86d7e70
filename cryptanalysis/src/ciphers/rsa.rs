use num_bigint::BigUint;

/// Посимвольное RSA-шифрование: c_i = m_i^e mod n, где m_i — код символа.
/// Генерация ключей за пределами ядра.
pub fn encrypt(message: &str, e: &BigUint, n: &BigUint) -> Vec<BigUint> {
    message
        .chars()
        .map(|c| BigUint::from(c as u32).modpow(e, n))
        .collect()
}
