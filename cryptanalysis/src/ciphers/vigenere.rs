/// Шифр Виженера: текст и ключ приводятся к верхнему регистру,
/// не-буквы проходят без изменений и не сдвигают позицию ключа.
/// Ключ без букв оставляет текст без сдвига.
pub fn encrypt(text: &str, key: &str) -> String {
    let shifts: Vec<u8> = key
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase() as u8 - b'A')
        .collect();

    let normalized = text.to_uppercase();
    if shifts.is_empty() {
        return normalized;
    }

    let mut result = String::with_capacity(normalized.len());
    let mut j = 0usize;

    for c in normalized.chars() {
        if c.is_ascii_uppercase() {
            let shifted = (c as u8 - b'A' + shifts[j % shifts.len()]) % 26 + b'A';
            result.push(shifted as char);
            j += 1;
        } else {
            result.push(c);
        }
    }

    result
}
