use cryptanalysis::analysis::{DifferentialAnalysis, KasiskiExamination};
use cryptanalysis::attacks::WienerAttack;
use cryptanalysis::ciphers::vigenere;
use cryptanalysis::key_exchange::{DhParameters, DhSimulator};
use cryptanalysis::primality::{MillerRabinTest, PrimalityTest};
use num_bigint::BigUint;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    env_logger::init();

    // детерминированный источник случайности ради воспроизводимого отчёта
    let mut rng = StdRng::seed_from_u64(0xC0DE);

    // 1) Тест Миллера–Рабина
    let n = BigUint::from(32416190071u64);
    let test = MillerRabinTest;
    println!(
        "{} is {}",
        n,
        if test.is_probably_prime(&n, 10, &mut rng) {
            "probably prime"
        } else {
            "composite"
        }
    );

    // 2) Атака Винера на уязвимый ключ (n = 239 · 379, d = 5)
    let e = BigUint::from(17993u32);
    let n = BigUint::from(90581u32);
    match WienerAttack::attack(&e, &n, &mut rng) {
        Some(result) => {
            println!("Wiener's Attack Success!");
            println!("  p = {}\n  q = {}\n  d = {}", result.p, result.q, result.d);
        }
        None => println!("Wiener's Attack Failed. The key might not be vulnerable."),
    }

    // 3) Виженер + экзамен Касиски
    let ciphertext = vigenere::encrypt("ABCDEFGHIABCJKLMNOPQRABC", "KEY");
    println!("Vigenere ciphertext: {}", ciphertext);

    let report = KasiskiExamination::examine(&ciphertext);
    for repeat in &report.repeats {
        println!(
            "Sequence '{}' found at positions: {:?}",
            repeat.sequence, repeat.positions
        );
    }
    match report.key_length {
        Some(length) => println!("Estimated key length: {}", length),
        None => println!("No repeated sequences found for Kasiski examination."),
    }

    // 4) Диффи–Хеллман: честный обмен и активный посредник
    let params = DhParameters {
        p: BigUint::from(2147483647u64),
        g: BigUint::from(5u8),
    };
    let simulator = DhSimulator::new(MillerRabinTest, 10);

    let exchange = simulator.simulate(&params, &mut rng).expect("valid params");
    println!(
        "DH shared secret: {} (secrets match: {})",
        exchange.alice_secret,
        exchange.secrets_match()
    );

    let mitm = simulator
        .simulate_mitm(&params, &mut rng)
        .expect("valid params");
    println!(
        "MITM: alice side matches: {}, bob side matches: {}, true secret intact: {}",
        mitm.alice_side_matches(),
        mitm.bob_side_matches(),
        mitm.alice_mallory_secret == mitm.true_secret
    );

    // 5) XOR-дифференциал пары открытых текстов
    let report = DifferentialAnalysis::analyze(b"CRYPTOGRAPHY", b"CRYPTOGRAPHY");
    println!(
        "Differential (identical inputs): {} bit differences, strength {:?}",
        report.total_bit_differences, report.strength
    );

    let report = DifferentialAnalysis::analyze(b"CRYPTOGRAPHY", b"CRYPTOGRAPHX");
    println!(
        "Differential (one byte changed): {} bit differences, strength {:?}",
        report.total_bit_differences, report.strength
    );
}
