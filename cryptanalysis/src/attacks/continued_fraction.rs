use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::mem;

/// Подходящая дробь p/q разложения в цепную дробь.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Convergent {
    pub p: BigUint,
    pub q: BigUint,
}

impl Convergent {
    /// Целая часть p/q — когда алгоритму нужен один целый кандидат.
    pub fn truncate(&self) -> BigUint {
        &self.p / &self.q
    }
}

/// Разложение рационального числа в цепную дробь алгоритмом Евклида.
pub struct ContinuedFraction {
    quotients: Vec<BigUint>,
}

impl ContinuedFraction {
    /// Частные a_0, a_1, …, a_m для numerator/denominator; разложение конечно
    /// и завершается, когда остаток обращается в ноль.
    pub fn expand(numerator: &BigUint, denominator: &BigUint) -> Self {
        let mut num = numerator.clone();
        let mut den = denominator.clone();
        let mut quotients = Vec::new();

        while !den.is_zero() {
            let q = &num / &den;
            let r = &num % &den;
            quotients.push(q);
            num = den;
            den = r;
        }

        Self { quotients }
    }

    pub fn quotients(&self) -> &[BigUint] {
        &self.quotients
    }

    /// Подходящие дроби по рекуррентности
    /// p_i = a_i·p_{i-1} + p_{i-2}, q_i = a_i·q_{i-1} + q_{i-2}
    /// с затравкой p_{-1} = 1, q_{-1} = 0, p_0 = a_0, q_0 = 1.
    /// Знаменатель q_i никогда не ноль.
    pub fn convergents(&self) -> Vec<Convergent> {
        let mut result = Vec::with_capacity(self.quotients.len());

        let (mut prev_p, mut p) = (BigUint::zero(), BigUint::one());
        let (mut prev_q, mut q) = (BigUint::one(), BigUint::zero());

        for a in &self.quotients {
            let next_p = a * &p + &prev_p;
            let next_q = a * &q + &prev_q;
            prev_p = mem::replace(&mut p, next_p);
            prev_q = mem::replace(&mut q, next_q);

            result.push(Convergent {
                p: p.clone(),
                q: q.clone(),
            });
        }

        result
    }
}
