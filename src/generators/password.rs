// src/generators/password.rs
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_core::{CryptoRng, RngCore};
use thiserror::Error;
use zeroize::Zeroizing;

use crate::models::{CharClass, GenerationPolicy};

/// Whole-password redraws before falling back to placing required classes.
pub const MAX_REJECTION_ATTEMPTS: usize = 1000;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{}|;:,.<>?";

// Same sets without look-alikes (l, I, O, 0, 1)
const LOWERCASE_CLEAR: &[u8] = b"abcdefghijkmnopqrstuvwxyz";
const UPPERCASE_CLEAR: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ";
const DIGITS_CLEAR: &[u8] = b"23456789";

/// Every variant is an invalid policy; generation itself cannot fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Password length must be at least 1")]
    ZeroLength,

    #[error("At least one character type must be included")]
    NoClasses,

    #[error("Password length {length} is too short to include all {required} selected character types")]
    TooShort { length: usize, required: usize },

    #[error("Password length must be at most {max} characters")]
    TooLong { length: usize, max: usize },
}

pub fn class_pool(class: CharClass, exclude_similar: bool) -> &'static [u8] {
    match (class, exclude_similar) {
        (CharClass::Lower, false) => LOWERCASE,
        (CharClass::Lower, true) => LOWERCASE_CLEAR,
        (CharClass::Upper, false) => UPPERCASE,
        (CharClass::Upper, true) => UPPERCASE_CLEAR,
        (CharClass::Digit, false) => DIGITS,
        (CharClass::Digit, true) => DIGITS_CLEAR,
        (CharClass::Symbol, _) => SYMBOLS,
    }
}

pub struct PasswordGenerator {
    max_length: usize,
}

impl PasswordGenerator {
    pub fn new(max_length: usize) -> Self {
        PasswordGenerator { max_length }
    }

    /// Checks the policy and returns the enabled classes.
    pub fn validate(&self, policy: &GenerationPolicy) -> Result<Vec<CharClass>, GenerationError> {
        let classes = policy.classes();
        if classes.is_empty() {
            return Err(GenerationError::NoClasses);
        }
        if policy.length == 0 {
            return Err(GenerationError::ZeroLength);
        }
        if policy.length < classes.len() {
            return Err(GenerationError::TooShort {
                length: policy.length,
                required: classes.len(),
            });
        }
        if policy.length > self.max_length {
            return Err(GenerationError::TooLong {
                length: policy.length,
                max: self.max_length,
            });
        }
        Ok(classes)
    }

    /// Generate a password from the operating system's CSPRNG.
    pub fn generate_password(&self, policy: &GenerationPolicy) -> Result<String, GenerationError> {
        self.generate_with(policy, &mut OsRng)
    }

    /// Draws every character uniformly from the combined pool and redraws
    /// the whole password until each enabled class appears, which keeps the
    /// result uniform over all passwords that satisfy the policy.
    pub fn generate_with<R>(&self, policy: &GenerationPolicy, rng: &mut R) -> Result<String, GenerationError>
    where
        R: RngCore + CryptoRng,
    {
        let classes = self.validate(policy)?;
        let pools: Vec<&'static [u8]> = classes
            .iter()
            .map(|c| class_pool(*c, policy.exclude_similar))
            .collect();
        let pool: Vec<u8> = pools.concat();

        for _ in 0..MAX_REJECTION_ATTEMPTS {
            let candidate: Zeroizing<Vec<u8>> = Zeroizing::new(
                (0..policy.length)
                    .map(|_| pool[rng.gen_range(0..pool.len())])
                    .collect(),
            );
            if covers_all(&candidate, &pools) {
                return Ok(to_string(&candidate));
            }
        }

        log::debug!("Rejection sampling exhausted, placing required classes directly");
        Ok(to_string(&place_required(policy.length, &pools, &pool, rng)))
    }
}

fn covers_all(candidate: &[u8], pools: &[&[u8]]) -> bool {
    pools
        .iter()
        .all(|p| candidate.iter().any(|b| p.contains(b)))
}

/// One character from each class, the rest from the full pool, shuffled.
fn place_required<R>(length: usize, pools: &[&[u8]], pool: &[u8], rng: &mut R) -> Zeroizing<Vec<u8>>
where
    R: RngCore + CryptoRng,
{
    let mut chars: Zeroizing<Vec<u8>> = Zeroizing::new(Vec::with_capacity(length));
    for p in pools {
        chars.push(p[rng.gen_range(0..p.len())]);
    }
    while chars.len() < length {
        chars.push(pool[rng.gen_range(0..pool.len())]);
    }
    chars.shuffle(rng);
    chars
}

fn to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| *b as char).collect()
}
