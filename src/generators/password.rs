// src/generators/password.rs
use lazy_static::lazy_static;
use rand::{seq::SliceRandom, Rng};

use crate::models::{ClassRange, PasswordGenerationOptions};

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Punctuation that never appears in a generated password.
pub const EXCLUDED_PUNCTUATION: &str = "(){}[]|~ ,'=+-";

lazy_static! {
    static ref LOWERCASE_CHARS: Vec<char> = LOWERCASE.chars().collect();
    static ref UPPERCASE_CHARS: Vec<char> = UPPERCASE.chars().collect();
    static ref DIGIT_CHARS: Vec<char> = DIGITS.chars().collect();
    static ref PUNCTUATION_CHARS: Vec<char> = ASCII_PUNCTUATION
        .chars()
        .filter(|c| !EXCLUDED_PUNCTUATION.contains(*c))
        .collect();
}

/// The fixed character classes a password is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Punctuation,
    Digit,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Punctuation,
        CharacterClass::Digit,
    ];

    pub fn chars(self) -> &'static [char] {
        match self {
            CharacterClass::Lowercase => LOWERCASE_CHARS.as_slice(),
            CharacterClass::Uppercase => UPPERCASE_CHARS.as_slice(),
            CharacterClass::Punctuation => PUNCTUATION_CHARS.as_slice(),
            CharacterClass::Digit => DIGIT_CHARS.as_slice(),
        }
    }

    #[cfg(test)]
    pub fn contains(self, c: char) -> bool {
        self.chars().contains(&c)
    }

    fn range(self, options: &PasswordGenerationOptions) -> ClassRange {
        match self {
            CharacterClass::Lowercase => options.lowercase,
            CharacterClass::Uppercase => options.uppercase,
            CharacterClass::Punctuation => options.punctuation,
            CharacterClass::Digit => options.digits,
        }
    }
}

pub struct PasswordGenerator {
    options: PasswordGenerationOptions,
}

impl PasswordGenerator {
    pub fn new(options: PasswordGenerationOptions) -> Self {
        PasswordGenerator { options }
    }

    pub fn generate(&self) -> String {
        self.generate_with(&mut rand::thread_rng())
    }

    // Classes are appended in a fixed order; the shuffle breaks the grouping.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let mut chars = Vec::with_capacity(self.options.max_length());

        for class in CharacterClass::ALL {
            let range = class.range(&self.options);
            let count = rng.gen_range(range.min..=range.max.max(range.min));
            let pool = class.chars();
            for _ in 0..count {
                if let Some(c) = pool.choose(&mut *rng) {
                    chars.push(*c);
                }
            }
        }

        if self.options.shuffle {
            chars.shuffle(&mut *rng);
        }

        chars.into_iter().collect()
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new(PasswordGenerationOptions::default())
    }
}
