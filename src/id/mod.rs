//! # ID Generation
//!
//! Generates identifiers for newly reported items and newly seen users.
//! Default pattern: `%y%m%d-%T%RRR` (e.g., `260109-02F7K9M`)
//!
//! ## Tokens
//! - `%y`, `%m`, `%d`: Year, Month, Day (2 digits)
//! - `%j`: Day of year (001-366)
//! - `%T`: Base32 time (4 chars, seconds since midnight UTC)
//! - `%R`: Base32 random (count of R determines length)
//! - `%%`: Literal percent sign
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod base32;

use chrono::{DateTime, Datelike, Timelike, Utc};
use rand::Rng;

pub use crate::constants::DEFAULT_ID_PATTERN;
use crate::constants::ID_GENERATION_ATTEMPTS;

/// A parsed pattern element.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(char),
    Year,
    Month,
    Day,
    DayOfYear,
    Time,
    Random(usize),
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            tokens.push(Token::Literal(c));
            continue;
        }
        match chars.next() {
            Some('y') => tokens.push(Token::Year),
            Some('m') => tokens.push(Token::Month),
            Some('d') => tokens.push(Token::Day),
            Some('j') => tokens.push(Token::DayOfYear),
            Some('T') => tokens.push(Token::Time),
            Some('R') => {
                let mut count = 1;
                while chars.next_if_eq(&'R').is_some() {
                    count += 1;
                }
                tokens.push(Token::Random(count));
            }
            Some('%') | None => tokens.push(Token::Literal('%')),
            Some(other) => {
                tokens.push(Token::Literal('%'));
                tokens.push(Token::Literal(other));
            }
        }
    }

    tokens
}

/// Expands `pattern` at the given instant.
pub fn generate_at(pattern: &str, now: DateTime<Utc>) -> String {
    let mut rng = rand::rng();
    let mut id = String::with_capacity(pattern.len() + 8);

    for token in tokenize(pattern) {
        match token {
            Token::Literal(c) => id.push(c),
            Token::Year => id.push_str(&format!("{:02}", now.year() % 100)),
            Token::Month => id.push_str(&format!("{:02}", now.month())),
            Token::Day => id.push_str(&format!("{:02}", now.day())),
            Token::DayOfYear => id.push_str(&format!("{:03}", now.ordinal())),
            Token::Time => {
                let seconds = u64::from(now.num_seconds_from_midnight());
                id.push_str(&base32::encode_fixed(seconds, 4));
            }
            Token::Random(count) => {
                for _ in 0..count {
                    id.push(base32::digit(rng.random::<u64>()));
                }
            }
        }
    }

    id
}

/// Expands `pattern` at the current instant.
pub fn generate(pattern: &str) -> String {
    generate_at(pattern, Utc::now())
}

/// Whether `pattern` contains a `%R` run.
pub fn has_random(pattern: &str) -> bool {
    let tokens = tokenize(pattern);
    tokens.iter().any(|t| matches!(t, Token::Random(_)))
}

/// Expands `pattern` until `is_taken` rejects nothing.
///
/// After [`ID_GENERATION_ATTEMPTS`] taken draws, `-2`, `-3`, ... is appended
/// to the last draw until the ID is free, so this always terminates for a
/// finite set of taken IDs.
pub fn generate_unique(
    pattern: &str,
    now: DateTime<Utc>,
    is_taken: impl Fn(&str) -> bool,
) -> String {
    let mut candidate = generate_at(pattern, now);
    for _ in 1..ID_GENERATION_ATTEMPTS {
        if !is_taken(&candidate) {
            return candidate;
        }
        candidate = generate_at(pattern, now);
    }
    if !is_taken(&candidate) {
        return candidate;
    }

    let mut suffix = 2;
    loop {
        let suffixed = format!("{candidate}-{suffix}");
        if !is_taken(&suffixed) {
            return suffixed;
        }
        suffix += 1;
    }
}
