//! Caesar shift cipher.
//!
//! ASCII letters are rotated within their own case; everything else passes
//! through untouched. Shifts are reduced with Euclidean remainder, so negative
//! and oversized shifts behave like their canonical `0..26` counterpart.

use serde::{Deserialize, Serialize};

const ALPHABET_LEN: i32 = 26;

/// Which way to rotate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Encode,
    Decode,
}

/// Default settings for the cipher driver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherConfig {
    /// Shift used when none is given explicitly.
    pub shift: i32,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self { shift: 3 }
    }
}

/// Rotate every ASCII letter of `msg` by `shift` in the given direction.
pub fn caesar(msg: &str, shift: i32, direction: Direction) -> String {
    let forward = shift.rem_euclid(ALPHABET_LEN);
    let effective = match direction {
        Direction::Encode => forward,
        Direction::Decode => (ALPHABET_LEN - forward) % ALPHABET_LEN,
    };
    // `effective` is in `0..26`.
    let effective = effective as u8;
    msg.chars().map(|ch| rotate(ch, effective)).collect()
}

/// Encode `msg` with the given shift.
pub fn encode(msg: &str, shift: i32) -> String {
    caesar(msg, shift, Direction::Encode)
}

/// Decode `msg` that was encoded with the given shift.
pub fn decode(msg: &str, shift: i32) -> String {
    caesar(msg, shift, Direction::Decode)
}

fn rotate(ch: char, shift: u8) -> char {
    let base = match ch {
        'A'..='Z' => b'A',
        'a'..='z' => b'a',
        _ => return ch,
    };
    let offset = ch as u8 - base;
    char::from(base + (offset + shift) % ALPHABET_LEN as u8)
}
