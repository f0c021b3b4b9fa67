use itertools::Itertools;
use rand::Rng;
use std::ops::RangeInclusive;

use crate::puns::sample_without_replacement;

/// Symbols a party line is built from
pub const PARTY_EMOJIS: [&str; 22] = [
    "🎉", "🎊", "🎈", "🎂", "🍰", "🎁", "🎪", "🎭", "🎨", "🎯", "🎲", "🎮", "🎸", "🎹", "🎺", "🎻",
    "🎤", "🎧", "🎵", "🎶", "⚡", "🦀",
];

/// How many lines a party prints
pub const PARTY_LINES: RangeInclusive<usize> = 50..=200;

/// How many symbols go on one line
pub const SYMBOLS_PER_LINE: RangeInclusive<usize> = 5..=15;

/// One line of distinct party symbols separated by spaces
pub fn party_line<R: Rng + ?Sized>(rng: &mut R) -> String {
    let width = rng.gen_range(SYMBOLS_PER_LINE);
    sample_without_replacement(&PARTY_EMOJIS, width, rng)
        .into_iter()
        .join(" ")
}

/// A whole party: a random number of party lines
pub fn party<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let lines = rng.gen_range(PARTY_LINES);
    tracing::debug!("throwing a party of {} lines", lines);
    (0..lines).map(|_| party_line(rng)).collect()
}
