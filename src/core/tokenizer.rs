// src/core/tokenizer.rs
use crate::core::types::Token;

/// Multi-letter graphemes, highest priority first. Each one claims every
/// non-overlapping occurrence among the characters earlier entries left unclaimed.
pub const DIGRAPH_PRIORITY: &[&str] = &[
    "cr", "gn", "gp", "sc", "šc", "šk", "st", "šn", "ck", "ai", "ia", "uy", "ey", "oy", "yh",
];

/// Splits a word into grapheme tokens. Never fails: anything that is not part
/// of a digraph becomes a single-character token.
pub fn tokenize(word: &str) -> Vec<Token> {
    let chars: Vec<char> = word.chars().collect();
    let mut claimed = vec![false; chars.len()];
    // Length of the digraph starting at each position, if any.
    let mut span_at: Vec<Option<usize>> = vec![None; chars.len()];

    for digraph in DIGRAPH_PRIORITY {
        let pattern: Vec<char> = digraph.chars().collect();
        let n = pattern.len();
        let mut i = 0;
        while i + n <= chars.len() {
            if chars[i..i + n] == pattern[..] && claimed[i..i + n].iter().all(|&c| !c) {
                claimed[i..i + n].fill(true);
                span_at[i] = Some(n);
                i += n;
            } else {
                i += 1;
            }
        }
    }

    let mut tokens = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let n = span_at[i].unwrap_or(1);
        tokens.push(chars[i..i + n].iter().collect());
        i += n;
    }
    tokens
}
