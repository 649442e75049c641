// src/core/tables.rs
use crate::core::types::SoundClass;

/// One sound-class slot of a consonant: a fixed phoneme, or a main/alternate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phoneme {
    Fixed(&'static str),
    Pair { main: &'static str, sub: &'static str },
}

/// All three realizations of a consonant grapheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsonantEntry {
    pub a: Phoneme,
    pub b: Phoneme,
    pub c: Phoneme,
}

impl ConsonantEntry {
    pub fn slot(&self, class: SoundClass) -> Phoneme {
        match class {
            SoundClass::A => self.a,
            SoundClass::B => self.b,
            SoundClass::C => self.c,
        }
    }
}

use Phoneme::{Fixed, Pair};

const fn entry(a: Phoneme, b: Phoneme, c: Phoneme) -> ConsonantEntry {
    ConsonantEntry { a, b, c }
}

pub const CONSONANTS: &[(&str, ConsonantEntry)] = &[
    ("p", entry(Fixed("b"), Fixed("p"), Fixed("m"))),
    ("t", entry(Pair { main: "d", sub: "d͡z" }, Pair { main: "t", sub: "t͡s" }, Fixed("k"))),
    ("f", entry(Fixed("v"), Fixed("f"), Fixed("f"))),
    ("s", entry(Fixed("z"), Fixed("s"), Fixed("ʃ"))),
    ("c", entry(Fixed("d͡ʒ"), Fixed("t͡ʃ"), Fixed("t͡ʃ"))),
    ("x", entry(Fixed("dv"), Fixed("dx"), Fixed("dz"))),
    ("m", entry(Fixed("m"), Fixed("nʲ"), Fixed("m"))),
    ("r", entry(Fixed("dr"), Fixed("r"), Fixed("r"))),
    ("l", entry(Fixed("l"), Fixed("l"), Pair { main: "ʎ", sub: "i" })),
    ("q", entry(Fixed("br"), Pair { main: "pr", sub: "lp" }, Fixed("p"))),
    ("š", entry(Fixed("ʒx"), Fixed("ʃx"), Fixed("ʒ"))),
    ("d", entry(Fixed("d͡z"), Pair { main: "d͡zn", sub: "nt͡s" }, Fixed("n"))),
    ("ĵ", entry(Fixed("zx"), Fixed("sx"), Fixed("x"))),
    ("g", entry(Fixed("gnʲ"), Fixed("nʲ"), Pair { main: "ŋ", sub: "n" })),
    ("y", entry(Fixed("j"), Fixed("w"), Fixed("ya"))),
    ("w", entry(Fixed("w"), Pair { main: "wi", sub: "y" }, Pair { main: "u", sub: "wa" })),
    ("n", entry(Fixed("n"), Fixed("n"), Fixed("~"))),
];

/// `úz` has a phoneme but is not in the tokenizer's digraph list, so it is never produced as a token.
pub const VOWELS: &[(&str, &str)] = &[
    ("a", "a"),
    ("ä", "æ"),
    ("e", "je:"),
    ("é", "e"),
    ("i", "i"),
    ("u", "u"),
    ("ú", "ju"),
    ("úz", "o"),
    ("o", "o"),
    ("ö", "oe"),
    ("ai", "je"),
    ("ia", "ia"),
    ("uy", "ui"),
    ("ey", "eu"),
    ("oy", "oi"),
];

pub const DIGRAPHS: &[(&str, &str)] = &[
    ("cr", "xr"),
    ("gn", "xnʲ"),
    ("gp", "bnʲ"),
    ("sc", "ʃk"),
    ("šc", "k"),
    ("šk", "sk"),
    ("st", "st͡s"),
    ("šn", "ʃn"),
    ("ck", "k"),
    ("yh", ":"),
];

/// Voicing assimilation maps. Only the phonemes listed here can take an override.
const TO_VOICED: &[(&str, &str)] = &[("ʃ", "ʒ")];
const TO_UNVOICED: &[(&str, &str)] = &[("ʒ", "ʃ")];

fn find<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    table.iter().find(|(k, _)| *k == key).map(|&(_, v)| v)
}

pub fn lookup_consonant(grapheme: &str) -> Option<ConsonantEntry> {
    find(CONSONANTS, grapheme)
}

pub fn lookup_vowel(grapheme: &str) -> Option<&'static str> {
    find(VOWELS, grapheme)
}

pub fn lookup_digraph(grapheme: &str) -> Option<&'static str> {
    find(DIGRAPHS, grapheme)
}

pub fn is_vowel(grapheme: &str) -> bool {
    lookup_vowel(grapheme).is_some()
}

pub fn to_voiced(phoneme: &str) -> Option<&'static str> {
    find(TO_VOICED, phoneme)
}

pub fn to_unvoiced(phoneme: &str) -> Option<&'static str> {
    find(TO_UNVOICED, phoneme)
}
