// src/core/resolver.rs
use tracing::debug;

use crate::core::tables::{is_vowel, lookup_consonant, lookup_digraph};
use crate::core::types::{PronUnit, SoundClass, Token, VoicingOverride};
use crate::error::{Result, TranscribeError};

/// Outcome of resolving one consonant: the unit to emit (if any) and how many
/// following tokens it consumed.
struct ConsonantStep {
    unit: Option<(SoundClass, VoicingOverride)>,
    consumed: usize,
}

impl ConsonantStep {
    fn emit(class: SoundClass, consumed: usize) -> Self {
        Self { unit: Some((class, VoicingOverride::None)), consumed }
    }
}

/// Assigns a sound class and voicing disposition to every consonant token in a
/// single left-to-right pass. Vowels and digraphs pass through unresolved.
///
/// Trigger letters (`v`, `z`, `k`, and `j`/`h` after an interior consonant) are
/// consumed by the consonant before them and produce no unit of their own.
pub fn resolve(tokens: &[Token]) -> Result<Vec<PronUnit>> {
    let mut units = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i].as_str();
        if is_vowel(token) {
            units.push(PronUnit::vowel(token));
        } else if lookup_consonant(token).is_some() {
            let step = resolve_consonant(tokens, i);
            match step.unit {
                Some((class, voicing)) => units.push(PronUnit::consonant(token, class, voicing)),
                None => debug!(
                    consonant = token,
                    word = %tokens.concat(),
                    "consonant before a j/h cluster emits no unit"
                ),
            }
            i += step.consumed;
        } else if lookup_digraph(token).is_some() {
            units.push(PronUnit::digraph(token));
        } else {
            return Err(TranscribeError::UnrecognizedGrapheme {
                token: token.to_string(),
                word: tokens.concat(),
            });
        }
        i += 1;
    }

    Ok(units)
}

fn resolve_consonant(tokens: &[Token], i: usize) -> ConsonantStep {
    use SoundClass::{A, B, C};

    let word_initial = i == 0;
    let next = tokens.get(i + 1).map(String::as_str);

    match next {
        // Word-final: expect the C sound.
        None => ConsonantStep::emit(C, 0),
        // Forced A, B and C sounds; the marker letter is skipped.
        Some("v") => ConsonantStep::emit(A, 1),
        Some("z") => ConsonantStep::emit(B, 1),
        Some("k") => ConsonantStep::emit(C, 1),
        Some(n) if is_vowel(n) => ConsonantStep::emit(if word_initial { A } else { B }, 0),
        // The word-initial consonant has no j/h rule; it falls through to C below.
        Some("j") if !word_initial => assimilate(tokens, i, VoicingOverride::ForceVoiced),
        Some("h") if !word_initial => assimilate(tokens, i, VoicingOverride::ForceUnvoiced),
        Some(_) => ConsonantStep::emit(C, 0),
    }
}

/// Consonant followed by `j` or `h`: C sound word-finally, B sound before a
/// vowel, and no unit at all otherwise. The `j`/`h` is always consumed.
fn assimilate(tokens: &[Token], i: usize, voicing: VoicingOverride) -> ConsonantStep {
    let unit = match tokens.get(i + 2).map(String::as_str) {
        None => Some((SoundClass::C, voicing)),
        Some(after) if is_vowel(after) => Some((SoundClass::B, voicing)),
        Some(_) => None,
    };
    ConsonantStep { unit, consumed: 1 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tokenizer::tokenize;
    use crate::core::types::UnitKind;

    fn classes(word: &str) -> Vec<(String, Option<SoundClass>, VoicingOverride)> {
        resolve(&tokenize(word))
            .unwrap()
            .into_iter()
            .map(|u| (u.letter.clone(), u.sound_class(), u.voicing()))
            .collect()
    }

    fn consonant(letter: &str, class: SoundClass) -> (String, Option<SoundClass>, VoicingOverride) {
        (letter.to_string(), Some(class), VoicingOverride::None)
    }

    fn vowel(letter: &str) -> (String, Option<SoundClass>, VoicingOverride) {
        (letter.to_string(), None, VoicingOverride::None)
    }

    #[test]
    fn lone_consonant_is_word_final() {
        assert_eq!(classes("p"), [consonant("p", SoundClass::C)]);
    }

    #[test]
    fn initial_before_vowel_is_a() {
        assert_eq!(classes("pa"), [consonant("p", SoundClass::A), vowel("a")]);
    }

    #[test]
    fn interior_before_vowel_is_b() {
        assert_eq!(
            classes("apa"),
            [vowel("a"), consonant("p", SoundClass::B), vowel("a")]
        );
    }

    #[test]
    fn markers_force_class_and_are_consumed() {
        assert_eq!(classes("pv"), [consonant("p", SoundClass::A)]);
        assert_eq!(classes("apza"), [vowel("a"), consonant("p", SoundClass::B), vowel("a")]);
        assert_eq!(classes("pka"), [consonant("p", SoundClass::C), vowel("a")]);
    }

    #[test]
    fn consonant_cluster_defaults_to_c() {
        assert_eq!(
            classes("apsa"),
            [
                vowel("a"),
                consonant("p", SoundClass::C),
                consonant("s", SoundClass::B),
                vowel("a"),
            ]
        );
    }

    #[test]
    fn initial_consonant_before_consonant_is_c() {
        assert_eq!(
            classes("psa"),
            [consonant("p", SoundClass::C), consonant("s", SoundClass::B), vowel("a")]
        );
    }

    #[test]
    fn j_voices_word_final_and_pre_vocalic_consonants() {
        assert_eq!(
            classes("asj"),
            [vowel("a"), ("s".to_string(), Some(SoundClass::C), VoicingOverride::ForceVoiced)]
        );
        assert_eq!(
            classes("asja"),
            [
                vowel("a"),
                ("s".to_string(), Some(SoundClass::B), VoicingOverride::ForceVoiced),
                vowel("a"),
            ]
        );
    }

    #[test]
    fn h_unvoices() {
        assert_eq!(
            classes("ašh"),
            [vowel("a"), ("š".to_string(), Some(SoundClass::C), VoicingOverride::ForceUnvoiced)]
        );
    }

    #[test]
    fn h_before_vowel_unvoices_the_b_sound() {
        assert_eq!(
            classes("ašha"),
            [
                vowel("a"),
                ("š".to_string(), Some(SoundClass::B), VoicingOverride::ForceUnvoiced),
                vowel("a"),
            ]
        );
    }

    #[test]
    fn consonant_before_h_and_consonant_is_dropped() {
        assert_eq!(classes("ašhpa"), [vowel("a"), consonant("p", SoundClass::B), vowel("a")]);
    }

    #[test]
    fn consonant_before_j_and_consonant_is_dropped() {
        assert_eq!(classes("asjpa"), [vowel("a"), consonant("p", SoundClass::B), vowel("a")]);
    }

    #[test]
    fn initial_consonant_does_not_consume_j() {
        let err = resolve(&tokenize("sja")).unwrap_err();
        assert_eq!(
            err,
            TranscribeError::UnrecognizedGrapheme { token: "j".to_string(), word: "sja".to_string() }
        );
    }

    #[test]
    fn digraphs_pass_through() {
        let units = resolve(&tokenize("stai")).unwrap();
        assert_eq!(units[0].kind, UnitKind::Digraph);
        assert_eq!(units[1].kind, UnitKind::Vowel);
    }

    #[test]
    fn digraph_does_not_count_as_vowel_lookahead() {
        // "p" followed by the digraph "st" is a plain interior C.
        assert_eq!(classes("apst")[1], consonant("p", SoundClass::C));
    }

    #[test]
    fn unrecognized_grapheme_reports_token_and_word() {
        let err = resolve(&tokenize("abo")).unwrap_err();
        assert_eq!(
            err,
            TranscribeError::UnrecognizedGrapheme { token: "b".to_string(), word: "abo".to_string() }
        );
    }

    #[test]
    fn bare_marker_letter_is_unrecognized() {
        assert!(resolve(&tokenize("av")).is_err());
    }

    #[test]
    fn empty_input_resolves_to_nothing() {
        assert!(resolve(&[]).unwrap().is_empty());
    }
}
