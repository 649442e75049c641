// src/core/renderer.rs
use crate::core::tables::{self, Phoneme};
use crate::core::types::{Form, PronUnit, UnitKind, VoicingOverride};
use crate::error::{Result, TranscribeError, Voicing};

/// Maps each unit to its phoneme string, in order. `word` is only used for error reports.
pub fn render(units: &[PronUnit], word: &str) -> Result<Vec<&'static str>> {
    units.iter().map(|unit| render_unit(unit, word)).collect()
}

pub fn render_unit(unit: &PronUnit, word: &str) -> Result<&'static str> {
    let unrecognized = || TranscribeError::UnrecognizedGrapheme {
        token: unit.letter.clone(),
        word: word.to_string(),
    };

    match unit.kind {
        UnitKind::Vowel => tables::lookup_vowel(&unit.letter).ok_or_else(unrecognized),
        UnitKind::Digraph => tables::lookup_digraph(&unit.letter).ok_or_else(unrecognized),
        UnitKind::Consonant { class, form, voicing } => {
            let entry = tables::lookup_consonant(&unit.letter).ok_or_else(unrecognized)?;
            let phoneme = match (entry.slot(class), form) {
                (Phoneme::Fixed(p), _) => p,
                (Phoneme::Pair { sub, .. }, Form::Alternate) => sub,
                (Phoneme::Pair { main, .. }, Form::Main) => main,
            };
            apply_voicing(phoneme, voicing, word)
        }
    }
}

fn apply_voicing(phoneme: &'static str, voicing: VoicingOverride, word: &str) -> Result<&'static str> {
    let (mapped, direction) = match voicing {
        VoicingOverride::None => return Ok(phoneme),
        VoicingOverride::ForceVoiced => (tables::to_voiced(phoneme), Voicing::Voiced),
        VoicingOverride::ForceUnvoiced => (tables::to_unvoiced(phoneme), Voicing::Unvoiced),
    };
    mapped.ok_or_else(|| TranscribeError::MissingVoicingCounterpart {
        phoneme: phoneme.to_string(),
        direction,
        word: word.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SoundClass;

    fn consonant(letter: &str, class: SoundClass) -> PronUnit {
        PronUnit::consonant(letter, class, VoicingOverride::None)
    }

    #[test]
    fn fixed_slot_ignores_form() {
        let unit = consonant("p", SoundClass::C).with_alternate_form();
        assert_eq!(render_unit(&unit, "p").unwrap(), "m");
    }

    #[test]
    fn pair_slot_uses_main_then_sub() {
        let unit = consonant("t", SoundClass::B);
        assert_eq!(render_unit(&unit, "ata").unwrap(), "t");
        assert_eq!(render_unit(&unit.with_alternate_form(), "ati").unwrap(), "t͡s");
    }

    #[test]
    fn vowels_and_digraphs_come_from_their_tables() {
        assert_eq!(render_unit(&PronUnit::vowel("e"), "e").unwrap(), "je:");
        assert_eq!(render_unit(&PronUnit::digraph("yh"), "yh").unwrap(), ":");
    }

    #[test]
    fn voicing_substitutes_through_the_map() {
        let voiced = PronUnit::consonant("s", SoundClass::C, VoicingOverride::ForceVoiced);
        assert_eq!(render_unit(&voiced, "asj").unwrap(), "ʒ");
        let unvoiced = PronUnit::consonant("š", SoundClass::C, VoicingOverride::ForceUnvoiced);
        assert_eq!(render_unit(&unvoiced, "ašh").unwrap(), "ʃ");
    }

    #[test]
    fn voicing_without_counterpart_fails() {
        let unit = PronUnit::consonant("s", SoundClass::B, VoicingOverride::ForceVoiced);
        assert_eq!(
            render_unit(&unit, "asja").unwrap_err(),
            TranscribeError::MissingVoicingCounterpart {
                phoneme: "s".to_string(),
                direction: Voicing::Voiced,
                word: "asja".to_string(),
            }
        );
    }

    #[test]
    fn render_keeps_one_string_per_unit() {
        let units = vec![consonant("p", SoundClass::A), PronUnit::vowel("a")];
        assert_eq!(render(&units, "pa").unwrap(), ["b", "a"]);
    }
}
