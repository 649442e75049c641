// src/core/types.rs
use serde::{Deserialize, Serialize};

/// A spelling unit: a single letter or a recognized digraph.
/// Produced only by the tokenizer.
pub type Token = String;

/// One of the three contextual realizations of a consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundClass {
    A,
    B,
    C,
}

/// Forced voicing assimilation requested by a trailing `j` or `h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VoicingOverride {
    #[default]
    None,
    ForceVoiced,
    ForceUnvoiced,
}

/// Which half of a main/alternate table pair a consonant renders with.
/// Consonants start on `Main`; only the allomorph pass moves them to `Alternate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Form {
    #[default]
    Main,
    Alternate,
}

/// What a resolved unit is. Sound class, form and voicing only exist on consonants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitKind {
    Consonant {
        class: SoundClass,
        form: Form,
        voicing: VoicingOverride,
    },
    Vowel,
    Digraph,
}

/// A token after resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PronUnit {
    pub letter: Token,
    pub kind: UnitKind,
}

impl PronUnit {
    pub fn consonant(letter: &str, class: SoundClass, voicing: VoicingOverride) -> Self {
        Self {
            letter: letter.to_string(),
            kind: UnitKind::Consonant { class, form: Form::Main, voicing },
        }
    }

    pub fn vowel(letter: &str) -> Self {
        Self { letter: letter.to_string(), kind: UnitKind::Vowel }
    }

    pub fn digraph(letter: &str) -> Self {
        Self { letter: letter.to_string(), kind: UnitKind::Digraph }
    }

    pub fn is_consonant(&self) -> bool {
        matches!(self.kind, UnitKind::Consonant { .. })
    }

    /// `None` for vowels and digraphs.
    pub fn sound_class(&self) -> Option<SoundClass> {
        match self.kind {
            UnitKind::Consonant { class, .. } => Some(class),
            _ => None,
        }
    }

    /// Tri-state alternate-form flag: `None` when the unit is not a consonant.
    pub fn use_alternate_form(&self) -> Option<bool> {
        match self.kind {
            UnitKind::Consonant { form, .. } => Some(form == Form::Alternate),
            _ => None,
        }
    }

    pub fn voicing(&self) -> VoicingOverride {
        match self.kind {
            UnitKind::Consonant { voicing, .. } => voicing,
            _ => VoicingOverride::None,
        }
    }

    /// Returns a copy of this unit switched to its alternate form.
    /// Non-consonant units come back unchanged.
    pub fn with_alternate_form(&self) -> Self {
        let kind = match self.kind {
            UnitKind::Consonant { class, voicing, .. } => UnitKind::Consonant {
                class,
                form: Form::Alternate,
                voicing,
            },
            other => other,
        };
        Self { letter: self.letter.clone(), kind }
    }
}
