use serde::Serialize;
use tracing::debug;

use crate::core::allomorph::{apply_allomorphs, AllomorphRule, DEFAULT_ALLOMORPH_RULES};
use crate::core::renderer::render;
use crate::core::resolver::resolve;
use crate::core::tokenizer::tokenize;
use crate::core::types::{PronUnit, Token};
use crate::error::Result;

/// Every intermediate stage of one word's transcription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcription {
    pub word: String,
    pub tokens: Vec<Token>,
    pub units: Vec<PronUnit>,
    /// One phoneme string per unit.
    pub phonemes: Vec<&'static str>,
}

impl Transcription {
    pub fn ipa(&self) -> String {
        self.phonemes.concat()
    }
}

/// Stateless grapheme-to-phoneme transcriber.
///
/// Words are processed independently and the phoneme tables are immutable, so
/// one transcriber can be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct Transcriber {
    allomorph_rules: &'static [AllomorphRule],
}

impl Transcriber {
    pub fn new() -> Self {
        Self { allomorph_rules: DEFAULT_ALLOMORPH_RULES }
    }

    pub fn with_allomorph_rules(rules: &'static [AllomorphRule]) -> Self {
        Self { allomorph_rules: rules }
    }

    /// Transcribes a full word into its phonemic form.
    pub fn transcribe(&self, word: &str) -> Result<String> {
        self.analyze(word).map(|t| t.ipa())
    }

    /// Runs the pipeline and keeps every stage for inspection.
    pub fn analyze(&self, word: &str) -> Result<Transcription> {
        let tokens = tokenize(word);
        let resolved = resolve(&tokens)?;
        let units = apply_allomorphs(&resolved, self.allomorph_rules);
        let phonemes = render(&units, word)?;
        debug!(word, tokens = tokens.len(), units = units.len(), "transcribed");
        Ok(Transcription { word: word.to_string(), tokens, units, phonemes })
    }

    /// Resolution, allomorph selection and rendering over pre-split tokens.
    pub fn render_tokens(&self, tokens: &[Token]) -> Result<Vec<&'static str>> {
        let units = apply_allomorphs(&resolve(tokens)?, self.allomorph_rules);
        render(&units, &tokens.concat())
    }
}

impl Default for Transcriber {
    fn default() -> Self {
        Self::new()
    }
}

/// Transcribes `word` with the default rule set.
pub fn transcribe(word: &str) -> Result<String> {
    Transcriber::new().transcribe(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{TranscribeError, Voicing};

    #[test]
    fn word_final_consonant_uses_c_sound() {
        assert_eq!(transcribe("p").unwrap(), "m");
    }

    #[test]
    fn v_forces_a_sound_and_disappears() {
        assert_eq!(transcribe("pv").unwrap(), "b");
    }

    #[test]
    fn initial_consonant_before_vowel() {
        assert_eq!(transcribe("pa").unwrap(), "ba");
    }

    #[test]
    fn interior_consonant_before_vowel() {
        assert_eq!(transcribe("ata").unwrap(), "ata");
        assert_eq!(transcribe("asa").unwrap(), "asa");
        assert_eq!(transcribe("sa").unwrap(), "za");
    }

    #[test]
    fn t_before_i_takes_alternate_form() {
        assert_eq!(transcribe("ti").unwrap(), "d͡zi");
        assert_eq!(transcribe("ati").unwrap(), "at͡si");
        assert_eq!(transcribe("atia").unwrap(), "at͡sia");
    }

    #[test]
    fn mixed_word() {
        assert_eq!(transcribe("pelné").unwrap(), "bje:ʎne");
        assert_eq!(transcribe("stai").unwrap(), "st͡sje");
        assert_eq!(transcribe("gnoy").unwrap(), "xnʲoi");
    }

    #[test]
    fn voicing_assimilation() {
        assert_eq!(transcribe("asj").unwrap(), "aʒ");
        assert_eq!(transcribe("ašh").unwrap(), "aʃ");
    }

    #[test]
    fn unvoicing_a_b_sound_has_no_counterpart() {
        assert_eq!(
            transcribe("ašha"),
            Err(TranscribeError::MissingVoicingCounterpart {
                phoneme: "ʃx".to_string(),
                direction: Voicing::Unvoiced,
                word: "ašha".to_string(),
            })
        );
    }

    #[test]
    fn yh_renders_as_length_mark() {
        let t = Transcriber::new().analyze("yha").unwrap();
        assert_eq!(t.tokens, ["yh", "a"]);
        assert_eq!(t.ipa(), ":a");
        assert_eq!(transcribe("ayh").unwrap(), "a:");
    }

    #[test]
    fn unrecognized_grapheme_aborts_the_word() {
        assert!(matches!(
            transcribe("bab"),
            Err(TranscribeError::UnrecognizedGrapheme { ref token, .. }) if token == "b"
        ));
    }

    #[test]
    fn analyze_keeps_one_phoneme_per_unit() {
        let t = Transcriber::new().analyze("apvsta").unwrap();
        assert_eq!(t.tokens, ["a", "p", "v", "st", "a"]);
        assert_eq!(t.units.len(), 4);
        assert_eq!(t.phonemes.len(), t.units.len());
        assert_eq!(t.ipa(), "abst͡sa");
    }

    #[test]
    fn render_tokens_matches_transcribe() {
        let tokens = tokenize("tipa");
        let joined = Transcriber::new().render_tokens(&tokens).unwrap().concat();
        assert_eq!(joined, transcribe("tipa").unwrap());
    }

    #[test]
    fn empty_rule_table_disables_allomorphs() {
        let plain = Transcriber::with_allomorph_rules(&[]);
        assert_eq!(plain.transcribe("ti").unwrap(), "di");
    }

    #[test]
    fn empty_word_transcribes_to_empty() {
        assert_eq!(transcribe("").unwrap(), "");
    }
}
