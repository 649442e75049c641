// src/core/allomorph.rs
use crate::core::types::PronUnit;

/// A consonant that switches to its alternate phoneme when the next unit is one of `triggers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllomorphRule {
    pub consonant: &'static str,
    pub triggers: &'static [&'static str],
}

pub const DEFAULT_ALLOMORPH_RULES: &[AllomorphRule] = &[AllomorphRule {
    consonant: "t",
    triggers: &["i", "e", "é", "ia"],
}];

impl AllomorphRule {
    fn applies(&self, unit: &PronUnit, next: Option<&PronUnit>) -> bool {
        unit.is_consonant()
            && unit.letter == self.consonant
            && next.is_some_and(|n| self.triggers.iter().any(|t| *t == n.letter))
    }
}

/// Derives a new unit sequence with alternate forms selected. Looks at most
/// one unit ahead and never touches sound class or voicing.
pub fn apply_allomorphs(units: &[PronUnit], rules: &[AllomorphRule]) -> Vec<PronUnit> {
    units
        .iter()
        .enumerate()
        .map(|(i, unit)| {
            let next = units.get(i + 1);
            if rules.iter().any(|rule| rule.applies(unit, next)) {
                unit.with_alternate_form()
            } else {
                unit.clone()
            }
        })
        .collect()
}
