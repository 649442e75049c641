// File: src/normalize.rs

/// Folds away notation differences before a predicted and an attested
/// transcription are compared: length and stress marks are removed, the
/// palatalization mark becomes `j`, the tied `d͡z` becomes `dz`, and `y`
/// becomes the glide `j`.
pub fn normalize_ipa(ipa: &str) -> String {
    ipa.replace([':', '\''], "")
        .replace('ʲ', "j")
        .replace("d͡z", "dz")
        .replace('y', "j")
}
