//! Cache key derivation.

/// Separator between the key parts. ASCII unit separator: never present in
/// utterance text, voice selectors, or model identifiers.
pub const KEY_DELIMITER: char = '\u{1f}';

/// Derives the composite cache key from a sanitized utterance, a voice
/// selector, and a model selector.
///
/// The utterance is lowercased so requests differing only in casing collapse
/// to the same key. The caller is responsible for trimming and truncating the
/// utterance first; key stability across whitespace and length variants
/// follows from that sanitization.
pub fn cache_key(utterance: &str, voice: &str, model: &str) -> String {
    let mut key = String::with_capacity(utterance.len() + voice.len() + model.len() + 2);
    key.push_str(&utterance.to_lowercase());
    key.push(KEY_DELIMITER);
    key.push_str(voice);
    key.push(KEY_DELIMITER);
    key.push_str(model);
    key
}
