//! Statement identifier validation (languages and formats).

use std::collections::BTreeSet;

/// ISO 639-1 language codes accepted as statement languages.
pub const ISO_639_1: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg",
    "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv", "cy",
    "da", "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi", "fj",
    "fo", "fr", "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr", "ht",
    "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja", "jv",
    "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw", "ky",
    "la", "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn",
    "mr", "ms", "mt", "my", "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny",
    "oc", "oj", "om", "or", "os", "pa", "pi", "pl", "ps", "pt", "qu", "rm", "rn", "ro", "ru",
    "rw", "sa", "sc", "sd", "se", "sg", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr", "ss",
    "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr", "ts",
    "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi", "yo",
    "za", "zh", "zu",
];

/// Check that an identifier is drawn from the identifier alphabet.
///
/// Identifiers are non-empty, start with a lowercase ASCII letter and
/// contain only lowercase ASCII letters, digits, `_` and `-`.
pub fn is_valid_id(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-'))
}

/// Set of languages a statement version may declare.
#[derive(Debug, Clone)]
pub struct LanguageSet {
    langs: BTreeSet<String>,
}

impl LanguageSet {
    /// The ISO 639-1 languages.
    pub fn iso() -> Self {
        LanguageSet {
            langs: ISO_639_1.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Add extra languages. Identifiers outside the alphabet are skipped.
    pub fn extend<I, S>(&mut self, extra: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for lang in extra {
            let lang = lang.as_ref();
            if is_valid_id(lang) {
                self.langs.insert(lang.to_string());
            } else {
                tracing::warn!("ignoring invalid extra language `{}`", lang);
            }
        }
    }

    /// Check whether a language is valid and known.
    pub fn contains(&self, lang: &str) -> bool {
        is_valid_id(lang) && self.langs.contains(lang)
    }

    pub fn len(&self) -> usize {
        self.langs.len()
    }
}

impl Default for LanguageSet {
    fn default() -> Self {
        Self::iso()
    }
}
