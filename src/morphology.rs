//! Reduce a word to its base form: English noun singularization, or Porter2 stemming.
//!
//! Both reductions are idempotent, so a word that is already reduced comes back unchanged.

use rust_stemmers::{Algorithm, Stemmer};

/// Words shorter than this are never reduced ("gas", "bus", "its").
const MIN_REDUCIBLE_LEN: usize = 4;

/// Upper bound on stemmer passes while looking for a fixed point.
const MAX_STEM_PASSES: usize = 4;

/// Plurals the suffix rules get wrong. Every singular form here is left alone by the rules.
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("aliases", "alias"),
    ("analyses", "analysis"),
    ("appendices", "appendix"),
    ("biases", "bias"),
    ("bonuses", "bonus"),
    ("children", "child"),
    ("criteria", "criterion"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("halves", "half"),
    ("hypotheses", "hypothesis"),
    ("indices", "index"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("matrices", "matrix"),
    ("mice", "mouse"),
    ("people", "person"),
    ("phenomena", "phenomenon"),
    ("selves", "self"),
    ("statuses", "status"),
    ("teeth", "tooth"),
    ("vertices", "vertex"),
    ("viruses", "virus"),
    ("wives", "wife"),
    ("women", "woman"),
];

/// Singulars ending in "ie" or "che", which the "ies" and "ches" rules would mangle.
const IE_CHE_NOUNS: &[&str] = &[
    "avalanche", "calorie", "cliche", "cookie", "genie", "headache", "hoodie", "moustache",
    "movie", "mustache", "newbie", "psyche", "rookie", "selfie", "smoothie", "toothache",
    "zombie",
];

/// Words that end in "s" but are already singular.
const SINGULAR_S: &[&str] = &[
    "alias", "always", "atlas", "bias", "canvas", "chaos", "kudos", "lens", "news", "perhaps",
    "plus", "series", "species", "thus", "whereas",
];

/// How a normalized word is reduced to its base form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Morphology {
    /// Dictionary base form: plurals become singular, everything else is kept.
    #[default]
    Lemma,
    /// Porter2 stem ("security" -> "secur").
    Stem,
}

/// Applies a [`Morphology`] to lowercase words.
pub struct Reducer {
    stemmer: Option<Stemmer>,
}

impl Reducer {
    pub fn new(morphology: Morphology) -> Self {
        let stemmer = match morphology {
            Morphology::Lemma => None,
            Morphology::Stem => Some(Stemmer::create(Algorithm::English)),
        };
        Self { stemmer }
    }

    /// Reduce `word` (expected lowercase) to its base form.
    pub fn reduce(&self, word: &str) -> String {
        if word.chars().count() < MIN_REDUCIBLE_LEN {
            return word.to_string();
        }
        match &self.stemmer {
            Some(stemmer) => stem_to_fixed_point(stemmer, word),
            None => singularize(word),
        }
    }
}

impl Default for Reducer {
    fn default() -> Self {
        Self::new(Morphology::default())
    }
}

fn irregular_singular(word: &str) -> Option<&'static str> {
    IRREGULAR_PLURALS
        .iter()
        .find(|(plural, _)| *plural == word)
        .map(|(_, singular)| *singular)
}

/// Rule-based English noun singularization.
fn singularize(word: &str) -> String {
    if SINGULAR_S.contains(&word) {
        return word.to_string();
    }
    if let Some(singular) = irregular_singular(word) {
        return singular.to_string();
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }

    if let Some(singular) = word
        .strip_suffix('s')
        .filter(|stem| IE_CHE_NOUNS.contains(stem))
    {
        return singular.to_string();
    }

    let reduced = if let Some(stem) = word.strip_suffix("ies") {
        format!("{stem}y")
    } else if let Some(stem) = word.strip_suffix("sses") {
        format!("{stem}ss")
    } else if word.ends_with("xes") || word.ends_with("shes") {
        // "boxes" -> "box", "hashes" -> "hash"
        word[..word.len() - 2].to_string()
    } else if let Some(stem) = word.strip_suffix("ches") {
        if ch_plural_takes_es(stem) {
            format!("{stem}ch")
        } else {
            format!("{stem}che")
        }
    } else if let Some(stem) = word.strip_suffix('s') {
        stem.to_string()
    } else {
        return word.to_string();
    };

    // "childrens" -> "children" -> "child"
    match irregular_singular(&reduced) {
        Some(singular) => singular.to_string(),
        None => reduced,
    }
}

/// "matches", "branches", "beaches" drop "es"; "caches", "niches" drop only "s".
fn ch_plural_takes_es(stem: &str) -> bool {
    let mut tail = stem.chars().rev();
    match (tail.next(), tail.next()) {
        (Some(last), Some(before)) if is_vowel(last) => is_vowel(before),
        (Some(last), _) => !is_vowel(last),
        (None, _) => false,
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn stem_to_fixed_point(stemmer: &Stemmer, word: &str) -> String {
    let mut current = word.to_string();
    for _ in 0..MAX_STEM_PASSES {
        let next = stemmer.stem(&current).into_owned();
        if next == current {
            break;
        }
        current = next;
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        let reducer = Reducer::default();
        assert_eq!(reducer.reduce("servers"), "server");
        assert_eq!(reducer.reduce("policies"), "policy");
        assert_eq!(reducer.reduce("processes"), "process");
        assert_eq!(reducer.reduce("boxes"), "box");
        assert_eq!(reducer.reduce("hashes"), "hash");
        assert_eq!(reducer.reduce("responses"), "response");
    }

    #[test]
    fn test_ch_plurals() {
        let reducer = Reducer::default();
        assert_eq!(reducer.reduce("matches"), "match");
        assert_eq!(reducer.reduce("branches"), "branch");
        assert_eq!(reducer.reduce("searches"), "search");
        assert_eq!(reducer.reduce("beaches"), "beach");
        assert_eq!(reducer.reduce("caches"), "cache");
        assert_eq!(reducer.reduce("niches"), "niche");
        assert_eq!(reducer.reduce("avalanches"), "avalanche");
        assert_eq!(reducer.reduce("moustaches"), "moustache");
        assert_eq!(reducer.reduce("headaches"), "headache");
    }

    #[test]
    fn test_ie_plurals() {
        let reducer = Reducer::default();
        assert_eq!(reducer.reduce("movies"), "movie");
        assert_eq!(reducer.reduce("cookies"), "cookie");
        assert_eq!(reducer.reduce("zombies"), "zombie");
        assert_eq!(reducer.reduce("policies"), "policy");
        for word in IE_CHE_NOUNS {
            assert_eq!(reducer.reduce(word), *word);
        }
    }

    #[test]
    fn test_singular_forms_untouched() {
        let reducer = Reducer::default();
        for word in ["server", "class", "virus", "analysis", "alias", "series", "gas", "bus"] {
            assert_eq!(reducer.reduce(word), word);
        }
    }

    #[test]
    fn test_irregular_plurals() {
        let reducer = Reducer::default();
        assert_eq!(reducer.reduce("indices"), "index");
        assert_eq!(reducer.reduce("children"), "child");
        assert_eq!(reducer.reduce("childrens"), "child");
        assert_eq!(reducer.reduce("aliases"), "alias");
    }

    #[test]
    fn test_lemma_idempotent() {
        let reducer = Reducer::default();
        let words = [
            "servers", "policies", "classes", "caches", "matches", "indices", "children",
            "childrens", "viruses", "boxes", "networks", "aliases", "data", "passwords", "ties",
        ];
        for word in words {
            let once = reducer.reduce(word);
            assert_eq!(reducer.reduce(&once), once, "not idempotent for {word}");
        }
    }

    #[test]
    fn test_irregular_table_is_stable() {
        let reducer = Reducer::default();
        for (_, singular) in IRREGULAR_PLURALS {
            assert_eq!(reducer.reduce(singular), *singular);
        }
    }

    #[test]
    fn test_stem_merges_variants() {
        let reducer = Reducer::new(Morphology::Stem);
        assert_eq!(reducer.reduce("servers"), reducer.reduce("server"));
        assert_eq!(reducer.reduce("connections"), reducer.reduce("connection"));
        for word in ["servers", "connections", "running"] {
            let once = reducer.reduce(word);
            assert_eq!(reducer.reduce(&once), once);
        }
    }
}
