use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::utils::is_acronym;

/// Assigns a lemma i. e. the dictionary form to a word.
pub trait Lemmatize {
    fn lemma(&self, word: &str) -> String;
}

impl<'a, T> Lemmatize for &'a T
where
    T: Lemmatize,
{
    fn lemma(&self, word: &str) -> String {
        (*self).lemma(word)
    }
}

lazy_static! {
    /// Forms which are not covered by the suffix rules. Words mapping to themselves are protected from the rules.
    static ref EXCEPTIONS: HashMap<&'static str, &'static str> = {
        let groups: &[(&str, &[&str])] = &[
            ("be", &["am", "is", "are", "was", "were", "been", "being"]),
            ("have", &["has", "had", "having"]),
            ("do", &["does", "did", "done", "doing"]),
            ("go", &["goes", "went", "gone", "going"]),
            ("use", &["used", "uses", "using"]),
            ("make", &["made"]),
            ("say", &["said", "says"]),
            ("get", &["got", "gotten"]),
            ("come", &["came"]),
            ("know", &["knew", "known"]),
            ("think", &["thought"]),
            ("tell", &["told"]),
            ("find", &["found"]),
            ("give", &["gave", "given"]),
            ("feel", &["felt"]),
            ("leave", &["left"]),
            ("bring", &["brought"]),
            ("begin", &["began", "begun"]),
            ("keep", &["kept"]),
            ("hold", &["held"]),
            ("write", &["wrote", "written"]),
            ("stand", &["stood"]),
            ("hear", &["heard"]),
            ("mean", &["meant"]),
            ("meet", &["met"]),
            ("pay", &["paid"]),
            ("sit", &["sat"]),
            ("speak", &["spoke", "spoken"]),
            ("lead", &["led"]),
            ("grow", &["grew", "grown"]),
            ("lose", &["lost"]),
            ("fall", &["fell", "fallen"]),
            ("send", &["sent"]),
            ("build", &["built"]),
            ("understand", &["understood"]),
            ("draw", &["drew", "drawn"]),
            ("break", &["broke", "broken"]),
            ("spend", &["spent"]),
            ("rise", &["rose", "risen"]),
            ("drive", &["drove", "driven"]),
            ("buy", &["bought"]),
            ("wear", &["wore", "worn"]),
            ("choose", &["chose", "chosen"]),
            ("eat", &["ate", "eaten"]),
            ("fly", &["flew", "flown", "flies"]),
            ("sing", &["sang", "sung"]),
            ("swim", &["swam", "swum"]),
            ("win", &["won"]),
            ("teach", &["taught"]),
            ("catch", &["caught"]),
            ("fight", &["fought"]),
            ("sleep", &["slept"]),
            ("run", &["ran"]),
            ("see", &["saw", "seen", "sees"]),
            ("take", &["took", "taken"]),
            ("man", &["men"]),
            ("woman", &["women"]),
            ("child", &["children"]),
            ("person", &["people"]),
            ("mouse", &["mice"]),
            ("foot", &["feet"]),
            ("tooth", &["teeth"]),
            ("goose", &["geese"]),
            ("life", &["lives"]),
            ("wife", &["wives"]),
            ("knife", &["knives"]),
            ("wolf", &["wolves"]),
            ("half", &["halves"]),
            ("good", &["better", "best"]),
            ("bad", &["worse", "worst"]),
            ("I", &["i"]),
        ];
        let keep = &[
            "this", "his", "its", "has", "was", "us", "thus", "always", "perhaps", "news", "series",
            "species", "physics", "mathematics", "bus", "gas", "yes", "less", "unless", "various",
            "morning", "evening", "nothing", "something", "anything", "everything", "during",
            "ceiling", "sing", "bring", "thing", "king", "ring", "spring", "string", "wing",
            "interesting", "red", "bed", "need", "feed", "seed", "speed", "indeed", "hundred",
            "sacred", "naked", "wicked", "kindred",
        ];

        let mut map = HashMap::new();
        for (lemma, forms) in groups {
            for form in forms.iter() {
                map.insert(*form, *lemma);
            }
        }
        for word in keep.iter() {
            map.entry(*word).or_insert(*word);
        }
        map
    };
}

/// Rule-based English lemmatizer: an exception table for irregular forms and suffix rules
/// for plurals and `-ed` / `-ing` forms.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lemmatizer;

fn is_vowel(c: char) -> bool {
    "aeiouy".contains(c)
}

/// Repairs the stem left after removing `-ed` or `-ing`.
fn restore_stem(stem: &str) -> Option<String> {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();

    if n < 2 || !chars.iter().any(|c| is_vowel(*c)) {
        return None;
    }

    let last = chars[n - 1];
    let second_last = chars[n - 2];

    // running -> runn -> run
    if last == second_last && !is_vowel(last) && !"lsz".contains(last) {
        return Some(chars[..n - 1].iter().collect());
    }

    // making -> mak -> make
    let short_cvc = n == 3
        && !is_vowel(chars[0])
        && is_vowel(second_last)
        && !is_vowel(last)
        && !"wxy".contains(last);

    let needs_e = ["v", "iz", "is", "dg", "ac", "nc", "rc"]
        .iter()
        .any(|suffix| stem.ends_with(suffix))
        || (n > 3 && !is_vowel(second_last) && second_last != 'l' && last == 'l');

    if short_cvc || needs_e {
        Some(format!("{}e", stem))
    } else {
        Some(stem.to_string())
    }
}

fn lemma_of_lowercase(word: &str) -> String {
    if let Some(lemma) = EXCEPTIONS.get(word) {
        return (*lemma).to_string();
    }

    let n = word.chars().count();
    if n <= 3 || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return word.to_string();
    }

    let stripped = |suffix: &str| &word[..word.len() - suffix.len()];

    if word.ends_with("ies") && n > 4 {
        format!("{}y", stripped("ies"))
    } else if word.ends_with("sses")
        || word.ends_with("shes")
        || word.ends_with("ches")
        || word.ends_with("xes")
        || word.ends_with("zzes")
    {
        stripped("es").to_string()
    } else if word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
    {
        stripped("s").to_string()
    } else if word.ends_with("ied") && n > 4 {
        format!("{}y", stripped("ied"))
    } else if word.ends_with("eed") {
        word.to_string()
    } else if word.ends_with("ed") && n > 4 {
        restore_stem(stripped("ed")).unwrap_or_else(|| word.to_string())
    } else if word.ends_with("ing") && n > 5 {
        restore_stem(stripped("ing")).unwrap_or_else(|| word.to_string())
    } else {
        word.to_string()
    }
}

impl Lemmatize for Lemmatizer {
    fn lemma(&self, word: &str) -> String {
        if is_acronym(word) {
            return word.to_string();
        }

        lemma_of_lowercase(&word.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_lemmas(pairs: &[(&str, &str)]) {
        for (word, lemma) in pairs {
            assert_eq!(&Lemmatizer.lemma(word), lemma, "lemma of {}", word);
        }
    }

    #[test]
    fn plurals() {
        assert_lemmas(&[
            ("cats", "cat"),
            ("studies", "study"),
            ("classes", "class"),
            ("boxes", "box"),
            ("watches", "watch"),
            ("children", "child"),
            ("glass", "glass"),
            ("status", "status"),
            ("analysis", "analysis"),
        ]);
    }

    #[test]
    fn verb_forms() {
        assert_lemmas(&[
            ("running", "run"),
            ("was", "be"),
            ("making", "make"),
            ("hoping", "hope"),
            ("hopped", "hop"),
            ("visited", "visit"),
            ("jumped", "jump"),
            ("studied", "study"),
            ("realized", "realize"),
            ("loved", "love"),
            ("enabled", "enable"),
            ("falling", "fall"),
            ("missed", "miss"),
            ("ran", "run"),
        ]);
    }

    #[test]
    fn protected_words() {
        assert_lemmas(&[
            ("morning", "morning"),
            ("thing", "thing"),
            ("bring", "bring"),
            ("need", "need"),
            ("this", "this"),
        ]);
    }

    #[test]
    fn case_handling() {
        assert_lemmas(&[
            ("The", "the"),
            ("Running", "run"),
            ("NASA", "NASA"),
            ("I", "I"),
            ("42", "42"),
            ("naïve", "naïve"),
        ]);
    }
}
