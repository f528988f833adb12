//! Fixed marker-word tables
//!
//! All entries are lower-case; callers lower-case tokens before lookup.

/// Formal connectors and register words
pub const FORMAL_MARKERS: &[&str] = &[
    "therefore",
    "however",
    "moreover",
    "furthermore",
    "consequently",
    "nevertheless",
    "henceforth",
    "accordingly",
    "whereas",
    "thus",
    "hereby",
    "notwithstanding",
    "pursuant",
    "facilitate",
    "utilize",
    "implement",
    "endeavor",
    "subsequent",
    "prior",
    "aforementioned",
];

/// Colloquial words and chat abbreviations
pub const INFORMAL_MARKERS: &[&str] = &[
    "hey", "yeah", "gonna", "wanna", "gotta", "kinda", "sorta", "awesome", "cool", "super",
    "totally", "literally", "basically", "stuff", "thing", "things", "ok", "okay", "btw", "tbh",
    "ngl", "lol", "omg", "wow", "yep", "nope", "yikes",
];

/// Persuasive / conversion copywriting vocabulary
pub const POWER_WORDS: &[&str] = &[
    "free",
    "proven",
    "secret",
    "instant",
    "guaranteed",
    "exclusive",
    "now",
    "easy",
    "discover",
    "save",
    "new",
    "you",
    "because",
    "results",
    "simple",
    "fast",
    "limited",
    "bonus",
    "premium",
    "essential",
    "powerful",
    "amazing",
    "unlock",
    "boost",
    "transform",
    "ultimate",
    "effortless",
    "remarkable",
    "revolutionary",
    "unbeatable",
];

pub const FIRST_PERSON: &[&str] = &["i", "me", "my", "mine", "we", "us", "our", "ours"];

pub const SECOND_PERSON: &[&str] = &["you", "your", "yours", "yourself"];

pub const THIRD_PERSON: &[&str] = &[
    "he", "she", "it", "they", "them", "his", "her", "its", "their", "theirs",
];

/// Grammatical person of a pronoun token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Person {
    First,
    Second,
    Third,
}

impl Person {
    /// Classify a lower-cased token; `None` for non-pronouns
    pub fn classify(word: &str) -> Option<Person> {
        if FIRST_PERSON.contains(&word) {
            Some(Person::First)
        } else if SECOND_PERSON.contains(&word) {
            Some(Person::Second)
        } else if THIRD_PERSON.contains(&word) {
            Some(Person::Third)
        } else {
            None
        }
    }

    /// Position on the perspective axis
    pub fn weight(&self) -> f64 {
        match self {
            Person::First => 0.0,
            Person::Second => 50.0,
            Person::Third => 100.0,
        }
    }
}

/// Count tokens that appear in `table`
pub fn count_in(words: &[String], table: &[&str]) -> usize {
    words.iter().filter(|w| table.contains(&w.as_str())).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(FORMAL_MARKERS.len(), 20);
        assert_eq!(INFORMAL_MARKERS.len(), 27);
        assert_eq!(POWER_WORDS.len(), 30);
    }

    #[test]
    fn test_tables_are_lowercase() {
        for table in [FORMAL_MARKERS, INFORMAL_MARKERS, POWER_WORDS] {
            assert!(table.iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
        }
    }

    #[test]
    fn test_person_classify() {
        assert_eq!(Person::classify("we"), Some(Person::First));
        assert_eq!(Person::classify("yourself"), Some(Person::Second));
        assert_eq!(Person::classify("theirs"), Some(Person::Third));
        assert_eq!(Person::classify("the"), None);
    }

    #[test]
    fn test_count_in() {
        let words: Vec<String> = ["thus", "we", "utilize", "stuff"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(count_in(&words, FORMAL_MARKERS), 2);
        assert_eq!(count_in(&words, INFORMAL_MARKERS), 1);
    }
}
