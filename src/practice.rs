//! Practice suggestions: which words to work on next with a child.
//!
//! Known words the child is unsure of come first, earliest typical age first.
//! Remaining slots are filled with common first words the child has not
//! picked up yet.

use std::collections::HashSet;

use crate::models::WordEntry;

pub const PRACTICE_COUNT: usize = 5;

/// Known words below this confidence are suggested for practice.
pub const LOW_CONFIDENCE: u8 = 50;

/// Sort key for words that are not in the reference list.
const UNLISTED_AGE: u32 = 999;

const DEFAULT_STRATEGY: &str = "Practice this word regularly with your child.";

pub struct TypicalWord {
    pub word: &'static str,
    pub age_months: u32,
    pub strategy: &'static str,
}

/// Common first words in the order children usually pick them up.
pub const TYPICAL_WORDS: &[TypicalWord] = &[
    TypicalWord { word: "mama", age_months: 9, strategy: "Say it every time mom comes into the room and wait for a response." },
    TypicalWord { word: "dada", age_months: 9, strategy: "Point to dad and repeat the word slowly during play." },
    TypicalWord { word: "bye-bye", age_months: 10, strategy: "Wave and say it at every goodbye, even to toys." },
    TypicalWord { word: "hi", age_months: 10, strategy: "Greet people and pets together and pause for your child to join in." },
    TypicalWord { word: "no", age_months: 11, strategy: "Pair it with a head shake so the meaning is visible." },
    TypicalWord { word: "ball", age_months: 12, strategy: "Roll a ball back and forth, naming it on every turn." },
    TypicalWord { word: "dog", age_months: 12, strategy: "Name dogs on walks and in picture books." },
    TypicalWord { word: "milk", age_months: 12, strategy: "Name it before each feeding and sign it at the same time." },
    TypicalWord { word: "more", age_months: 13, strategy: "Offer small portions at snack time and wait for a request." },
    TypicalWord { word: "up", age_months: 13, strategy: "Say it as you lift your child, and pause with arms out before lifting." },
    TypicalWord { word: "cat", age_months: 14, strategy: "Make the sound a cat makes and then say the word." },
    TypicalWord { word: "shoe", age_months: 14, strategy: "Name each shoe while getting dressed." },
    TypicalWord { word: "eat", age_months: 15, strategy: "Narrate meals: \"we eat\" with a hand-to-mouth gesture." },
    TypicalWord { word: "book", age_months: 15, strategy: "Let your child pick a book and name it before reading." },
    TypicalWord { word: "all done", age_months: 16, strategy: "Sign and say it at the end of meals and activities." },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeWord {
    pub word: String,
    pub typical_age: Option<u32>,
    pub in_vocabulary: bool,
    pub confidence: u8,
    pub strategy: &'static str,
}

fn lookup(word: &str) -> Option<&'static TypicalWord> {
    TYPICAL_WORDS
        .iter()
        .find(|t| t.word.eq_ignore_ascii_case(word))
}

/// Up to [`PRACTICE_COUNT`] words to focus on.
pub fn practice_words(words: &[WordEntry]) -> Vec<PracticeWord> {
    let mut suggestions: Vec<PracticeWord> = words
        .iter()
        .filter(|w| w.confidence.unwrap_or(0) < LOW_CONFIDENCE)
        .map(|w| {
            let typical = lookup(&w.word);
            PracticeWord {
                word: w.word.clone(),
                typical_age: typical.map(|t| t.age_months),
                in_vocabulary: true,
                confidence: w.confidence.unwrap_or(0),
                strategy: typical.map_or(DEFAULT_STRATEGY, |t| t.strategy),
            }
        })
        .collect();

    // Stable sort keeps entry order among equal ages.
    suggestions.sort_by_key(|p| p.typical_age.unwrap_or(UNLISTED_AGE));
    suggestions.truncate(PRACTICE_COUNT);

    if suggestions.len() < PRACTICE_COUNT {
        let known: HashSet<String> = words.iter().map(|w| w.word.to_lowercase()).collect();
        let fill = TYPICAL_WORDS
            .iter()
            .filter(|t| !known.contains(t.word))
            .take(PRACTICE_COUNT - suggestions.len())
            .map(|t| PracticeWord {
                word: t.word.to_string(),
                typical_age: Some(t.age_months),
                in_vocabulary: false,
                confidence: 0,
                strategy: t.strategy,
            });
        suggestions.extend(fill);
    }

    suggestions
}
