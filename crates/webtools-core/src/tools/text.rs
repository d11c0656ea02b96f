//! Text statistics and transformations.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Average silent reading speed used for the reading time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n").expect("paragraph pattern is valid"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextStats {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
    pub lines: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    /// Rounded up to whole minutes.
    pub reading_minutes: usize,
}

/// Count characters, words, lines, sentences and paragraphs.
///
/// Characters are counted after NFC normalization so that composed and
/// decomposed forms of the same text agree.
pub fn stats(text: &str) -> TextStats {
    let normalized: String = text.nfc().collect();
    let words = normalized.split_whitespace().count();

    TextStats {
        characters: normalized.chars().count(),
        characters_no_spaces: normalized.chars().filter(|c| !c.is_whitespace()).count(),
        words,
        lines: if normalized.is_empty() {
            0
        } else {
            normalized.lines().count()
        },
        sentences: normalized
            .split(['.', '!', '?'])
            .filter(|s| s.chars().any(char::is_alphanumeric))
            .count(),
        paragraphs: PARAGRAPH_BREAK
            .split(&normalized)
            .filter(|p| !p.trim().is_empty())
            .count(),
        reading_minutes: words.div_ceil(WORDS_PER_MINUTE),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Upper,
    Lower,
    Title,
    Sentence,
    Camel,
    Snake,
    Kebab,
    Reverse,
    TrimLines,
    RemoveEmptyLines,
    DedupeLines,
    SortLines,
}

impl Transform {
    pub const ALL: [Transform; 12] = [
        Self::Upper,
        Self::Lower,
        Self::Title,
        Self::Sentence,
        Self::Camel,
        Self::Snake,
        Self::Kebab,
        Self::Reverse,
        Self::TrimLines,
        Self::RemoveEmptyLines,
        Self::DedupeLines,
        Self::SortLines,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Upper => "UPPERCASE",
            Self::Lower => "lowercase",
            Self::Title => "Title Case",
            Self::Sentence => "Sentence case",
            Self::Camel => "camelCase",
            Self::Snake => "snake_case",
            Self::Kebab => "kebab-case",
            Self::Reverse => "Reverse",
            Self::TrimLines => "Trim lines",
            Self::RemoveEmptyLines => "Remove empty lines",
            Self::DedupeLines => "Remove duplicate lines",
            Self::SortLines => "Sort lines",
        }
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Upper => text.to_uppercase(),
            Self::Lower => text.to_lowercase(),
            Self::Title => title_case(text),
            Self::Sentence => sentence_case(text),
            Self::Camel => camel_case(text),
            Self::Snake => split_words(text).join("_"),
            Self::Kebab => split_words(text).join("-"),
            Self::Reverse => text.nfc().collect::<String>().chars().rev().collect(),
            Self::TrimLines => map_lines(text, |lines| lines.map(str::trim).collect()),
            Self::RemoveEmptyLines => {
                map_lines(text, |lines| lines.filter(|l| !l.trim().is_empty()).collect())
            }
            Self::DedupeLines => map_lines(text, |lines| {
                let mut seen = HashSet::new();
                lines.filter(|l| seen.insert(*l)).collect()
            }),
            Self::SortLines => map_lines(text, |lines| {
                let mut sorted: Vec<&str> = lines.collect();
                sorted.sort_unstable();
                sorted
            }),
        }
    }
}

fn map_lines<'a>(
    text: &'a str,
    f: impl FnOnce(std::str::Lines<'a>) -> Vec<&'a str>,
) -> String {
    f(text.lines()).join("\n")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

fn sentence_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut capitalize_next = true;
    for c in text.chars() {
        if capitalize_next && c.is_alphabetic() {
            out.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            out.extend(c.to_lowercase());
            if matches!(c, '.' | '!' | '?') {
                capitalize_next = true;
            }
        }
    }
    out
}

/// Lowercased words, split on non-alphanumerics and on case boundaries
/// (`parseHTTPResponse` becomes `parse`, `http`, `response`).
fn split_words(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.extend(c.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn camel_case(text: &str) -> String {
    let mut words = split_words(text).into_iter();
    let Some(first) = words.next() else {
        return String::new();
    };
    words.fold(first, |mut acc, word| {
        acc.push_str(&capitalize(&word));
        acc
    })
}
