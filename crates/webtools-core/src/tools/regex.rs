//! Regular expression testing with JavaScript-style flags.

use std::str::FromStr;

use regex::{Regex, RegexBuilder};

use crate::error::RegexError;

/// Compiled program size limit, keeps pathological patterns from stalling
/// the page.
const SIZE_LIMIT: usize = 1 << 20;

/// Matches reported before the list is truncated.
pub const MAX_MATCHES: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    /// `i`
    pub case_insensitive: bool,
    /// `m`: `^` and `$` match at line boundaries
    pub multi_line: bool,
    /// `s`: `.` matches `\n`
    pub dot_all: bool,
    /// `x`
    pub ignore_whitespace: bool,
    /// `g`: report and replace every match instead of the first
    pub global: bool,
}

impl FromStr for Flags {
    type Err = RegexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Flags::default();
        for c in s.chars() {
            match c {
                'i' => flags.case_insensitive = true,
                'm' => flags.multi_line = true,
                's' => flags.dot_all = true,
                'x' => flags.ignore_whitespace = true,
                'g' => flags.global = true,
                c if c.is_whitespace() => {}
                other => return Err(RegexError::UnknownFlag(other)),
            }
        }
        Ok(flags)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub index: usize,
    pub name: Option<String>,
    /// `None` when the group did not participate in the match.
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchInfo {
    /// Byte offsets into the haystack.
    pub start: usize,
    pub end: usize,
    pub text: String,
    /// Capture groups, excluding the whole match.
    pub groups: Vec<Group>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    pub matches: Vec<MatchInfo>,
    /// More than [`MAX_MATCHES`] matches were found.
    pub truncated: bool,
}

/// A compiled pattern together with its flags.
#[derive(Debug, Clone)]
pub struct Tester {
    regex: Regex,
    global: bool,
}

impl Tester {
    pub fn new(pattern: &str, flags: Flags) -> Result<Self, RegexError> {
        if pattern.is_empty() {
            return Err(RegexError::EmptyPattern);
        }

        let regex = RegexBuilder::new(pattern)
            .case_insensitive(flags.case_insensitive)
            .multi_line(flags.multi_line)
            .dot_matches_new_line(flags.dot_all)
            .ignore_whitespace(flags.ignore_whitespace)
            .size_limit(SIZE_LIMIT)
            .build()
            .map_err(|e| RegexError::Compile(e.to_string()))?;

        Ok(Self {
            regex,
            global: flags.global,
        })
    }

    /// Parse the flag string and compile.
    pub fn with_flag_str(pattern: &str, flags: &str) -> Result<Self, RegexError> {
        Self::new(pattern, flags.parse()?)
    }

    /// Number of capture groups, excluding the whole match.
    pub fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    pub fn find(&self, haystack: &str) -> MatchReport {
        let names: Vec<Option<&str>> = self.regex.capture_names().collect();
        let limit = if self.global { MAX_MATCHES } else { 1 };

        let mut captures = self.regex.captures_iter(haystack);
        let matches: Vec<MatchInfo> = captures
            .by_ref()
            .take(limit)
            .map(|caps| {
                let whole = caps.get(0).expect("group 0 always participates");
                MatchInfo {
                    start: whole.start(),
                    end: whole.end(),
                    text: whole.as_str().to_string(),
                    groups: (1..caps.len())
                        .map(|index| Group {
                            index,
                            name: names[index].map(str::to_string),
                            text: caps.get(index).map(|m| m.as_str().to_string()),
                        })
                        .collect(),
                }
            })
            .collect();

        let truncated = self.global && captures.next().is_some();
        MatchReport { matches, truncated }
    }

    /// Replace the first match, or every match with the `g` flag.
    ///
    /// `$1` and `${name}` refer to capture groups; `$$` is a literal `$`.
    pub fn replace(&self, haystack: &str, replacement: &str) -> String {
        if self.global {
            self.regex.replace_all(haystack, replacement).into_owned()
        } else {
            self.regex.replace(haystack, replacement).into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let flags: Flags = "gim".parse().unwrap();
        assert!(flags.global && flags.case_insensitive && flags.multi_line);
        assert!(!flags.dot_all);
        assert_eq!("gq".parse::<Flags>(), Err(RegexError::UnknownFlag('q')));
        assert_eq!("".parse::<Flags>(), Ok(Flags::default()));
    }

    #[test]
    fn test_first_match_without_global() {
        let tester = Tester::with_flag_str(r"\d+", "").unwrap();
        let report = tester.find("a1 b22 c333");
        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].text, "1");
        assert!(!report.truncated);
    }

    #[test]
    fn test_global_matches_with_offsets() {
        let tester = Tester::with_flag_str(r"\d+", "g").unwrap();
        let report = tester.find("a1 b22 c333");
        let spans: Vec<_> = report.matches.iter().map(|m| (m.start, m.end)).collect();
        assert_eq!(spans, [(1, 2), (4, 6), (8, 11)]);
    }

    #[test]
    fn test_named_and_optional_groups() {
        let tester = Tester::with_flag_str(r"(?P<key>\w+)=(\d+)?", "g").unwrap();
        assert_eq!(tester.group_count(), 2);

        let report = tester.find("a=1 b=");
        assert_eq!(
            report.matches[0].groups,
            [
                Group {
                    index: 1,
                    name: Some("key".to_string()),
                    text: Some("a".to_string()),
                },
                Group {
                    index: 2,
                    name: None,
                    text: Some("1".to_string()),
                },
            ]
        );
        assert_eq!(report.matches[1].groups[1].text, None);
    }

    #[test]
    fn test_flags_change_matching() {
        let text = "Hello\nhello";
        assert_eq!(Tester::with_flag_str("^hello", "g").unwrap().find(text).matches.len(), 0);
        assert_eq!(Tester::with_flag_str("^hello", "gim").unwrap().find(text).matches.len(), 2);
        assert_eq!(Tester::with_flag_str("o.h", "").unwrap().find(text).matches.len(), 0);
        assert_eq!(Tester::with_flag_str("o.h", "s").unwrap().find(text).matches.len(), 1);
    }

    #[test]
    fn test_replace() {
        let first = Tester::with_flag_str(r"(\w+)@(\w+)", "").unwrap();
        assert_eq!(first.replace("a@b c@d", "$2@$1"), "b@a c@d");

        let all = Tester::with_flag_str(r"(?P<w>\w+)@(\w+)", "g").unwrap();
        assert_eq!(all.replace("a@b c@d", "[${w}]"), "[a] [c]");
    }

    #[test]
    fn test_truncation() {
        let tester = Tester::with_flag_str("a", "g").unwrap();
        let report = tester.find(&"a".repeat(MAX_MATCHES + 5));
        assert_eq!(report.matches.len(), MAX_MATCHES);
        assert!(report.truncated);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(Tester::with_flag_str("", ""), Err(RegexError::EmptyPattern)));
        assert!(matches!(
            Tester::with_flag_str("(unclosed", ""),
            Err(RegexError::Compile(_))
        ));
    }
}
