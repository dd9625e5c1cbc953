//! Ant-style URL pattern matching for the chain map.
//!
//! # Pattern Syntax
//! - `?` matches exactly one character
//! - `*` matches zero or more characters within a path segment
//! - `**` matches zero or more path segments
//!
//! Only match/no-match is needed here; there is no variable capture.
//!
//! # Spring Equivalent
//! `org.springframework.util.AntPathMatcher`

/// Ant-style path matcher.
#[derive(Debug, Clone)]
pub struct UrlMatcher {
    pattern: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    /// Literal text, no wildcards
    Literal(String),
    /// Single segment wildcard (*)
    Any,
    /// Multi-segment wildcard (**)
    AnyPath,
    /// Segment containing `*` or `?`
    Glob(String),
}

impl UrlMatcher {
    pub fn new(pattern: &str) -> Self {
        let segments = pattern
            .trim_start_matches('/')
            .split('/')
            .filter(|part| !part.is_empty())
            .map(|part| {
                if part == "**" {
                    Segment::AnyPath
                } else if part == "*" {
                    Segment::Any
                } else if part.contains('*') || part.contains('?') {
                    Segment::Glob(part.to_string())
                } else {
                    Segment::Literal(part.to_string())
                }
            })
            .collect();

        UrlMatcher {
            pattern: pattern.to_string(),
            segments,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self, path: &str) -> bool {
        let parts: Vec<&str> = path
            .trim_start_matches('/')
            .split('/')
            .filter(|part| !part.is_empty())
            .collect();

        match_segments(&self.segments, &parts)
    }
}

fn match_segments(segments: &[Segment], parts: &[&str]) -> bool {
    match segments.split_first() {
        None => parts.is_empty(),
        Some((Segment::AnyPath, rest)) => {
            // `**` consumes zero or more whole segments
            if match_segments(rest, parts) {
                return true;
            }
            !parts.is_empty() && match_segments(segments, &parts[1..])
        }
        Some((segment, rest)) => match parts.split_first() {
            Some((head, tail)) => segment_matches(segment, head) && match_segments(rest, tail),
            None => false,
        },
    }
}

fn segment_matches(segment: &Segment, part: &str) -> bool {
    match segment {
        Segment::Literal(literal) => literal == part,
        Segment::Any | Segment::AnyPath => true,
        Segment::Glob(glob) => glob_matches(glob, part),
    }
}

/// Matches `*` and `?` wildcards within a single path segment.
fn glob_matches(pattern: &str, text: &str) -> bool {
    fn rec(pattern: &[char], text: &[char]) -> bool {
        match pattern.split_first() {
            None => text.is_empty(),
            Some((&'*', rest)) => rec(rest, text) || (!text.is_empty() && rec(pattern, &text[1..])),
            Some((&'?', rest)) => !text.is_empty() && rec(rest, &text[1..]),
            Some((&c, rest)) => text.first() == Some(&c) && rec(rest, &text[1..]),
        }
    }

    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    rec(&pattern, &text)
}
