use crate::constants::limits::MAX_PATTERN_LENGTH;
use crate::url::ReturnUrl;
use crate::util::equals_ignore_ascii_case;
use regex_automata::meta::{BuildError, Regex};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile return URL pattern")]
    Build(#[source] Box<BuildError>),
    #[error("return URL pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

/// Predicate over a [`ReturnUrl`] used by [`MatcherClient`](crate::MatcherClient).
#[derive(Clone, Debug)]
pub enum ReturnUrlMatcher {
    /// Scheme equality, ignoring ASCII case.
    Scheme(String),
    /// Case-sensitive prefix of the raw URL.
    Prefix(String),
    /// Case-insensitive regular expression over the raw URL.
    Pattern(Regex),
    Bool(bool),
    /// Matches when any nested matcher does.
    Any(Vec<ReturnUrlMatcher>),
}

impl ReturnUrlMatcher {
    pub fn scheme<S: Into<String>>(value: S) -> Self {
        Self::Scheme(value.into())
    }

    pub fn prefix<S: Into<String>>(value: S) -> Self {
        Self::Prefix(value.into())
    }

    pub fn pattern(regex: Regex) -> Self {
        Self::Pattern(regex)
    }

    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        Self::compile_pattern(pattern).map(Self::Pattern)
    }

    pub fn any<I, T>(matchers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ReturnUrlMatcher>,
    {
        Self::Any(matchers.into_iter().map(Into::into).collect())
    }

    fn compile_pattern(pattern: &str) -> Result<Regex, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        Regex::new(&format!("(?i:{pattern})")).map_err(|err| PatternError::Build(Box::new(err)))
    }

    pub fn matches(&self, url: &ReturnUrl) -> bool {
        match self {
            ReturnUrlMatcher::Scheme(expected) => url
                .scheme()
                .is_some_and(|scheme| equals_ignore_ascii_case(expected, scheme)),
            ReturnUrlMatcher::Prefix(prefix) => url.as_str().starts_with(prefix.as_str()),
            ReturnUrlMatcher::Pattern(regex) => regex.is_match(url.as_str()),
            ReturnUrlMatcher::Bool(value) => *value,
            ReturnUrlMatcher::Any(matchers) => matchers.iter().any(|matcher| matcher.matches(url)),
        }
    }
}

impl From<bool> for ReturnUrlMatcher {
    fn from(value: bool) -> Self {
        ReturnUrlMatcher::Bool(value)
    }
}

impl From<Regex> for ReturnUrlMatcher {
    fn from(value: Regex) -> Self {
        ReturnUrlMatcher::Pattern(value)
    }
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod matcher_test;
