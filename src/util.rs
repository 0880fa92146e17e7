use crate::constants::scheme::DELIMITER;

#[doc(hidden)]
pub fn equals_ignore_ascii_case(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    a.len() == b.len() && a.eq_ignore_ascii_case(b)
}

/// Returns the scheme component of `value` when it starts with one.
///
/// A scheme is an ASCII letter followed by letters, digits, `+`, `-` or `.`,
/// terminated by `:`.
#[doc(hidden)]
pub fn scheme_of(value: &str) -> Option<&str> {
    let (candidate, _) = value.split_once(DELIMITER)?;
    is_scheme(candidate).then_some(candidate)
}

pub(crate) fn is_scheme(value: &str) -> bool {
    let mut bytes = value.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }

    bytes.all(|byte| matches!(byte, b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z' | b'+' | b'-' | b'.'))
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
