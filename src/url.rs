use crate::util::scheme_of;
use std::fmt;

/// Opaque URL delivered to the host application when an external app hands
/// control back.
///
/// The value is never validated; `"my-url.com"` is as acceptable as
/// `"com.example.payments://x-callback-url/success"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ReturnUrl(String);

impl ReturnUrl {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn scheme(&self) -> Option<&str> {
        scheme_of(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ReturnUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ReturnUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for ReturnUrl {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ReturnUrl {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl PartialEq<str> for ReturnUrl {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ReturnUrl {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
#[path = "url_test.rs"]
mod url_test;
