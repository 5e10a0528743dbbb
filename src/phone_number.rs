use crate::digit::is_number;
use std::fmt;
use std::ops::Deref;

/// A non-empty string over the twelve-digit alphabet.
///
/// Equality and ordering are simply those of the underlying `String`:
/// since the alphabet's characters (`0123456789:;`) are already in
/// ascending ASCII order, byte-wise `String` comparison is exactly the
/// lexicographic digit ordering the spec requires — no custom `Ord` impl
/// is needed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parses `s` as a `PhoneNumber`, rejecting empty strings and any
    /// character outside the digit alphabet.
    pub fn parse(s: &str) -> Option<Self> {
        is_number(s).then(|| PhoneNumber(s.to_owned()))
    }

    /// Builds a `PhoneNumber` by concatenating `prefix` and `suffix`.
    ///
    /// Both parts are assumed already validated (this is used internally
    /// to splice a matched rule's target onto the unmatched remainder of
    /// a query, or a rule's source onto the remainder consumed during a
    /// reverse lookup); it does not re-validate the alphabet.
    pub(crate) fn concat(prefix: &str, suffix: &str) -> Self {
        let mut joined = String::with_capacity(prefix.len() + suffix.len());
        joined.push_str(prefix);
        joined.push_str(suffix);
        PhoneNumber(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for PhoneNumber {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
