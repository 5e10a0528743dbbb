use std::fmt;

/// Errors returned by fallible operations layered on top of the core index.
///
/// The core's own `add`/`remove`/`get`/`reverse`/`count` report invalid
/// input through plain `bool`/sentinel/no-op return values, per the
/// index's external interface — they never need this type. It exists for
/// the collaborators built on top of the core (the CLI and the snapshot
/// loader), which need to tell a caller *why* something failed.
#[derive(Debug, PartialEq, Eq)]
pub enum ForwardError {
    /// The given string is not a well-formed phone number (empty, or
    /// contains a character outside `0123456789:;`).
    NotANumber(String),
    /// `add` was asked to forward a prefix to itself.
    SourceEqualsTarget(String),
    /// A snapshot (see [`crate::snapshot`]) named a base that does not
    /// exist in the registry it is being replayed into.
    UnknownBase(String),
    /// A rule in a replayed snapshot was rejected by `add`.
    RuleRejected { src: String, dst: String },
}

impl fmt::Display for ForwardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ForwardError::NotANumber(s) => {
                write!(f, "'{s}' is not a valid phone number")
            }
            ForwardError::SourceEqualsTarget(s) => {
                write!(f, "cannot forward '{s}' to itself")
            }
            ForwardError::UnknownBase(id) => {
                write!(f, "no base registered under id '{id}'")
            }
            ForwardError::RuleRejected { src, dst } => {
                write!(f, "rule '{src}' -> '{dst}' was rejected")
            }
        }
    }
}

impl std::error::Error for ForwardError {}
