//! A trie-based index of phone-number prefix forwarding rules.
//!
//! Given a rule `A -> B`, any number beginning with `A` is forwarded so
//! that its leading `A` is replaced with `B`. [`ForwardingBase`] answers
//! three questions about a set of such rules: the forward rewrite of a
//! number ([`ForwardingBase::get`]), every number that forwards to a
//! given one ([`ForwardingBase::reverse`]), and how many same-length
//! numbers over a given digit set are non-trivially forwarded
//! ([`ForwardingBase::count`]).
//!
//! # Non-goals
//!
//! Persistence of trie state, concurrent access to a single base, network
//! exposure, Unicode digit alphabets, numeric/arithmetic interpretation of
//! phone numbers, and locale-aware ordering are all out of scope. The
//! [`snapshot`] module's JSON export is a convenience for exchanging a
//! rule *set* between processes, not trie persistence, and is only built
//! under the `cli` feature.

pub mod base;
pub mod config;
pub mod digit;
pub mod errors;
pub mod number_list;
pub mod phone_number;
pub mod registry;

pub(crate) mod node;

#[cfg(feature = "cli")]
pub mod snapshot;

pub use base::ForwardingBase;
pub use config::Config;
pub use errors::ForwardError;
pub use number_list::NumberList;
pub use phone_number::PhoneNumber;
pub use registry::BaseRegistry;

#[cfg(feature = "cli")]
pub use snapshot::{Rule, Snapshot};
