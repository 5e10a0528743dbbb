//! Exchange of a base's active rule set with the outside world.
//!
//! This is deliberately *not* persistence of trie state (a Non-goal): a
//! snapshot only ever records the set of `(src, dst)` pairs currently
//! active, and rebuilding a base from one means replaying `add` for each
//! pair in file order. Node identity, topology, and internal list order
//! are never observed or reproduced.

use serde_derive::{Deserialize, Serialize};

use crate::base::ForwardingBase;
use crate::errors::ForwardError;

/// One active rule, as exchanged with a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    pub src: String,
    pub dst: String,
}

/// A flat list of rules, in the order they should be replayed.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Snapshot {
    pub rules: Vec<Rule>,
}

impl Snapshot {
    /// Walks the trie and records every active rule, ordered first by
    /// source length and then lexicographically — a stable order useful
    /// for diffing two snapshots, though the spec gives no ordering
    /// guarantee for the underlying trie itself.
    pub fn capture(base: &ForwardingBase) -> Self {
        let mut rules: Vec<Rule> = base
            .rules()
            .map(|(src, dst)| Rule {
                src: src.to_owned(),
                dst: dst.to_owned(),
            })
            .collect();
        rules.sort_by(|a, b| (a.src.len(), &a.src).cmp(&(b.src.len(), &b.src)));
        Snapshot { rules }
    }

    /// Replays every rule into `base`, in file order, stopping at the
    /// first one `add` rejects.
    pub fn replay_into(&self, base: &mut ForwardingBase) -> Result<(), ForwardError> {
        for rule in &self.rules {
            if !base.add(&rule.src, &rule.dst) {
                return Err(ForwardError::RuleRejected {
                    src: rule.src.clone(),
                    dst: rule.dst.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
