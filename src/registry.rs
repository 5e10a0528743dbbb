use std::collections::HashMap;

use crate::base::ForwardingBase;
use crate::config::Config;

/// A named collection of [`ForwardingBase`]s.
///
/// The core index itself has no notion of identifiers — a base is just a
/// value. This registry is the thin, single-threaded analogue of the
/// original interpreter's `NEW`/`DELETE` commands, which let a script
/// manage several independent bases by name in one process.
#[derive(Default)]
pub struct BaseRegistry {
    bases: HashMap<String, ForwardingBase>,
    config: Config,
}

impl BaseRegistry {
    pub fn new() -> Self {
        BaseRegistry {
            bases: HashMap::new(),
            config: Config::default(),
        }
    }

    pub fn with_config(config: Config) -> Self {
        BaseRegistry {
            bases: HashMap::new(),
            config,
        }
    }

    /// Creates a fresh, empty base under `id`, replacing any base
    /// previously registered there.
    pub fn create(&mut self, id: &str) {
        self.bases
            .insert(id.to_owned(), ForwardingBase::with_config(self.config));
    }

    pub fn get(&self, id: &str) -> Option<&ForwardingBase> {
        self.bases.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut ForwardingBase> {
        self.bases.get_mut(id)
    }

    /// Drops the base registered under `id`, if any.
    pub fn remove(&mut self, id: &str) {
        self.bases.remove(id);
    }

    /// Every registered identifier, in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bases.keys().map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.bases.contains_key(id)
    }
}
