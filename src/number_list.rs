use crate::phone_number::PhoneNumber;

/// An ordered sequence of phone numbers returned by a query, or held
/// inside a trie node as the unordered list of rule sources forwarding to
/// it.
///
/// The same type backs both use-sites the spec distinguishes:
///
/// - as the *unsorted* inverse-link list at a node (`append`,
///   `delete_exact`, `delete_with_prefix`, `iter` — membership-unique per
///   node, no ordering maintained);
/// - as the *sorted unique* result of [`crate::ForwardingBase::reverse`]
///   (built exclusively through `sorted_insert`, which keeps the list
///   strictly increasing and silently discards duplicates).
///
/// A third state, the *sentinel*, represents "no result" (the input to
/// `get`/`reverse` was not a valid phone number). It carries no entries
/// and can only be produced by [`NumberList::sentinel`], so a real result
/// list — even an empty one — can never be mistaken for it.
#[derive(Debug, Clone, Default)]
pub struct NumberList {
    entries: Vec<PhoneNumber>,
    is_sentinel: bool,
}

impl NumberList {
    /// An empty, non-sentinel list.
    pub fn new() -> Self {
        NumberList {
            entries: Vec::new(),
            is_sentinel: false,
        }
    }

    /// An empty, non-sentinel list that pre-reserves room for `capacity`
    /// entries before its first reallocation.
    ///
    /// Used for a fresh node's inverse-link list, where
    /// [`crate::Config::inverse_list_capacity_hint`] lets a caller avoid
    /// repeated small reallocations on a workload that adds several rules
    /// per target prefix.
    pub fn with_capacity(capacity: usize) -> Self {
        NumberList {
            entries: Vec::with_capacity(capacity),
            is_sentinel: false,
        }
    }

    /// A list holding exactly one number (the typical shape of `get`'s
    /// result).
    pub fn single(number: PhoneNumber) -> Self {
        NumberList {
            entries: vec![number],
            is_sentinel: false,
        }
    }

    /// The "no result" marker returned when a query's input is not a
    /// valid phone number.
    pub fn sentinel() -> Self {
        NumberList {
            entries: Vec::new(),
            is_sentinel: true,
        }
    }

    /// `true` iff this is the sentinel produced for invalid input.
    pub fn is_sentinel(&self) -> bool {
        self.is_sentinel
    }

    /// Number of entries (zero for the sentinel).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `idx`-th string, or `None` if `idx` is out of range or this is
    /// the sentinel list.
    pub fn get_at(&self, idx: usize) -> Option<&str> {
        if self.is_sentinel {
            return None;
        }
        self.entries.get(idx).map(PhoneNumber::as_str)
    }

    /// Appends `s` to the unordered (node-local) flavor of the list.
    ///
    /// O(1). The caller is responsible for ensuring `s` is not already
    /// present — this mirrors the spec's contract and avoids an O(n)
    /// membership scan on every `add`.
    pub fn append(&mut self, s: PhoneNumber) {
        self.entries.push(s);
    }

    /// Removes the unique entry equal to `s`, if any.
    pub fn delete_exact(&mut self, s: &str) {
        if let Some(pos) = self.entries.iter().position(|e| e.as_str() == s) {
            self.entries.remove(pos);
        }
    }

    /// Removes every entry that starts with `prefix`.
    pub fn delete_with_prefix(&mut self, prefix: &str) {
        self.entries.retain(|e| !e.as_str().starts_with(prefix));
    }

    /// Iterates the list in whatever order it is currently stored.
    pub fn iter(&self) -> impl Iterator<Item = &PhoneNumber> {
        self.entries.iter()
    }

    /// Inserts `s` into a list maintained in strictly increasing order,
    /// discarding `s` if an equal element is already present.
    pub fn sorted_insert(&mut self, s: PhoneNumber) {
        match self.entries.binary_search(&s) {
            Ok(_) => {} // already present — spec requires silent dedup
            Err(pos) => self.entries.insert(pos, s),
        }
    }

    /// Releases the list's entries.
    ///
    /// Rust's ownership model already frees a `NumberList`'s backing
    /// storage when it is dropped; this method exists only so the type's
    /// public surface mirrors the spec's `destroy` operation, for callers
    /// translating the external interface table literally.
    pub fn destroy(self) {
        drop(self);
    }
}
