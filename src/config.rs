/// Tunable knobs for a [`crate::ForwardingBase`].
///
/// None of these affect the *observable* behavior of `add`/`remove`/`get`/
/// `reverse`/`count` — they only affect how the work is done internally.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// When `add(src, dst)` is called and `src` already forwards to
    /// `dst` (i.e. the rule is unchanged), skip the remove-then-reinsert
    /// of the inverse-list entry the reference behavior always performs.
    ///
    /// Spec open question: "an optimization may detect and skip, but
    /// behavior must be indistinguishable." Decided in `DESIGN.md`: off
    /// by default, so a freshly built base matches the reference
    /// implementation's traversal pattern exactly; callers that know
    /// their workload re-adds unchanged rules frequently can opt in.
    pub skip_redundant_reinsert: bool,

    /// Number of entries to reserve up front in a freshly created node's
    /// inverse-link list (`forward_from`).
    ///
    /// A node is created with an empty list regardless; this only avoids
    /// the first few reallocations on a workload that routinely installs
    /// several rules targeting the same prefix. `0` (the default)
    /// reserves nothing, matching `Vec::new()`.
    pub inverse_list_capacity_hint: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            skip_redundant_reinsert: false,
            inverse_list_capacity_hint: 0,
        }
    }
}
