use std::collections::HashSet;

use crate::config::Config;
use crate::digit::{from_index, is_number, to_index, DIGIT_COUNT};
use crate::node::Node;
use crate::number_list::NumberList;
use crate::phone_number::PhoneNumber;

/// The owner of a prefix trie and the five operations defined over it:
/// `add`, `remove`, `get`, `reverse`, `count`.
///
/// A `ForwardingBase` is an ordinary owned value — there is no shared or
/// interior mutability anywhere in it, so it is `Send` whenever `Node` is
/// (trivially, since `Node` holds only owned data), but it is not
/// designed for concurrent access: per spec, callers must serialize their
/// own calls.
pub struct ForwardingBase {
    root: Box<Node>,
    config: Config,
}

impl Default for ForwardingBase {
    fn default() -> Self {
        Self::new()
    }
}

impl ForwardingBase {
    /// An empty base: one root node, no rules.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        ForwardingBase {
            root: Box::new(Node::with_capacity_hint(config.inverse_list_capacity_hint)),
            config,
        }
    }

    fn digits_of(s: &str) -> Vec<usize> {
        s.chars()
            .map(|ch| to_index(ch).expect("validated PhoneNumber"))
            .collect()
    }

    /// Walks `path`, creating any missing nodes along the way, and
    /// returns the node at its end. Every newly created node reserves
    /// `capacity_hint` entries in its inverse-link list up front.
    fn descend_create<'a>(root: &'a mut Node, path: &str, capacity_hint: usize) -> &'a mut Node {
        let mut node = root;
        for ch in path.chars() {
            let idx = to_index(ch).expect("validated PhoneNumber");
            let slot = &mut node.children[idx];
            if slot.is_none() {
                log::trace!("descend_create: created node for digit '{ch}'");
            }
            node = slot.get_or_insert_with(|| Box::new(Node::with_capacity_hint(capacity_hint)));
        }
        node
    }

    /// Like `descend_create`, but never creates nodes; `None` if `path`
    /// is not currently present in the trie.
    fn descend<'a>(root: &'a Node, path: &str) -> Option<&'a Node> {
        let mut node = root;
        for ch in path.chars() {
            let idx = to_index(ch).expect("validated PhoneNumber");
            node = node.children[idx].as_deref()?;
        }
        Some(node)
    }

    fn descend_mut<'a>(root: &'a mut Node, path: &str) -> Option<&'a mut Node> {
        let mut node = root;
        for ch in path.chars() {
            let idx = to_index(ch).expect("validated PhoneNumber");
            node = node.children[idx].as_deref_mut()?;
        }
        Some(node)
    }

    /// Installs a rule `src -> dst`, replacing any prior rule for `src`.
    ///
    /// Fails (returns `false`, leaving the base unchanged) when `src` or
    /// `dst` is not a valid phone number, or when they are equal.
    pub fn add(&mut self, src: &str, dst: &str) -> bool {
        let src_num = match PhoneNumber::parse(src) {
            Some(n) => n,
            None => {
                log::warn!("add: '{src}' is not a valid phone number");
                return false;
            }
        };
        let dst_num = match PhoneNumber::parse(dst) {
            Some(n) => n,
            None => {
                log::warn!("add: '{dst}' is not a valid phone number");
                return false;
            }
        };
        if src_num == dst_num {
            log::warn!("add: refusing to forward '{src}' to itself");
            return false;
        }

        // Three short, sequential descents rather than one held mutable
        // reference: the source node, its old target (if any), and the
        // new target are not generally on the same root-to-leaf path, so
        // a single borrow can't span all of them.
        let hint = self.config.inverse_list_capacity_hint;
        let old_dst = Self::descend_create(&mut self.root, src_num.as_str(), hint)
            .forward_to
            .clone();

        if let Some(old) = &old_dst {
            if self.config.skip_redundant_reinsert && old.as_str() == dst_num.as_str() {
                log::trace!("add: '{src}' already forwards to '{dst}', skipping");
                return true;
            }
            let old_target = Self::descend_create(&mut self.root, old.as_str(), hint);
            old_target.forward_from.delete_exact(src_num.as_str());
            log::debug!("add: cleared stale inverse entry '{src}' at '{old}'");
        }

        Self::descend_create(&mut self.root, src_num.as_str(), hint).forward_to =
            Some(dst_num.clone());
        Self::descend_create(&mut self.root, dst_num.as_str(), hint)
            .forward_from
            .append(src_num.clone());
        log::trace!("add: inverse-link list mutated at '{dst_num}'");

        log::debug!("add: installed rule '{src_num}' -> '{dst_num}'");
        true
    }

    /// Removes every active rule whose source starts with `prefix`.
    ///
    /// A no-op if `prefix` is not a valid phone number or is not
    /// currently the source of any rule (directly or through a
    /// descendant). Rules that merely *target* something under `prefix`
    /// are untouched.
    pub fn remove(&mut self, prefix: &str) {
        if !is_number(prefix) {
            return;
        }
        let digits = Self::digits_of(prefix);

        let Some(subtree_root) = Self::descend(&self.root, prefix) else {
            return;
        };

        // Pass 1 (read-only): every distinct target this subtree still
        // forwards to.
        let mut targets = HashSet::new();
        Self::collect_forward_targets(subtree_root, &mut targets);

        // Pass 2: for each target, drop every inverse entry that starts
        // with `prefix` — every source in the removed subtree starts with
        // `prefix` by construction, so this is exactly the set of entries
        // this removal invalidates. A target node can lose its last
        // remaining role here (no more inverse entries, no forward_to of
        // its own, no live children) without ever being on the path
        // touched by pass 3, so it needs its own prune-on-the-way-back.
        for target in &targets {
            if let Some(target_node) = Self::descend_mut(&mut self.root, target) {
                target_node.forward_from.delete_with_prefix(prefix);
                log::trace!("remove: dropped inverse entries under '{prefix}' at '{target}'");
            }
            let target_digits = Self::digits_of(target);
            Self::prune_path(&mut self.root, &target_digits, 0);
        }

        // Pass 3: clear outgoing forwards within the subtree and prune
        // whatever becomes empty, cascading up to (but never including)
        // the root.
        Self::remove_to(&mut self.root, &digits, 0);

        log::debug!("remove: cleared outgoing rules under '{prefix}'");
    }

    /// Descends to the node at `digits[depth..]`, unlinking any node that
    /// is empty on the way back up (the root is never unlinked). Unlike
    /// `remove_to`, this never mutates `forward_to` or `forward_from`
    /// itself — it only prunes nodes some earlier step already emptied.
    fn prune_path(node: &mut Node, digits: &[usize], depth: usize) -> bool {
        if depth == digits.len() {
            return node.is_empty();
        }
        let idx = digits[depth];
        if let Some(child) = node.children[idx].as_mut() {
            if Self::prune_path(child, digits, depth + 1) {
                node.children[idx] = None;
            }
        }
        node.is_empty()
    }

    fn collect_forward_targets(node: &Node, targets: &mut HashSet<String>) {
        if let Some(target) = &node.forward_to {
            targets.insert(target.as_str().to_owned());
        }
        for child in node.children.iter().flatten() {
            Self::collect_forward_targets(child, targets);
        }
    }

    /// Clears `forward_to` throughout the subtree rooted at `node`,
    /// pruning any child that becomes empty. Returns whether `node`
    /// itself is now empty.
    fn clear_subtree_outgoing(node: &mut Node) -> bool {
        for slot in node.children.iter_mut() {
            if let Some(child) = slot {
                if Self::clear_subtree_outgoing(child) {
                    log::trace!("remove: collapsed an emptied child node");
                    *slot = None;
                }
            }
        }
        node.forward_to = None;
        node.is_empty()
    }

    /// Descends to the node at `digits[depth..]`, clears its subtree's
    /// outgoing forwards once reached, and unlinks any node that becomes
    /// empty on the way back up. The root is never unlinked.
    fn remove_to(node: &mut Node, digits: &[usize], depth: usize) -> bool {
        if depth == digits.len() {
            Self::clear_subtree_outgoing(node);
        } else {
            let idx = digits[depth];
            if let Some(child) = node.children[idx].as_mut() {
                if Self::remove_to(child, digits, depth + 1) {
                    log::trace!("remove: collapsed an emptied node on the path back to root");
                    node.children[idx] = None;
                }
            }
            // A missing child means `prefix` was never present along this
            // path; invariant I3 guarantees `node` is therefore non-empty
            // already, so there is nothing to prune here.
        }
        node.is_empty()
    }

    /// The rewrite of `n` obtained via the longest registered prefix, or
    /// `n` unchanged if no rule applies.
    pub fn get(&self, n: &str) -> NumberList {
        if !is_number(n) {
            return NumberList::sentinel();
        }

        let mut node: &Node = &self.root;
        let mut best_match: Option<(usize, &PhoneNumber)> = None;

        for (i, ch) in n.chars().enumerate() {
            let idx = to_index(ch).expect("validated PhoneNumber");
            match node.children[idx].as_deref() {
                None => break,
                Some(child) => {
                    node = child;
                    if let Some(target) = &node.forward_to {
                        best_match = Some((i + 1, target));
                    }
                }
            }
        }

        match best_match {
            None => NumberList::single(PhoneNumber::parse(n).expect("validated above")),
            Some((matched_len, target)) => {
                NumberList::single(PhoneNumber::concat(target.as_str(), &n[matched_len..]))
            }
        }
    }

    /// The sorted, deduplicated set of numbers that forward to `n`,
    /// including `n` itself.
    pub fn reverse(&self, n: &str) -> NumberList {
        if !is_number(n) {
            return NumberList::sentinel();
        }

        let mut result = NumberList::new();
        result.sorted_insert(PhoneNumber::parse(n).expect("validated above"));

        let mut node: &Node = &self.root;
        for (i, ch) in n.chars().enumerate() {
            let idx = to_index(ch).expect("validated PhoneNumber");
            match node.children[idx].as_deref() {
                None => break,
                Some(child) => {
                    node = child;
                    for source in node.forward_from.iter() {
                        let candidate = PhoneNumber::concat(source.as_str(), &n[i + 1..]);
                        result.sorted_insert(candidate);
                    }
                }
            }
        }

        result
    }

    /// The number of length-`len` strings over the digits appearing in
    /// `set` whose `reverse` differs from `{w}`, modulo `2^64`.
    pub fn count(&self, set: &str, len: usize) -> u64 {
        if set.is_empty() || len == 0 {
            return 0;
        }

        let mut present = [false; DIGIT_COUNT];
        let mut alphabet_size: u64 = 0;
        for ch in set.chars() {
            if let Some(idx) = to_index(ch) {
                if !present[idx] {
                    present[idx] = true;
                    alphabet_size += 1;
                }
            }
        }
        if alphabet_size == 0 {
            return 0;
        }

        let mut counter = 0u64;
        Self::count_non_trivial(&self.root, 0, len, alphabet_size, &present, &mut counter);
        counter
    }

    /// The number of nodes currently in the trie, root included.
    ///
    /// Not part of the spec's core operation set; exposed so callers
    /// (and this crate's own integration tests) can confirm invariant I3
    /// — that no mutation leaves an empty node behind — without needing
    /// access to the trie's internals.
    pub fn node_count(&self) -> usize {
        Self::count_nodes(&self.root)
    }

    fn count_nodes(node: &Node) -> usize {
        1 + node
            .children
            .iter()
            .flatten()
            .map(|child| Self::count_nodes(child))
            .sum::<usize>()
    }

    /// Every currently active rule, as `(src, dst)` pairs, in no
    /// particular order. Used by [`crate::snapshot`] to export a base's
    /// rule set; not part of the spec's core operation set.
    pub fn rules(&self) -> impl Iterator<Item = (String, String)> {
        let mut out = Vec::new();
        Self::collect_rules(&self.root, String::new(), &mut out);
        out.into_iter()
    }

    fn collect_rules(node: &Node, path: String, out: &mut Vec<(String, String)>) {
        if let Some(target) = &node.forward_to {
            out.push((path.clone(), target.as_str().to_owned()));
        }
        for (idx, child) in node.children.iter().enumerate() {
            if let Some(child) = child {
                let mut child_path = path.clone();
                child_path.push(from_index(idx));
                Self::collect_rules(child, child_path, out);
            }
        }
    }

    fn count_non_trivial(
        node: &Node,
        depth: usize,
        len: usize,
        alphabet_size: u64,
        present: &[bool; DIGIT_COUNT],
        counter: &mut u64,
    ) {
        if depth > len {
            return;
        }
        if !node.forward_from.is_empty() {
            *counter = counter.wrapping_add(alphabet_size.wrapping_pow((len - depth) as u32));
            return;
        }
        if depth == len {
            return;
        }
        for (idx, is_present) in present.iter().enumerate() {
            if *is_present {
                if let Some(child) = node.children[idx].as_deref() {
                    Self::count_non_trivial(child, depth + 1, len, alphabet_size, present, counter);
                }
            }
        }
    }
}
