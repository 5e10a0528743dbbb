use crate::digit::DIGIT_COUNT;
use crate::number_list::NumberList;
use crate::phone_number::PhoneNumber;

/// One node of the prefix trie.
///
/// `path(node)` — the digit string spelled out by the edges from the root
/// to this node — is never stored explicitly; callers reconstruct it
/// implicitly by tracking the digits consumed during descent.
pub(crate) struct Node {
    pub(crate) children: [Option<Box<Node>>; DIGIT_COUNT],
    /// The prefix this node's path is forwarded to, if any rule is active
    /// with this node's path as its source.
    pub(crate) forward_to: Option<PhoneNumber>,
    /// Source prefixes of every active rule whose target is this node's
    /// path. Unordered; membership-unique by construction (see
    /// `ForwardingBase::add`).
    pub(crate) forward_from: NumberList,
}

impl Node {
    pub(crate) fn new() -> Self {
        Node {
            children: Default::default(),
            forward_to: None,
            forward_from: NumberList::new(),
        }
    }

    /// Like [`Node::new`], but the inverse-link list starts with room for
    /// `capacity_hint` entries reserved up front (see
    /// [`crate::Config::inverse_list_capacity_hint`]).
    pub(crate) fn with_capacity_hint(capacity_hint: usize) -> Self {
        Node {
            children: Default::default(),
            forward_to: None,
            forward_from: NumberList::with_capacity(capacity_hint),
        }
    }

    /// A node is empty iff it plays no active role: no live child, no
    /// outgoing forward, no incoming forward. Empty nodes are never
    /// retained past the mutation that produced them (spec invariant I3).
    pub(crate) fn is_empty(&self) -> bool {
        self.forward_to.is_none()
            && self.forward_from.is_empty()
            && self.children.iter().all(Option::is_none)
    }
}
