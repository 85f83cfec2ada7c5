use alloc::vec::Vec;
use core::cmp::Ordering::{Equal, Greater, Less};
use core::mem;

use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Color, Node, Side};
use crate::comparator::Comparator;

/// The red-black tree backing `TreeSet`.
///
/// Invariants, restored before every `&mut self` method returns:
///
/// 1. the root, when present, is black;
/// 2. absent children count as black;
/// 3. a red node has no red child;
/// 4. every path from a node down to an absent child crosses the same number of black nodes;
/// 5. an in-order walk is strictly increasing under `comparator`;
/// 6. `len` equals the number of nodes reachable from `root`.
#[derive(Clone)]
pub(crate) struct RawTree<T, C> {
    /// Arena owning every live node.
    nodes: Arena<Node<T>>,
    root: Option<Handle>,
    len: usize,
    comparator: C,
}

/// Where a deletion left the tree one black node short.
///
/// `Vacant` is the placeholder for a removed black leaf: the slot itself is already empty, but
/// the fixup still needs to know which parent and which side came up short. It lives only for the
/// duration of one `remove` call.
#[derive(Clone, Copy, Debug)]
enum Deficit {
    Node(Handle),
    Vacant { parent: Handle, side: Side },
}

/// Stack of handles used by descents that have to come back up.
pub(crate) type Spine = SmallVec<[Handle; 32]>;

impl<T, C> RawTree<T, C> {
    pub(crate) const fn new(comparator: C) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
            comparator,
        }
    }

    pub(crate) fn with_capacity(comparator: C, capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
            comparator,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) const fn comparator(&self) -> &C {
        &self.comparator
    }

    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<T> {
        &self.nodes[handle]
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Leftmost node of the subtree rooted at `handle`.
    pub(crate) fn leftmost(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.nodes[handle].left {
            handle = left;
        }
        handle
    }

    /// Rightmost node of the subtree rooted at `handle`.
    pub(crate) fn rightmost(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.nodes[handle].right {
            handle = right;
        }
        handle
    }

    pub(crate) fn first(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[self.leftmost(root)].element)
    }

    pub(crate) fn last(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[self.rightmost(root)].element)
    }

    /// Pushes `handle` and its chain of `side` children, so the top of `spine` is the extreme
    /// node of that subtree toward `side`.
    pub(crate) fn push_spine(&self, spine: &mut Spine, mut next: Option<Handle>, side: Side) {
        while let Some(handle) = next {
            spine.push(handle);
            next = self.nodes[handle].child(side);
        }
    }

    /// In-order walk of the subtree at `node`. Stops as soon as `visit` returns `false`, and
    /// reports whether the walk ran to completion.
    pub(crate) fn walk_in_order<F>(&self, node: Option<Handle>, visit: &mut F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        let Some(handle) = node else {
            return true;
        };
        let node = &self.nodes[handle];
        self.walk_in_order(node.left, visit) && visit(&node.element) && self.walk_in_order(node.right, visit)
    }

    /// Pre-order walk of the subtree at `node`.
    ///
    /// Re-inserting elements in this order rebuilds a tree of similar shape with far fewer
    /// rotations than feeding it sorted input.
    pub(crate) fn walk_pre_order<F>(&self, node: Option<Handle>, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(handle) = node {
            let node = &self.nodes[handle];
            visit(&node.element);
            self.walk_pre_order(node.left, visit);
            self.walk_pre_order(node.right, visit);
        }
    }

    /// Feeds `sink`, in ascending order, every element of the subtree at `node` accepted by
    /// `accept`. `accept` must hold for a prefix of the in-order sequence; right subtrees of
    /// rejected nodes are never entered.
    pub(crate) fn walk_prefix<A, S>(&self, node: Option<Handle>, accept: &A, sink: &mut S)
    where
        A: Fn(&T) -> bool,
        S: FnMut(&T),
    {
        let Some(handle) = node else {
            return;
        };
        let node = &self.nodes[handle];
        self.walk_prefix(node.left, accept, sink);
        if accept(&node.element) {
            sink(&node.element);
            self.walk_prefix(node.right, accept, sink);
        }
    }

    /// Mirror of [`walk_prefix`](Self::walk_prefix): `accept` must hold for a suffix of the
    /// in-order sequence, elements reach `sink` in descending order.
    pub(crate) fn walk_suffix<A, S>(&self, node: Option<Handle>, accept: &A, sink: &mut S)
    where
        A: Fn(&T) -> bool,
        S: FnMut(&T),
    {
        let Some(handle) = node else {
            return;
        };
        let node = &self.nodes[handle];
        self.walk_suffix(node.right, accept, sink);
        if accept(&node.element) {
            sink(&node.element);
            self.walk_suffix(node.left, accept, sink);
        }
    }

    /// Empties the tree, handing back its elements in ascending order.
    pub(crate) fn drain_sorted(&mut self) -> Vec<T> {
        let mut order = Vec::with_capacity(self.len);
        let mut spine = Spine::new();
        self.push_spine(&mut spine, self.root, Side::Left);
        while let Some(handle) = spine.pop() {
            order.push(handle);
            self.push_spine(&mut spine, self.nodes[handle].right, Side::Left);
        }

        let elements = order.into_iter().map(|handle| self.nodes.remove(handle).element).collect();
        self.clear();
        elements
    }

    /// Removes and returns the smallest element.
    pub(crate) fn pop_first(&mut self) -> Option<T> {
        let first = self.leftmost(self.root?);
        Some(self.unlink(first))
    }

    /// Removes and returns the largest element.
    pub(crate) fn pop_last(&mut self) -> Option<T> {
        let last = self.rightmost(self.root?);
        Some(self.unlink(last))
    }

    #[inline]
    fn is_red(&self, handle: Option<Handle>) -> bool {
        handle.is_some_and(|handle| self.nodes[handle].is_red())
    }

    #[inline]
    fn set_color(&mut self, handle: Handle, color: Color) {
        self.nodes[handle].color = color;
    }

    /// Which of `parent`'s slots holds `child`.
    ///
    /// # Panics
    ///
    /// If `child` is not a child of `parent`. That can only mean the links are corrupt.
    fn side_of(&self, parent: Handle, child: Handle) -> Side {
        let node = &self.nodes[parent];
        if node.left == Some(child) {
            Side::Left
        } else if node.right == Some(child) {
            Side::Right
        } else {
            panic!("`RawTree::side_of()` - node is not a child of its parent!")
        }
    }

    /// Points the slot of `parent` (or the root, when `parent` is `None`) that holds `old` at
    /// `new`, and re-parents `new`.
    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let side = self.side_of(parent, old);
                self.nodes[parent].set_child(side, new);
            }
        }
        if let Some(new) = new {
            self.nodes[new].parent = parent;
        }
    }

    /// Rotates `node` down toward `side`, promoting its child on the opposite side into its
    /// place. `rotate(n, Side::Left)` is the classic left rotation.
    ///
    /// ```text
    ///       n                 p
    ///      / \               / \
    ///     a   p     ==>     n   c
    ///        / \           / \
    ///       b   c         a   b
    /// ```
    fn rotate(&mut self, node: Handle, side: Side) {
        let pivot = self.nodes[node]
            .child(side.opposite())
            .expect("`RawTree::rotate()` - rotation pivot is missing!");
        let parent = self.nodes[node].parent;
        let inner = self.nodes[pivot].child(side);

        self.nodes[node].set_child(side.opposite(), inner);
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(node);
        }

        self.replace_child(parent, node, Some(pivot));
        self.nodes[pivot].set_child(side, Some(node));
        self.nodes[node].parent = Some(pivot);
    }

    /// Restores the invariants after `node` was attached as a red leaf.
    fn rebalance_insertion(&mut self, mut node: Handle) {
        loop {
            let Some(parent) = self.nodes[node].parent else {
                self.set_color(node, Color::Black);
                return;
            };
            if !self.nodes[parent].is_red() {
                return;
            }
            let Some(grandparent) = self.nodes[parent].parent else {
                // A red root only occurs transiently; blacken it.
                self.set_color(parent, Color::Black);
                return;
            };

            let parent_side = self.side_of(grandparent, parent);
            let uncle = self.nodes[grandparent].child(parent_side.opposite());

            if let Some(uncle) = uncle.filter(|&uncle| self.nodes[uncle].is_red()) {
                log::trace!("insert: red uncle, recoloring under {grandparent:?}");
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            // Black uncle. Straighten a zig-zag first so `top` is the outer grandchild's parent.
            let mut top = parent;
            if self.side_of(parent, node) != parent_side {
                log::trace!("insert: inner grandchild, rotating at {parent:?}");
                self.rotate(parent, parent_side);
                top = node;
            }
            log::trace!("insert: outer grandchild, rotating at {grandparent:?}");
            self.rotate(grandparent, parent_side.opposite());
            self.set_color(top, Color::Black);
            self.set_color(grandparent, Color::Red);
            return;
        }
    }

    /// Unlinks `node`, which has at most one child, and returns its element.
    fn unlink(&mut self, node: Handle) -> T {
        let Node {
            color,
            parent,
            left,
            right,
            ..
        } = self.nodes[node];
        debug_assert!(left.is_none() || right.is_none(), "`RawTree::unlink()` - node has two children!");

        let deficit = match (left.or(right), parent) {
            (Some(child), _) => {
                self.replace_child(parent, node, Some(child));
                Some(Deficit::Node(child))
            }
            (None, Some(parent)) => {
                let side = self.side_of(parent, node);
                self.nodes[parent].set_child(side, None);
                Some(Deficit::Vacant { parent, side })
            }
            (None, None) => {
                self.root = None;
                None
            }
        };

        let element = self.nodes.remove(node).element;
        self.len -= 1;
        debug_assert_eq!(self.nodes.len(), self.len, "`RawTree::unlink()` - arena and length disagree!");

        // Losing a red node never changes a black count.
        if color == Color::Black
            && let Some(deficit) = deficit
        {
            self.rebalance_removal(deficit);
        }
        element
    }

    /// Pays back the black node missing on every path through `at`.
    fn rebalance_removal(&mut self, mut at: Deficit) {
        loop {
            let (parent, side) = match at {
                Deficit::Node(node) => {
                    let current = &self.nodes[node];
                    match current.parent {
                        Some(parent) if !current.is_red() => (parent, self.side_of(parent, node)),
                        // A red node absorbs the deficit; the root simply loses a level.
                        _ => {
                            self.set_color(node, Color::Black);
                            return;
                        }
                    }
                }
                Deficit::Vacant { parent, side } => (parent, side),
            };

            let mut sibling = self.sibling(parent, side);
            if self.nodes[sibling].is_red() {
                log::trace!("remove: red sibling {sibling:?}, rotating at {parent:?}");
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                sibling = self.sibling(parent, side);
            }

            let near = self.nodes[sibling].child(side);
            let far = self.nodes[sibling].child(side.opposite());

            if !self.is_red(near) && !self.is_red(far) {
                self.set_color(sibling, Color::Red);
                if self.nodes[parent].is_red() {
                    self.set_color(parent, Color::Black);
                    return;
                }
                log::trace!("remove: pushing deficit up to {parent:?}");
                at = Deficit::Node(parent);
                continue;
            }

            if !self.is_red(far) {
                let near = near.expect("`RawTree::rebalance_removal()` - red nephew is missing!");
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, side.opposite());
                sibling = self.sibling(parent, side);
            }

            log::trace!("remove: red far nephew, rotating at {parent:?}");
            let parent_color = self.nodes[parent].color;
            self.set_color(sibling, parent_color);
            self.set_color(parent, Color::Black);
            let far = self.nodes[sibling]
                .child(side.opposite())
                .expect("`RawTree::rebalance_removal()` - red nephew is missing!");
            self.set_color(far, Color::Black);
            self.rotate(parent, side);
            return;
        }
    }

    /// The child of `parent` opposite `side`. A black-height deficit on one side guarantees it
    /// exists.
    fn sibling(&self, parent: Handle, side: Side) -> Handle {
        self.nodes[parent]
            .child(side.opposite())
            .expect("`RawTree::sibling()` - deficient node has no sibling!")
    }
}

impl<T, C: Comparator<T>> RawTree<T, C> {
    #[inline]
    pub(crate) fn compare(&self, a: &T, b: &T) -> core::cmp::Ordering {
        self.comparator.compare(a, b)
    }

    /// Finds the node holding an element equal to `element`.
    pub(crate) fn locate(&self, element: &T) -> Option<Handle> {
        let mut next = self.root;
        while let Some(handle) = next {
            let node = &self.nodes[handle];
            next = match self.compare(element, &node.element) {
                Less => node.left,
                Greater => node.right,
                Equal => return Some(handle),
            };
        }
        None
    }

    /// Number of distinct nodes matched by `items`, or `None` if any item is absent.
    ///
    /// Items that compare equal land on the same node and are counted once.
    pub(crate) fn count_distinct(&self, items: &[T]) -> Option<usize> {
        let mut hits = items.iter().map(|item| self.locate(item)).collect::<Option<Vec<Handle>>>()?;
        hits.sort_unstable();
        hits.dedup();
        Some(hits.len())
    }

    pub(crate) fn get(&self, element: &T) -> Option<&T> {
        self.locate(element).map(|handle| &self.nodes[handle].element)
    }

    /// Smallest element above `element` (or equal to it, when `inclusive`).
    pub(crate) fn ceiling(&self, element: &T, inclusive: bool) -> Option<&T> {
        let mut candidate = None;
        let mut next = self.root;
        while let Some(handle) = next {
            let node = &self.nodes[handle];
            next = match self.compare(element, &node.element) {
                Equal if inclusive => return Some(&node.element),
                Less => {
                    candidate = Some(&node.element);
                    node.left
                }
                Equal | Greater => node.right,
            };
        }
        candidate
    }

    /// Largest element below `element` (or equal to it, when `inclusive`).
    pub(crate) fn floor(&self, element: &T, inclusive: bool) -> Option<&T> {
        let mut candidate = None;
        let mut next = self.root;
        while let Some(handle) = next {
            let node = &self.nodes[handle];
            next = match self.compare(element, &node.element) {
                Equal if inclusive => return Some(&node.element),
                Greater => {
                    candidate = Some(&node.element);
                    node.right
                }
                Equal | Less => node.left,
            };
        }
        candidate
    }

    /// Inserts `element` unless an equal one is present. Returns whether the tree changed.
    pub(crate) fn insert(&mut self, element: T) -> bool {
        let mut parent = None;
        let mut side = Side::Left;
        let mut next = self.root;
        while let Some(handle) = next {
            let node = &self.nodes[handle];
            side = match self.compare(&element, &node.element) {
                Less => Side::Left,
                Greater => Side::Right,
                Equal => return false,
            };
            parent = Some(handle);
            next = node.child(side);
        }

        let node = self.nodes.insert(Node::leaf(element, parent));
        match parent {
            None => self.root = Some(node),
            Some(parent) => self.nodes[parent].set_child(side, Some(node)),
        }
        self.len += 1;
        self.rebalance_insertion(node);
        true
    }

    /// Removes the element equal to `element` and returns it.
    pub(crate) fn take(&mut self, element: &T) -> Option<T> {
        let target = self.locate(element)?;
        let node = &self.nodes[target];

        // Two children: trade elements with the in-order successor, which has no left child,
        // and unlink that node instead.
        let doomed = match (node.left, node.right) {
            (Some(_), Some(right)) => {
                let successor = self.leftmost(right);
                let (kept, spliced) = self.nodes.pair_mut(target, successor);
                mem::swap(&mut kept.element, &mut spliced.element);
                successor
            }
            _ => target,
        };
        Some(self.unlink(doomed))
    }
}
