// Copyright (c) 2025 The relink contributors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Encapsulated string lists. A [`TextChains`] store owns one node arena
//! and any number of lists over it; lists are addressed by [`ListKey`]s and
//! consist of nothing but a head reference, so every whole-list operation
//! works by walking and rewriting links. Moving nodes between lists
//! (append, split, merge) never copies a payload and never invalidates a
//! node key.

use crate::{
    err::{
        AliasedListsError, CombineError, IndexError, IndexOutOfBoundsError, ReleaseError,
        StaleListError,
    },
    key::ListKey,
};
use relink_core::{
    arena::{ChainIter, LinkArena},
    err::NodeAttachedError,
    key::NodeKey,
};
use std::{borrow::Cow, iter::FusedIterator};

/// A forward iterator over the strings of one list, head to tail.
#[derive(Debug)]
pub struct TextIter<'s, 'a> {
    inner: Option<ChainIter<'s, Cow<'a, str>>>,
}

impl<'s, 'a> Iterator for TextIter<'s, 'a> {
    type Item = &'s str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next().map(|(_, text)| text.as_ref())
    }
}

impl<'s, 'a> FusedIterator for TextIter<'s, 'a> {}

/// A forward iterator over `(NodeKey, &str)` pairs of one list.
#[derive(Debug)]
pub struct TextKeyIter<'s, 'a> {
    inner: Option<ChainIter<'s, Cow<'a, str>>>,
}

impl<'s, 'a> Iterator for TextKeyIter<'s, 'a> {
    type Item = (NodeKey, &'s str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .as_mut()?
            .next()
            .map(|(key, text)| (key, text.as_ref()))
    }
}

impl<'s, 'a> FusedIterator for TextKeyIter<'s, 'a> {}

/// A store of string lists sharing one node arena.
///
/// Each list is nothing more than an optional head node; tails, lengths and
/// positions are found by walking links, and the splicing operations
/// (append, split, merge) relocate whole sub-chains by rewriting the
/// boundary links only. Because all lists share the arena, a node keeps its
/// [`NodeKey`] when it moves from one list to another.
///
/// Payloads are [`Cow`] strings: pass a `String` (or call `to_owned`) to
/// give the node its own copy, or pass a `&'a str` to store a borrowed
/// reference whose buffer remains the caller's responsibility. The borrowed
/// case can never be freed by the node.
///
/// Every node reachable from a list's head belongs to that list
/// exclusively; no node is ever reachable from two list handles at once.
/// The store relies on that to keep append/split/merge safe.
#[derive(Debug, Clone)]
pub struct TextChains<'a> {
    /// The shared node arena; all lists splice within it.
    arena: LinkArena<Cow<'a, str>>,
    /// Head node per list slot. `None` means the list is empty.
    heads: Vec<Option<NodeKey>>,
    /// Whether each list slot is live (created and not yet destroyed).
    alive: Vec<bool>,
    /// Retired list slots (0-based), reused LIFO.
    spare: Vec<usize>,
}

impl<'a> TextChains<'a> {
    /// Creates an empty store.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Creates an empty store with room for `nodes` nodes and `lists`
    /// lists before the underlying storage reallocates.
    pub fn with_capacity(nodes: usize, lists: usize) -> Self {
        Self {
            arena: LinkArena::with_capacity(nodes),
            heads: Vec::with_capacity(lists),
            alive: Vec::with_capacity(lists),
            spare: Vec::new(),
        }
    }

    /// Reserves room for at least `additional` more nodes.
    pub fn reserve_nodes(&mut self, additional: usize) {
        self.arena.reserve(additional);
    }

    /// Reserves room for at least `additional` more lists.
    pub fn reserve_lists(&mut self, additional: usize) {
        self.heads.reserve(additional);
        self.alive.reserve(additional);
    }

    /// Returns the number of live lists.
    pub fn num_lists(&self) -> usize {
        self.alive.iter().filter(|&&live| live).count()
    }

    /// Returns the number of live nodes across all lists, including nodes
    /// popped off a list but not yet released.
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if `list` refers to a live list of this store.
    #[inline]
    pub fn contains(&self, list: ListKey) -> bool {
        self.alive.get(list.to_raw()).copied().unwrap_or(false)
    }

    #[inline(always)]
    fn ensure_list(&self, list: ListKey) -> Result<(), StaleListError> {
        if self.contains(list) {
            Ok(())
        } else {
            Err(StaleListError::new(list))
        }
    }

    /// Detaches and returns the head of `list` without validating the
    /// handle. `None` if the list is empty.
    fn take_head(&mut self, list: ListKey) -> Option<NodeKey> {
        let slot = list.to_raw();
        let head = self.heads[slot]?;
        let next = self.arena.next(head);
        if let Some(next) = next {
            self.arena.cut_before(next).expect("list nodes stay live");
        }
        self.heads[slot] = next;
        Some(head)
    }

    /// Creates a new empty list and returns its handle.
    pub fn create(&mut self) -> ListKey {
        if let Some(slot) = self.spare.pop() {
            debug_assert!(!self.alive[slot]);
            debug_assert!(self.heads[slot].is_none());
            self.alive[slot] = true;
            return ListKey::from_raw(slot);
        }
        self.heads.push(None);
        self.alive.push(true);
        ListKey::from_raw(self.heads.len() - 1)
    }

    /// Releases every node of `list`, then retires the handle. Returns the
    /// number of nodes released. The slot is reused by a later
    /// [`create`](Self::create).
    pub fn destroy(&mut self, list: ListKey) -> Result<usize, StaleListError> {
        let freed = self.clear(list)?;
        let slot = list.to_raw();
        self.alive[slot] = false;
        self.spare.push(slot);
        Ok(freed)
    }

    /// Releases every node of `list` but keeps the handle live and empty.
    /// Returns the number of nodes released.
    pub fn clear(&mut self, list: ListKey) -> Result<usize, StaleListError> {
        self.ensure_list(list)?;
        let slot = list.to_raw();
        let Some(head) = self.heads[slot] else {
            return Ok(0);
        };
        self.heads[slot] = None;
        let freed = self.arena.free_chain(head).expect("list heads stay live");
        Ok(freed)
    }

    /// Adds a node holding `text` at the head of `list` and returns its
    /// key. A `String` payload is owned by the node; a `&str` payload is
    /// borrowed and stays the caller's responsibility.
    pub fn push_front(
        &mut self,
        list: ListKey,
        text: impl Into<Cow<'a, str>>,
    ) -> Result<NodeKey, StaleListError> {
        self.ensure_list(list)?;
        let slot = list.to_raw();
        let node = self.arena.alloc(text.into());
        if let Some(head) = self.heads[slot] {
            self.arena
                .join(node, head)
                .expect("a fresh node welds onto the old head");
        }
        self.heads[slot] = Some(node);
        Ok(node)
    }

    /// Adds a node holding `text` after the tail of `list` and returns its
    /// key. Ownership of the payload works as in
    /// [`push_front`](Self::push_front).
    pub fn push_back(
        &mut self,
        list: ListKey,
        text: impl Into<Cow<'a, str>>,
    ) -> Result<NodeKey, StaleListError> {
        self.ensure_list(list)?;
        let slot = list.to_raw();
        match self.heads[slot] {
            None => {
                let node = self.arena.alloc(text.into());
                self.heads[slot] = Some(node);
                Ok(node)
            }
            Some(head) => Ok(self
                .arena
                .push_tail(head, text.into())
                .expect("list heads stay live")),
        }
    }

    /// Detaches the head node of `list` and returns its key; `None` if the
    /// list is empty. The node stays allocated — re-insert it elsewhere or
    /// hand it to [`release`](Self::release).
    pub fn pop_front(&mut self, list: ListKey) -> Result<Option<NodeKey>, StaleListError> {
        self.ensure_list(list)?;
        Ok(self.take_head(list))
    }

    /// Frees a detached node and returns its payload.
    ///
    /// # Errors
    ///
    /// Rejected if the key is stale, or if the node is still linked or
    /// still serving as the head of a list. (A singleton list's head
    /// carries no links but is still owned by its list.)
    pub fn release(&mut self, node: NodeKey) -> Result<Cow<'a, str>, ReleaseError> {
        if self.arena.is_linked(node) || self.heads.contains(&Some(node)) {
            return Err(NodeAttachedError::new(node).into());
        }
        self.arena.free(node).map_err(ReleaseError::from)
    }

    /// Returns the number of nodes reachable from the head of `list`.
    pub fn len(&self, list: ListKey) -> Result<usize, StaleListError> {
        self.ensure_list(list)?;
        Ok(match self.heads[list.to_raw()] {
            None => 0,
            Some(head) => self.arena.iter_from(head).count(),
        })
    }

    /// Returns `true` if `list` holds no nodes.
    pub fn is_empty(&self, list: ListKey) -> Result<bool, StaleListError> {
        self.ensure_list(list)?;
        Ok(self.heads[list.to_raw()].is_none())
    }

    /// Returns the head node of `list`, or `None` if the list is empty.
    pub fn head(&self, list: ListKey) -> Result<Option<NodeKey>, StaleListError> {
        self.ensure_list(list)?;
        Ok(self.heads[list.to_raw()])
    }

    /// Walks to the tail node of `list`, or `None` if the list is empty.
    pub fn tail(&self, list: ListKey) -> Result<Option<NodeKey>, StaleListError> {
        self.ensure_list(list)?;
        Ok(self.heads[list.to_raw()].map(|head| {
            self.arena.tail_of(head).expect("list heads stay live")
        }))
    }

    /// Returns the lexicographically smallest string of `list` by a brute
    /// scan from the head; `None` if the list is empty. Among equal minima
    /// the first occurrence in head-to-tail order wins.
    pub fn min(&self, list: ListKey) -> Result<Option<&str>, StaleListError> {
        self.ensure_list(list)?;
        let Some(head) = self.heads[list.to_raw()] else {
            return Ok(None);
        };
        let mut best: Option<&str> = None;
        for (_, text) in self.arena.iter_from(head) {
            let candidate: &str = text.as_ref();
            match best {
                None => best = Some(candidate),
                Some(current) if candidate < current => best = Some(candidate),
                Some(_) => {}
            }
        }
        Ok(best)
    }

    /// Returns the lexicographically largest string of `list`; the mirror
    /// image of [`min`](Self::min), including the first-occurrence rule.
    pub fn max(&self, list: ListKey) -> Result<Option<&str>, StaleListError> {
        self.ensure_list(list)?;
        let Some(head) = self.heads[list.to_raw()] else {
            return Ok(None);
        };
        let mut best: Option<&str> = None;
        for (_, text) in self.arena.iter_from(head) {
            let candidate: &str = text.as_ref();
            match best {
                None => best = Some(candidate),
                Some(current) if candidate > current => best = Some(candidate),
                Some(_) => {}
            }
        }
        Ok(best)
    }

    /// Returns the node at zero-based position `index` by a linear walk
    /// from the head.
    ///
    /// # Errors
    ///
    /// Rejected if the handle is stale or `index` is past the last node.
    pub fn node_at(&self, list: ListKey, index: usize) -> Result<NodeKey, IndexError> {
        self.ensure_list(list)?;
        let mut walked = 0usize;
        let mut cursor = self.heads[list.to_raw()];
        while let Some(node) = cursor {
            if walked == index {
                return Ok(node);
            }
            cursor = self.arena.next(node);
            walked += 1;
        }
        Err(IndexOutOfBoundsError::new(index, walked).into())
    }

    /// Relocates every node of `rhs` to the tail of `lhs` in one splice,
    /// leaving `rhs` empty but live and reusable. No payload is copied;
    /// only the boundary links are rewritten.
    ///
    /// # Errors
    ///
    /// Rejected without mutation if either handle is stale or both name
    /// the same list.
    pub fn append(&mut self, lhs: ListKey, rhs: ListKey) -> Result<(), CombineError> {
        if lhs == rhs {
            return Err(AliasedListsError::new(lhs).into());
        }
        self.ensure_list(lhs)?;
        self.ensure_list(rhs)?;
        let Some(moved) = self.heads[rhs.to_raw()].take() else {
            return Ok(());
        };
        match self.heads[lhs.to_raw()] {
            None => self.heads[lhs.to_raw()] = Some(moved),
            Some(head) => {
                let tail = self.arena.tail_of(head).expect("list heads stay live");
                self.arena
                    .join(tail, moved)
                    .expect("a list tail welds onto another list's head");
            }
        }
        Ok(())
    }

    /// Moves the sub-chain starting at position `index` (inclusive) out of
    /// `list` into a freshly created list and returns the new handle.
    /// `index == len` is legal and yields an empty new list; `index == 0`
    /// moves the entire chain. The moved nodes keep their keys; only the
    /// boundary links are clipped.
    ///
    /// # Errors
    ///
    /// Rejected — and no list is created — if the handle is stale or
    /// `index` exceeds the length.
    pub fn split_at(&mut self, list: ListKey, index: usize) -> Result<ListKey, IndexError> {
        self.ensure_list(list)?;
        let mut walked = 0usize;
        let mut cursor = self.heads[list.to_raw()];
        while walked < index {
            match cursor {
                Some(node) => {
                    cursor = self.arena.next(node);
                    walked += 1;
                }
                None => return Err(IndexOutOfBoundsError::new(index, walked).into()),
            }
        }
        // `cursor` now sits on the first moved node, or is `None` exactly
        // when `index == len`.
        let split = self.create();
        if let Some(first) = cursor {
            self.arena.cut_before(first).expect("list nodes stay live");
            if walked == 0 {
                self.heads[list.to_raw()] = None;
            }
            self.heads[split.to_raw()] = Some(first);
        }
        Ok(split)
    }

    /// Merges two individually sorted lists into `lhs`, leaving `rhs`
    /// empty. Sortedness of the inputs is assumed, not verified.
    ///
    /// The current heads are compared and the smaller-or-equal one moves
    /// into a local accumulator chain; on a tie the `lhs` head goes first,
    /// so runs of equal strings keep their source order. Once one list
    /// runs out, the rest of the other is spliced on whole. Nodes keep
    /// their keys throughout; payloads are never copied.
    ///
    /// # Errors
    ///
    /// Rejected without mutation if either handle is stale or both name
    /// the same list.
    pub fn merge_sorted(&mut self, lhs: ListKey, rhs: ListKey) -> Result<(), CombineError> {
        if lhs == rhs {
            return Err(AliasedListsError::new(lhs).into());
        }
        self.ensure_list(lhs)?;
        self.ensure_list(rhs)?;

        let mut acc_head: Option<NodeKey> = None;
        let mut acc_tail: Option<NodeKey> = None;

        while let (Some(left), Some(right)) =
            (self.heads[lhs.to_raw()], self.heads[rhs.to_raw()])
        {
            let take_left = {
                let left_text = self.arena.get(left).expect("list heads stay live");
                let right_text = self.arena.get(right).expect("list heads stay live");
                left_text <= right_text
            };
            let node = self
                .take_head(if take_left { lhs } else { rhs })
                .expect("compared source has a head");
            match acc_tail {
                None => acc_head = Some(node),
                Some(tail) => self
                    .arena
                    .join(tail, node)
                    .expect("accumulator tail welds a detached node"),
            }
            acc_tail = Some(node);
        }

        // At most one source still holds nodes; splice its whole remainder
        // on in a single weld instead of node by node.
        let rest = if self.heads[lhs.to_raw()].is_some() {
            self.heads[lhs.to_raw()].take()
        } else if self.heads[rhs.to_raw()].is_some() {
            self.heads[rhs.to_raw()].take()
        } else {
            None
        };
        if let Some(rest) = rest {
            match acc_tail {
                None => acc_head = Some(rest),
                Some(tail) => self
                    .arena
                    .join(tail, rest)
                    .expect("remainder head welds onto the accumulator"),
            }
        }

        if self.heads[lhs.to_raw()].is_some() || self.heads[rhs.to_raw()].is_some() {
            tracing::error!(%lhs, %rhs, "both sources still hold nodes after the combine loop");
            debug_assert!(false, "merge_sorted left both sources non-empty");
        }

        self.heads[lhs.to_raw()] = acc_head;
        Ok(())
    }

    /// Returns the string held by `node`, or `None` if the key is stale.
    #[inline]
    pub fn text(&self, node: NodeKey) -> Option<&str> {
        self.arena.get(node).map(|text| text.as_ref())
    }

    /// Returns the successor of `node` within its list.
    #[inline]
    pub fn next(&self, node: NodeKey) -> Option<NodeKey> {
        self.arena.next(node)
    }

    /// Returns the predecessor of `node` within its list.
    #[inline]
    pub fn prev(&self, node: NodeKey) -> Option<NodeKey> {
        self.arena.prev(node)
    }

    /// Iterates over the strings of `list`, head to tail.
    pub fn iter(&self, list: ListKey) -> Result<TextIter<'_, 'a>, StaleListError> {
        self.ensure_list(list)?;
        Ok(TextIter {
            inner: self.heads[list.to_raw()].map(|head| self.arena.iter_from(head)),
        })
    }

    /// Iterates over `(NodeKey, &str)` pairs of `list`, head to tail.
    pub fn iter_keys(&self, list: ListKey) -> Result<TextKeyIter<'_, 'a>, StaleListError> {
        self.ensure_list(list)?;
        Ok(TextKeyIter {
            inner: self.heads[list.to_raw()].map(|head| self.arena.iter_from(head)),
        })
    }
}

impl<'a> Default for TextChains<'a> {
    fn default() -> Self {
        Self::new()
    }
}
