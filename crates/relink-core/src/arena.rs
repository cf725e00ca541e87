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

//! The node layer: an arena of doubly linked cells addressed by stable
//! [`NodeKey`]s. Chains are built, taken apart and rearranged purely by
//! rewriting `prev`/`next` links; payloads never move between slots.

use crate::{
    err::{
        JoinError, NoSuccessorError, NodeAttachedError, NodeDetachedError, NotChainHeadError,
        NotChainTailError, SelfLinkError, SpliceError, StaleNodeError, SwapError, UnlinkError,
    },
    key::NodeKey,
};
use std::{iter::FusedIterator, num::NonZeroUsize};

/// Decodes a raw link index into an `Option<NodeKey>`. `0` becomes `None`.
#[inline(always)]
fn dec(raw_index: usize) -> Option<NodeKey> {
    NonZeroUsize::new(raw_index).map(|non_zero| NodeKey::from_index(non_zero.get()))
}

/// A forward iterator over one chain, from a starting node to the tail.
///
/// Yields `(NodeKey, &T)` pairs. Empty if the starting key was stale.
#[derive(Debug)]
pub struct ChainIter<'a, T> {
    next_raw: &'a [usize],
    payload: &'a [Option<T>],
    cur: usize,
}

impl<'a, T> Clone for ChainIter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            next_raw: self.next_raw,
            payload: self.payload,
            cur: self.cur,
        }
    }
}

impl<'a, T> Iterator for ChainIter<'a, T> {
    type Item = (NodeKey, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.cur;
        if cur == 0 {
            return None;
        }
        let payload = self.payload[cur].as_ref()?;
        self.cur = self.next_raw[cur];
        Some((NodeKey::from_index(cur), payload))
    }
}

impl<'a, T> FusedIterator for ChainIter<'a, T> {}

/// An arena of doubly linked nodes.
///
/// Every node lives in a slot addressed by a 1-based [`NodeKey`]; the link
/// columns store raw slot indices with `0` meaning "no neighbor", so slot 0
/// is reserved and never allocated. Freed slots go onto a LIFO free list
/// and are reused by later allocations, which keeps keys stable for as long
/// as their slot stays live.
///
/// A node with neither neighbor is *detached*: it forms no chain and is the
/// only kind of node that [`link_after`](Self::link_after) accepts for
/// insertion. Chains are simple and finite by construction; the splicing
/// operations reject anything that would close a cycle.
#[derive(Debug, Clone)]
pub struct LinkArena<T> {
    /// Index of the previous node for each slot. `0` represents `None`.
    prev_raw: Vec<usize>,
    /// Index of the next node for each slot. `0` represents `None`.
    next_raw: Vec<usize>,
    /// Payload for each slot. `None` marks a vacant slot.
    payload: Vec<Option<T>>,
    /// Reusable (freed) slot indices (1-based), popped LIFO.
    free_list: Vec<usize>,
    /// Number of live nodes.
    live: usize,
}

impl<T> LinkArena<T> {
    /// Creates an empty arena.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty arena with room for `nodes` slots before the
    /// columns reallocate.
    pub fn with_capacity(nodes: usize) -> Self {
        let mut arena = Self {
            prev_raw: Vec::with_capacity(nodes + 1),
            next_raw: Vec::with_capacity(nodes + 1),
            payload: Vec::with_capacity(nodes + 1),
            free_list: Vec::new(),
            live: 0,
        };
        // Slot 0 stays vacant forever; its index encodes "no neighbor".
        arena.prev_raw.push(0);
        arena.next_raw.push(0);
        arena.payload.push(None);
        arena
    }

    /// Reserves room for at least `additional` more nodes.
    pub fn reserve(&mut self, additional: usize) {
        self.prev_raw.reserve(additional);
        self.next_raw.reserve(additional);
        self.payload.reserve(additional);
    }

    /// Returns the number of live nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` if no node is live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Returns `true` if `node` refers to a live slot of this arena.
    #[inline]
    pub fn contains(&self, node: NodeKey) -> bool {
        self.payload
            .get(node.get())
            .is_some_and(|slot| slot.is_some())
    }

    #[inline(always)]
    fn ensure_live(&self, node: NodeKey) -> Result<(), StaleNodeError> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(StaleNodeError::new(node))
        }
    }

    /// Wires `node` in directly behind `anchor`. Raw indices, both live.
    #[inline]
    fn attach_after_raw(&mut self, anchor: usize, node: usize) {
        let after = self.next_raw[anchor];
        self.prev_raw[node] = anchor;
        self.next_raw[node] = after;
        self.next_raw[anchor] = node;
        if after != 0 {
            self.prev_raw[after] = node;
        }
    }

    /// Reconnects `node`'s neighbors to each other and clears its links.
    #[inline]
    fn detach_raw(&mut self, node: usize) {
        let before = self.prev_raw[node];
        let after = self.next_raw[node];
        if before != 0 {
            self.next_raw[before] = after;
        }
        if after != 0 {
            self.prev_raw[after] = before;
        }
        self.prev_raw[node] = 0;
        self.next_raw[node] = 0;
    }

    /// Takes the payload out of a live slot and recycles the slot.
    #[inline]
    fn release_slot(&mut self, index: usize) -> T {
        debug_assert_eq!(self.prev_raw[index], 0);
        debug_assert_eq!(self.next_raw[index], 0);
        let payload = self.payload[index]
            .take()
            .expect("released slot holds a payload");
        self.free_list.push(index);
        self.live -= 1;
        payload
    }

    /// `true` if walking `next` from `head` ever reaches `tail`. Used only
    /// to catch cycle-closing joins in debug builds; O(chain length).
    #[cfg(debug_assertions)]
    fn shares_chain(&self, tail: usize, head: usize) -> bool {
        let mut cur = head;
        loop {
            if cur == tail {
                return true;
            }
            match self.next_raw[cur] {
                0 => return false,
                next => cur = next,
            }
        }
    }

    /// Allocates a detached node holding `payload` and returns its key.
    pub fn alloc(&mut self, payload: T) -> NodeKey {
        self.live += 1;
        if let Some(index) = self.free_list.pop() {
            debug_assert_eq!(self.prev_raw[index], 0);
            debug_assert_eq!(self.next_raw[index], 0);
            debug_assert!(self.payload[index].is_none());
            self.payload[index] = Some(payload);
            return NodeKey::from_index(index);
        }
        let index = self.prev_raw.len();
        self.prev_raw.push(0);
        self.next_raw.push(0);
        self.payload.push(Some(payload));
        NodeKey::from_index(index)
    }

    /// Frees `node` and returns its payload. The key becomes stale.
    ///
    /// A node should be unlinked before it is freed. If it is still linked
    /// the misuse is reported via `tracing::warn!` and the node is detached
    /// first — its former neighbors end up linked to each other — before
    /// the slot is released.
    ///
    /// # Errors
    ///
    /// [`StaleNodeError`] if `node` is not live; nothing is changed.
    pub fn free(&mut self, node: NodeKey) -> Result<T, StaleNodeError> {
        self.ensure_live(node)?;
        let index = node.get();
        if self.prev_raw[index] != 0 || self.next_raw[index] != 0 {
            tracing::warn!(%node, "freeing a node that is still linked; reconnecting its neighbors");
            self.detach_raw(index);
        }
        Ok(self.release_slot(index))
    }

    /// Returns a shared reference to the payload of `node`, or `None` if
    /// the key is stale.
    #[inline]
    pub fn get(&self, node: NodeKey) -> Option<&T> {
        self.payload.get(node.get()).and_then(|slot| slot.as_ref())
    }

    /// Returns a mutable reference to the payload of `node`, or `None` if
    /// the key is stale.
    #[inline]
    pub fn get_mut(&mut self, node: NodeKey) -> Option<&mut T> {
        self.payload
            .get_mut(node.get())
            .and_then(|slot| slot.as_mut())
    }

    /// Returns the successor of `node`, if the key is live and one exists.
    #[inline]
    pub fn next(&self, node: NodeKey) -> Option<NodeKey> {
        if !self.contains(node) {
            return None;
        }
        dec(self.next_raw[node.get()])
    }

    /// Returns the predecessor of `node`, if the key is live and one exists.
    #[inline]
    pub fn prev(&self, node: NodeKey) -> Option<NodeKey> {
        if !self.contains(node) {
            return None;
        }
        dec(self.prev_raw[node.get()])
    }

    /// Returns `(prev, next)` of `node`, or `None` if the key is stale.
    #[inline]
    pub fn neighbors(&self, node: NodeKey) -> Option<(Option<NodeKey>, Option<NodeKey>)> {
        if !self.contains(node) {
            return None;
        }
        let index = node.get();
        Some((dec(self.prev_raw[index]), dec(self.next_raw[index])))
    }

    /// Returns `true` if `node` is live and has at least one neighbor.
    #[inline]
    pub fn is_linked(&self, node: NodeKey) -> bool {
        self.contains(node) && {
            let index = node.get();
            self.prev_raw[index] != 0 || self.next_raw[index] != 0
        }
    }

    /// Splices `node` in immediately after `anchor`, in whatever chain
    /// `anchor` belongs to. Exactly three link fields are rewritten:
    /// `anchor`'s `next`, `node`'s own links, and the old successor's
    /// `prev` when one existed.
    ///
    /// # Errors
    ///
    /// Rejected without touching either chain if one of the keys is stale,
    /// if `node` is still linked somewhere, or if `anchor` and `node` are
    /// the same node.
    pub fn link_after(&mut self, anchor: NodeKey, node: NodeKey) -> Result<(), SpliceError> {
        self.ensure_live(anchor)?;
        self.ensure_live(node)?;
        if anchor == node {
            return Err(SelfLinkError::new(node).into());
        }
        let index = node.get();
        if self.prev_raw[index] != 0 || self.next_raw[index] != 0 {
            return Err(NodeAttachedError::new(node).into());
        }
        self.attach_after_raw(anchor.get(), index);
        Ok(())
    }

    /// Removes `node` from its chain, reconnecting its former neighbors to
    /// each other. `node` stays live and ends up detached, ready to be
    /// freed or re-inserted.
    ///
    /// # Errors
    ///
    /// Rejected if the key is stale or the node is already detached.
    pub fn unlink(&mut self, node: NodeKey) -> Result<(), UnlinkError> {
        self.ensure_live(node)?;
        let index = node.get();
        if self.prev_raw[index] == 0 && self.next_raw[index] == 0 {
            return Err(NodeDetachedError::new(node).into());
        }
        self.detach_raw(index);
        Ok(())
    }

    /// Exchanges `node` with its immediate successor by unlinking `node`
    /// and re-linking it after that successor. Only links move; the
    /// payloads stay in their slots.
    ///
    /// # Errors
    ///
    /// Rejected if the key is stale or the node has no successor.
    pub fn swap_with_next(&mut self, node: NodeKey) -> Result<(), SwapError> {
        self.ensure_live(node)?;
        let index = node.get();
        let successor = self.next_raw[index];
        if successor == 0 {
            return Err(NoSuccessorError::new(node).into());
        }
        self.detach_raw(index);
        self.attach_after_raw(successor, index);
        Ok(())
    }

    /// Walks `prev` from `node` until no link remains and returns the head
    /// of its chain (possibly `node` itself).
    pub fn head_of(&self, node: NodeKey) -> Result<NodeKey, StaleNodeError> {
        self.ensure_live(node)?;
        let mut current = node.get();
        loop {
            match self.prev_raw[current] {
                0 => return Ok(NodeKey::from_index(current)),
                prev => current = prev,
            }
        }
    }

    /// Walks `next` from `node` until no link remains and returns the tail
    /// of its chain (possibly `node` itself).
    pub fn tail_of(&self, node: NodeKey) -> Result<NodeKey, StaleNodeError> {
        self.ensure_live(node)?;
        let mut current = node.get();
        loop {
            match self.next_raw[current] {
                0 => return Ok(NodeKey::from_index(current)),
                next => current = next,
            }
        }
    }

    /// Severs the link between `node` and its predecessor, turning the
    /// predecessor into a chain tail and `node` into a chain head. Returns
    /// the former predecessor, or `None` (and changes nothing) if `node`
    /// already had none.
    pub fn cut_before(&mut self, node: NodeKey) -> Result<Option<NodeKey>, StaleNodeError> {
        self.ensure_live(node)?;
        let index = node.get();
        match self.prev_raw[index] {
            0 => Ok(None),
            prev => {
                self.next_raw[prev] = 0;
                self.prev_raw[index] = 0;
                Ok(Some(NodeKey::from_index(prev)))
            }
        }
    }

    /// Welds two chains into one: `tail.next = head`, `head.prev = tail`.
    ///
    /// # Errors
    ///
    /// Rejected without mutation if a key is stale, `tail` is not the tail
    /// of its chain, `head` is not the head of its chain, or both keys name
    /// the same node. Joining the two ends of one chain would close a
    /// cycle; debug builds catch that with an O(n) walk.
    pub fn join(&mut self, tail: NodeKey, head: NodeKey) -> Result<(), JoinError> {
        self.ensure_live(tail)?;
        self.ensure_live(head)?;
        if tail == head {
            return Err(SelfLinkError::new(tail).into());
        }
        let tail_index = tail.get();
        let head_index = head.get();
        if self.next_raw[tail_index] != 0 {
            return Err(NotChainTailError::new(tail).into());
        }
        if self.prev_raw[head_index] != 0 {
            return Err(NotChainHeadError::new(head).into());
        }
        debug_assert!(
            !self.shares_chain(tail_index, head_index),
            "join would close a cycle"
        );
        self.next_raw[tail_index] = head_index;
        self.prev_raw[head_index] = tail_index;
        Ok(())
    }

    /// Allocates a node for `payload` and links it after the tail of the
    /// chain `member` belongs to. Returns the new key.
    pub fn push_tail(&mut self, member: NodeKey, payload: T) -> Result<NodeKey, StaleNodeError> {
        let tail = self.tail_of(member)?;
        let node = self.alloc(payload);
        self.attach_after_raw(tail.get(), node.get());
        Ok(node)
    }

    /// Frees `first` and every node after it, severing the chain in front
    /// of `first` so any predecessors stay intact. Returns the number of
    /// nodes freed.
    pub fn free_chain(&mut self, first: NodeKey) -> Result<usize, StaleNodeError> {
        self.ensure_live(first)?;
        let index = first.get();
        let prev = self.prev_raw[index];
        if prev != 0 {
            self.next_raw[prev] = 0;
            self.prev_raw[index] = 0;
        }
        let mut current = index;
        let mut freed = 0usize;
        while current != 0 {
            let next = self.next_raw[current];
            self.prev_raw[current] = 0;
            self.next_raw[current] = 0;
            drop(self.release_slot(current));
            freed += 1;
            current = next;
        }
        Ok(freed)
    }

    /// Returns a forward iterator from `node` to the tail of its chain.
    /// Empty if the key is stale.
    #[inline]
    pub fn iter_from(&self, node: NodeKey) -> ChainIter<'_, T> {
        ChainIter {
            next_raw: &self.next_raw,
            payload: &self.payload,
            cur: if self.contains(node) { node.get() } else { 0 },
        }
    }
}

impl<T> Default for LinkArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
