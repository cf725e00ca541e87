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

//! Errors reported by the node layer. One struct per misuse, composed into
//! one enum per fallible operation.

use crate::key::NodeKey;

/// The key refers to a slot that holds no live node (never allocated, or
/// freed and not yet reused).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StaleNodeError(NodeKey);

impl StaleNodeError {
    #[inline]
    pub fn new(node: NodeKey) -> Self {
        Self(node)
    }

    #[inline]
    pub fn node(&self) -> NodeKey {
        self.0
    }
}

impl std::fmt::Display for StaleNodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node {} does not refer to a live slot", self.0)
    }
}

impl std::error::Error for StaleNodeError {}

/// The node is still linked into a chain, but the operation requires it to
/// be detached.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeAttachedError(NodeKey);

impl NodeAttachedError {
    #[inline]
    pub fn new(node: NodeKey) -> Self {
        Self(node)
    }

    #[inline]
    pub fn node(&self) -> NodeKey {
        self.0
    }
}

impl std::fmt::Display for NodeAttachedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node {} is still linked into a chain", self.0)
    }
}

impl std::error::Error for NodeAttachedError {}

/// The node has no neighbor on either side, but the operation requires it
/// to be part of a chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeDetachedError(NodeKey);

impl NodeDetachedError {
    #[inline]
    pub fn new(node: NodeKey) -> Self {
        Self(node)
    }

    #[inline]
    pub fn node(&self) -> NodeKey {
        self.0
    }
}

impl std::fmt::Display for NodeDetachedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node {} is not linked into any chain", self.0)
    }
}

impl std::error::Error for NodeDetachedError {}

/// The node is the tail of its chain, so it has no successor to operate on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoSuccessorError(NodeKey);

impl NoSuccessorError {
    #[inline]
    pub fn new(node: NodeKey) -> Self {
        Self(node)
    }

    #[inline]
    pub fn node(&self) -> NodeKey {
        self.0
    }
}

impl std::fmt::Display for NoSuccessorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node {} has no successor", self.0)
    }
}

impl std::error::Error for NoSuccessorError {}

/// The node still has a successor, but the operation requires the tail of a
/// chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotChainTailError(NodeKey);

impl NotChainTailError {
    #[inline]
    pub fn new(node: NodeKey) -> Self {
        Self(node)
    }

    #[inline]
    pub fn node(&self) -> NodeKey {
        self.0
    }
}

impl std::fmt::Display for NotChainTailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node {} is not the tail of its chain", self.0)
    }
}

impl std::error::Error for NotChainTailError {}

/// The node still has a predecessor, but the operation requires the head of
/// a chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotChainHeadError(NodeKey);

impl NotChainHeadError {
    #[inline]
    pub fn new(node: NodeKey) -> Self {
        Self(node)
    }

    #[inline]
    pub fn node(&self) -> NodeKey {
        self.0
    }
}

impl std::fmt::Display for NotChainHeadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node {} is not the head of its chain", self.0)
    }
}

impl std::error::Error for NotChainHeadError {}

/// Both key arguments name the same node, which would close a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelfLinkError(NodeKey);

impl SelfLinkError {
    #[inline]
    pub fn new(node: NodeKey) -> Self {
        Self(node)
    }

    #[inline]
    pub fn node(&self) -> NodeKey {
        self.0
    }
}

impl std::fmt::Display for SelfLinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node {} cannot be linked to itself", self.0)
    }
}

impl std::error::Error for SelfLinkError {}

/// Error returned by [`LinkArena::link_after`].
///
/// [`LinkArena::link_after`]: crate::arena::LinkArena::link_after
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpliceError {
    Stale(StaleNodeError),
    Attached(NodeAttachedError),
    SelfLink(SelfLinkError),
}

impl std::fmt::Display for SpliceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpliceError::Stale(e) => write!(f, "SpliceError: {}", e),
            SpliceError::Attached(e) => write!(f, "SpliceError: {}", e),
            SpliceError::SelfLink(e) => write!(f, "SpliceError: {}", e),
        }
    }
}

impl std::error::Error for SpliceError {}

impl From<StaleNodeError> for SpliceError {
    fn from(e: StaleNodeError) -> Self {
        SpliceError::Stale(e)
    }
}

impl From<NodeAttachedError> for SpliceError {
    fn from(e: NodeAttachedError) -> Self {
        SpliceError::Attached(e)
    }
}

impl From<SelfLinkError> for SpliceError {
    fn from(e: SelfLinkError) -> Self {
        SpliceError::SelfLink(e)
    }
}

/// Error returned by [`LinkArena::unlink`].
///
/// [`LinkArena::unlink`]: crate::arena::LinkArena::unlink
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UnlinkError {
    Stale(StaleNodeError),
    Detached(NodeDetachedError),
}

impl std::fmt::Display for UnlinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnlinkError::Stale(e) => write!(f, "UnlinkError: {}", e),
            UnlinkError::Detached(e) => write!(f, "UnlinkError: {}", e),
        }
    }
}

impl std::error::Error for UnlinkError {}

impl From<StaleNodeError> for UnlinkError {
    fn from(e: StaleNodeError) -> Self {
        UnlinkError::Stale(e)
    }
}

impl From<NodeDetachedError> for UnlinkError {
    fn from(e: NodeDetachedError) -> Self {
        UnlinkError::Detached(e)
    }
}

/// Error returned by [`LinkArena::swap_with_next`].
///
/// [`LinkArena::swap_with_next`]: crate::arena::LinkArena::swap_with_next
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SwapError {
    Stale(StaleNodeError),
    NoSuccessor(NoSuccessorError),
}

impl std::fmt::Display for SwapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwapError::Stale(e) => write!(f, "SwapError: {}", e),
            SwapError::NoSuccessor(e) => write!(f, "SwapError: {}", e),
        }
    }
}

impl std::error::Error for SwapError {}

impl From<StaleNodeError> for SwapError {
    fn from(e: StaleNodeError) -> Self {
        SwapError::Stale(e)
    }
}

impl From<NoSuccessorError> for SwapError {
    fn from(e: NoSuccessorError) -> Self {
        SwapError::NoSuccessor(e)
    }
}

/// Error returned by [`LinkArena::join`].
///
/// [`LinkArena::join`]: crate::arena::LinkArena::join
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JoinError {
    Stale(StaleNodeError),
    NotTail(NotChainTailError),
    NotHead(NotChainHeadError),
    SelfLink(SelfLinkError),
}

impl std::fmt::Display for JoinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinError::Stale(e) => write!(f, "JoinError: {}", e),
            JoinError::NotTail(e) => write!(f, "JoinError: {}", e),
            JoinError::NotHead(e) => write!(f, "JoinError: {}", e),
            JoinError::SelfLink(e) => write!(f, "JoinError: {}", e),
        }
    }
}

impl std::error::Error for JoinError {}

impl From<StaleNodeError> for JoinError {
    fn from(e: StaleNodeError) -> Self {
        JoinError::Stale(e)
    }
}

impl From<NotChainTailError> for JoinError {
    fn from(e: NotChainTailError) -> Self {
        JoinError::NotTail(e)
    }
}

impl From<NotChainHeadError> for JoinError {
    fn from(e: NotChainHeadError) -> Self {
        JoinError::NotHead(e)
    }
}

impl From<SelfLinkError> for JoinError {
    fn from(e: SelfLinkError) -> Self {
        JoinError::SelfLink(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn nk(i: usize) -> NodeKey {
        NodeKey::from_index(i)
    }

    #[test]
    fn test_error_accessors_return_the_offending_key() {
        assert_eq!(StaleNodeError::new(nk(2)).node(), nk(2));
        assert_eq!(NodeAttachedError::new(nk(3)).node(), nk(3));
        assert_eq!(NodeDetachedError::new(nk(4)).node(), nk(4));
        assert_eq!(NoSuccessorError::new(nk(5)).node(), nk(5));
    }

    #[test]
    fn test_display_messages_name_the_node() {
        assert_eq!(
            StaleNodeError::new(nk(1)).to_string(),
            "Node NodeKey(1) does not refer to a live slot"
        );
        assert_eq!(
            SpliceError::from(NodeAttachedError::new(nk(9))).to_string(),
            "SpliceError: Node NodeKey(9) is still linked into a chain"
        );
        assert_eq!(
            JoinError::from(NotChainTailError::new(nk(6))).to_string(),
            "JoinError: Node NodeKey(6) is not the tail of its chain"
        );
    }

    #[test]
    fn test_from_conversions_pick_the_matching_variant() {
        let e: UnlinkError = NodeDetachedError::new(nk(8)).into();
        assert_eq!(e, UnlinkError::Detached(NodeDetachedError::new(nk(8))));
        let e: SwapError = NoSuccessorError::new(nk(8)).into();
        assert_eq!(e, SwapError::NoSuccessor(NoSuccessorError::new(nk(8))));
    }
}
