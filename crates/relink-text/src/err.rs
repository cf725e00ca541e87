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

//! Errors reported by the list layer.

use crate::key::ListKey;
use relink_core::err::{NodeAttachedError, StaleNodeError};

/// The key refers to a list slot that has been destroyed (or never created).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StaleListError(ListKey);

impl StaleListError {
    #[inline]
    pub fn new(list: ListKey) -> Self {
        Self(list)
    }

    #[inline]
    pub fn list(&self) -> ListKey {
        self.0
    }
}

impl std::fmt::Display for StaleListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "List {} is not live in this store", self.0)
    }
}

impl std::error::Error for StaleListError {}

/// The index lies beyond the end of the list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexOutOfBoundsError {
    index: usize,
    len: usize,
}

impl IndexOutOfBoundsError {
    #[inline]
    pub fn new(index: usize, len: usize) -> Self {
        Self { index, len }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }
}

impl std::fmt::Display for IndexOutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Index {} is out of bounds for a list of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for IndexOutOfBoundsError {}

/// Both list arguments name the same list; the operation needs two.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AliasedListsError(ListKey);

impl AliasedListsError {
    #[inline]
    pub fn new(list: ListKey) -> Self {
        Self(list)
    }

    #[inline]
    pub fn list(&self) -> ListKey {
        self.0
    }
}

impl std::fmt::Display for AliasedListsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "List {} cannot be combined with itself", self.0)
    }
}

impl std::error::Error for AliasedListsError {}

/// Error returned by the indexed operations [`TextChains::node_at`] and
/// [`TextChains::split_at`].
///
/// [`TextChains::node_at`]: crate::chains::TextChains::node_at
/// [`TextChains::split_at`]: crate::chains::TextChains::split_at
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IndexError {
    Stale(StaleListError),
    OutOfBounds(IndexOutOfBoundsError),
}

impl std::fmt::Display for IndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexError::Stale(e) => write!(f, "IndexError: {}", e),
            IndexError::OutOfBounds(e) => write!(f, "IndexError: {}", e),
        }
    }
}

impl std::error::Error for IndexError {}

impl From<StaleListError> for IndexError {
    fn from(e: StaleListError) -> Self {
        IndexError::Stale(e)
    }
}

impl From<IndexOutOfBoundsError> for IndexError {
    fn from(e: IndexOutOfBoundsError) -> Self {
        IndexError::OutOfBounds(e)
    }
}

/// Error returned by the two-list operations [`TextChains::append`] and
/// [`TextChains::merge_sorted`].
///
/// [`TextChains::append`]: crate::chains::TextChains::append
/// [`TextChains::merge_sorted`]: crate::chains::TextChains::merge_sorted
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CombineError {
    Stale(StaleListError),
    Aliased(AliasedListsError),
}

impl std::fmt::Display for CombineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CombineError::Stale(e) => write!(f, "CombineError: {}", e),
            CombineError::Aliased(e) => write!(f, "CombineError: {}", e),
        }
    }
}

impl std::error::Error for CombineError {}

impl From<StaleListError> for CombineError {
    fn from(e: StaleListError) -> Self {
        CombineError::Stale(e)
    }
}

impl From<AliasedListsError> for CombineError {
    fn from(e: AliasedListsError) -> Self {
        CombineError::Aliased(e)
    }
}

/// Error returned by [`TextChains::release`].
///
/// [`TextChains::release`]: crate::chains::TextChains::release
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReleaseError {
    Stale(StaleNodeError),
    Attached(NodeAttachedError),
}

impl std::fmt::Display for ReleaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReleaseError::Stale(e) => write!(f, "ReleaseError: {}", e),
            ReleaseError::Attached(e) => write!(f, "ReleaseError: {}", e),
        }
    }
}

impl std::error::Error for ReleaseError {}

impl From<StaleNodeError> for ReleaseError {
    fn from(e: StaleNodeError) -> Self {
        ReleaseError::Stale(e)
    }
}

impl From<NodeAttachedError> for ReleaseError {
    fn from(e: NodeAttachedError) -> Self {
        ReleaseError::Attached(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages_name_the_offender() {
        assert_eq!(
            StaleListError::new(ListKey::from_raw(3)).to_string(),
            "List ListKey(3) is not live in this store"
        );
        assert_eq!(
            IndexOutOfBoundsError::new(9, 4).to_string(),
            "Index 9 is out of bounds for a list of length 4"
        );
        assert_eq!(
            CombineError::from(AliasedListsError::new(ListKey::from_raw(1))).to_string(),
            "CombineError: List ListKey(1) cannot be combined with itself"
        );
    }

    #[test]
    fn test_accessors_return_the_offending_arguments() {
        let err = IndexOutOfBoundsError::new(7, 2);
        assert_eq!(err.index(), 7);
        assert_eq!(err.len(), 2);
        assert_eq!(
            StaleListError::new(ListKey::from_raw(4)).list(),
            ListKey::from_raw(4)
        );
    }

    #[test]
    fn test_from_conversions_pick_the_matching_variant() {
        let e: IndexError = StaleListError::new(ListKey::from_raw(0)).into();
        assert!(matches!(e, IndexError::Stale(_)));
        let e: IndexError = IndexOutOfBoundsError::new(1, 0).into();
        assert!(matches!(e, IndexError::OutOfBounds(_)));
    }
}
