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

use std::num::NonZeroUsize;

/// A strongly-typed, non-zero handle to a node within a [`LinkArena`].
///
/// The wrapper around `NonZeroUsize` keeps node keys 1-based, so
/// `Option<NodeKey>` occupies the same space as a bare `usize` thanks to the
/// niche optimization. The arena's link columns rely on this by encoding
/// "no neighbor" as the reserved raw index `0`.
///
/// [`LinkArena`]: crate::arena::LinkArena
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(NonZeroUsize);

impl NodeKey {
    /// Returns the underlying `usize` value of the key (1-based).
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Creates a `NodeKey` from a 1-based index.
    ///
    /// # Panics
    ///
    /// Panics if `one_based_index` is zero.
    #[inline]
    pub(crate) fn from_index(one_based_index: usize) -> Self {
        Self(NonZeroUsize::new(one_based_index).expect("NodeKey indices must be 1-based"))
    }
}

impl std::fmt::Display for NodeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeKey({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_key_is_one_based() {
        let key = NodeKey::from_index(3);
        assert_eq!(key.get(), 3);
    }

    #[test]
    #[should_panic(expected = "1-based")]
    fn test_node_key_rejects_zero() {
        let _ = NodeKey::from_index(0);
    }

    #[test]
    fn test_node_key_display() {
        assert_eq!(NodeKey::from_index(7).to_string(), "NodeKey(7)");
    }

    #[test]
    fn test_option_node_key_is_pointer_sized() {
        assert_eq!(
            std::mem::size_of::<Option<NodeKey>>(),
            std::mem::size_of::<usize>()
        );
    }
}
