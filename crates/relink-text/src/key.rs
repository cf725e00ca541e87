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

/// A strongly-typed handle to a list within a [`TextChains`] store.
///
/// A simple wrapper around a `usize` slot index. The handle stays valid
/// until the list is destroyed; destroyed slots are reused by later
/// [`TextChains::create`] calls.
///
/// [`TextChains`]: crate::chains::TextChains
/// [`TextChains::create`]: crate::chains::TextChains::create
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListKey(usize);

impl ListKey {
    /// Returns the raw `usize` slot index of the list.
    #[inline]
    pub const fn to_raw(self) -> usize {
        self.0
    }

    /// Creates a `ListKey` from a raw slot index.
    #[inline]
    pub(crate) const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }
}

impl From<ListKey> for usize {
    #[inline]
    fn from(val: ListKey) -> Self {
        val.0
    }
}

impl std::fmt::Display for ListKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ListKey({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_key_round_trips_its_raw_index() {
        let key = ListKey::from_raw(5);
        assert_eq!(key.to_raw(), 5);
        assert_eq!(usize::from(key), 5);
    }

    #[test]
    fn test_list_key_display() {
        assert_eq!(ListKey::from_raw(2).to_string(), "ListKey(2)");
    }
}
