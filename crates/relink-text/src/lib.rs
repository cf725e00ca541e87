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

//! Encapsulated string lists over the `relink-core` node arena.
//!
//! A [`chains::TextChains`] store owns many lists at once, addressed by
//! opaque [`key::ListKey`]s. The link structure stays hidden: callers get
//! whole-list operations (count, min/max, positional lookup, append,
//! split, sorted merge) plus node-granular push/pop, all without payload
//! copies. Payloads are `Cow<str>`, so a list can mix strings it owns with
//! strings borrowed from the caller.

pub mod chains;
pub mod err;
pub mod key;

pub mod prelude {
    pub use crate::chains::{TextChains, TextIter, TextKeyIter};
    pub use crate::err::{
        AliasedListsError, CombineError, IndexError, IndexOutOfBoundsError, ReleaseError,
        StaleListError,
    };
    pub use crate::key::ListKey;
    pub use relink_core::key::NodeKey;
}
