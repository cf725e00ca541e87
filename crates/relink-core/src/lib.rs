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

//! Arena-backed doubly linked chains addressed by stable keys.
//!
//! This crate is the intrusive node layer: callers hold [`key::NodeKey`]s
//! and rearrange chains directly through the splice primitives of
//! [`arena::LinkArena`]. Higher-level list types (such as the encapsulated
//! string lists in `relink-text`) build on these primitives and hide the
//! link structure behind their own handles.

pub mod arena;
pub mod err;
pub mod key;

pub mod prelude {
    pub use crate::arena::{ChainIter, LinkArena};
    pub use crate::err::{
        JoinError, NoSuccessorError, NodeAttachedError, NodeDetachedError, NotChainHeadError,
        NotChainTailError, SelfLinkError, SpliceError, StaleNodeError, SwapError, UnlinkError,
    };
    pub use crate::key::NodeKey;
}
