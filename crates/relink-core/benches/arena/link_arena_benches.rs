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

use criterion::{Criterion, criterion_group, criterion_main};
use relink_core::{arena::LinkArena, key::NodeKey};
use std::hint::black_box;

// -----------------------
// Problem size constants
// -----------------------
const NUM_NODES: usize = 1024;

// Build one chain holding 0..NUM_NODES in order.
fn build_chain() -> (LinkArena<i64>, Vec<NodeKey>) {
    let mut arena = LinkArena::with_capacity(NUM_NODES);
    let mut keys = Vec::with_capacity(NUM_NODES);
    keys.push(arena.alloc(0i64));
    for value in 1..NUM_NODES as i64 {
        let tail = *keys.last().unwrap();
        keys.push(arena.push_tail(tail, value).unwrap());
    }
    (arena, keys)
}

fn bench_unlink_relink_middle(c: &mut Criterion) {
    let (mut arena, keys) = build_chain();
    let anchor = keys[NUM_NODES / 2 - 1];
    let node = keys[NUM_NODES / 2];

    c.bench_function("arena_unlink_relink_middle", |b| {
        b.iter(|| {
            arena.unlink(black_box(node)).unwrap();
            arena.link_after(black_box(anchor), node).unwrap();
        })
    });
}

fn bench_swap_with_next_pair(c: &mut Criterion) {
    let (mut arena, keys) = build_chain();
    let (a, b2) = (keys[0], keys[1]);

    c.bench_function("arena_swap_with_next_pair", |b| {
        b.iter(|| {
            // Two swaps restore the original order.
            arena.swap_with_next(black_box(a)).unwrap();
            arena.swap_with_next(black_box(b2)).unwrap();
        })
    });
}

fn bench_tail_walk(c: &mut Criterion) {
    let (arena, keys) = build_chain();
    let head = keys[0];

    c.bench_function("arena_tail_walk", |b| {
        b.iter(|| black_box(arena.tail_of(black_box(head)).unwrap()))
    });
}

fn bench_iter_sum(c: &mut Criterion) {
    let (arena, keys) = build_chain();
    let head = keys[0];

    c.bench_function("arena_iter_sum", |b| {
        b.iter(|| {
            let sum: i64 = arena.iter_from(black_box(head)).map(|(_, &v)| v).sum();
            black_box(sum)
        })
    });
}

criterion_group!(
    benches,
    bench_unlink_relink_middle,
    bench_swap_with_next_pair,
    bench_tail_walk,
    bench_iter_sum
);
criterion_main!(benches);
