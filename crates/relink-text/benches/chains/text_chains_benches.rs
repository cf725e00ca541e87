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

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use relink_text::{chains::TextChains, key::ListKey};
use std::hint::black_box;

// -----------------------
// Problem size constants
// -----------------------
const NUM_STRINGS: usize = 512;

// Two sorted lists of NUM_STRINGS / 2 strings each, interleaved by key so a
// merge has to alternate between them.
fn sorted_store() -> (TextChains<'static>, ListKey, ListKey) {
    let mut store = TextChains::with_capacity(NUM_STRINGS, 2);
    let lhs = store.create();
    let rhs = store.create();
    for i in 0..NUM_STRINGS / 2 {
        store.push_back(lhs, format!("key{:05}", 2 * i)).unwrap();
        store.push_back(rhs, format!("key{:05}", 2 * i + 1)).unwrap();
    }
    (store, lhs, rhs)
}

fn bench_merge_sorted(c: &mut Criterion) {
    c.bench_function("chains_merge_sorted", |b| {
        b.iter_batched(
            sorted_store,
            |(mut store, lhs, rhs)| {
                store.merge_sorted(lhs, rhs).unwrap();
                black_box(store)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_split_append_roundtrip(c: &mut Criterion) {
    let mut store = TextChains::with_capacity(NUM_STRINGS, 2);
    let list = store.create();
    for i in 0..NUM_STRINGS {
        store.push_back(list, format!("key{:05}", i)).unwrap();
    }

    c.bench_function("chains_split_append_roundtrip", |b| {
        b.iter(|| {
            let split = store.split_at(list, black_box(NUM_STRINGS / 2)).unwrap();
            store.append(list, split).unwrap();
            store.destroy(split).unwrap();
        })
    });
}

fn bench_len_walk(c: &mut Criterion) {
    let mut store = TextChains::with_capacity(NUM_STRINGS, 1);
    let list = store.create();
    for i in 0..NUM_STRINGS {
        store.push_back(list, format!("key{:05}", i)).unwrap();
    }

    c.bench_function("chains_len_walk", |b| {
        b.iter(|| black_box(store.len(black_box(list)).unwrap()))
    });
}

fn bench_push_pop_cycle(c: &mut Criterion) {
    let mut store = TextChains::new();
    let list = store.create();
    store.push_back(list, "anchor").unwrap();

    c.bench_function("chains_push_pop_cycle", |b| {
        b.iter(|| {
            store.push_front(list, black_box("transient")).unwrap();
            let node = store.pop_front(list).unwrap().unwrap();
            black_box(store.release(node).unwrap());
        })
    });
}

criterion_group!(
    benches,
    bench_merge_sorted,
    bench_split_append_roundtrip,
    bench_len_walk,
    bench_push_pop_cycle
);
criterion_main!(benches);
