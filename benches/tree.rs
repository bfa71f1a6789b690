extern crate aplomb;

use criterion::{Criterion, criterion_group, criterion_main};

fn insert(c: &mut Criterion) {
    let mut tree = aplomb::Tree::<usize>::new();
    c.bench_function("aplomb_insert", |b| {
        b.iter(|| {
            for k in 0..100 {
                tree.insert(k);
            }
        })
    });
    let mut tree = avl::AvlTreeSet::<usize>::new();
    c.bench_function("avl_insert", |b| {
        b.iter(|| {
            for k in 0..100 {
                tree.insert(k);
            }
        })
    });
}

fn remove(c: &mut Criterion) {
    c.bench_function("aplomb_remove", |b| {
        b.iter(|| {
            let mut tree: aplomb::Tree<usize> = (0..100).collect();
            for k in 0..100 {
                tree.remove(&k);
            }
        })
    });
    c.bench_function("avl_remove", |b| {
        b.iter(|| {
            let mut tree = avl::AvlTreeSet::<usize>::new();
            for k in 0..100 {
                tree.insert(k);
            }
            for k in 0..100 {
                tree.remove(&k);
            }
        })
    });
}

criterion_group!(benches, insert, remove);
criterion_main!(benches);
