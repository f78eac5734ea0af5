//! Store performance benchmarks
//!
//! - Reducer execution through `Store::send`
//! - Feedback loop overhead
//! - Listener notification fan-out
//!
//! Run with: `cargo bench`

#![allow(missing_docs)] // Benchmarks don't need extensive docs
#![allow(clippy::unwrap_used)] // Benchmarks can unwrap during setup

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use module_store_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use module_store_macros::Action;
use module_store_runtime::Store;

#[derive(Clone, Debug, Default)]
struct BenchState {
    counter: i64,
    items: Vec<u32>,
}

#[derive(Action, Clone, Debug)]
enum BenchAction {
    Increment,
    Push(u32),
    PushThree(u32),
}

struct BenchReducer;

impl Reducer for BenchReducer {
    type State = BenchState;
    type Action = BenchAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            BenchAction::Increment => {
                state.counter += 1;
                SmallVec::new()
            },
            BenchAction::Push(value) => {
                state.items.push(value);
                SmallVec::new()
            },
            BenchAction::PushThree(value) => smallvec![
                Effect::send(BenchAction::Push(value)),
                Effect::send(BenchAction::Push(value + 1)),
                Effect::send(BenchAction::Push(value + 2)),
            ],
        }
    }
}

fn bench_send(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_send");
    group.throughput(Throughput::Elements(1));

    group.bench_function("no_listeners", |b| {
        let mut store = Store::new(BenchState::default(), BenchReducer, ());
        b.iter(|| store.send(black_box(BenchAction::Increment)).unwrap());
    });

    group.bench_function("feedback_three", |b| {
        let mut store = Store::new(BenchState::default(), BenchReducer, ());
        b.iter(|| {
            store.send(black_box(BenchAction::PushThree(1))).unwrap();
            if store.state().items.len() > 10_000 {
                store = Store::new(BenchState::default(), BenchReducer, ());
            }
        });
    });

    group.bench_function("sixteen_listeners", |b| {
        let mut store = Store::new(BenchState::default(), BenchReducer, ());
        for _ in 0..16 {
            store.subscribe(|state: &BenchState| {
                black_box(state.counter);
            });
        }
        b.iter(|| store.send(black_box(BenchAction::Increment)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_send);
criterion_main!(benches);
