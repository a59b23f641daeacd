use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use workout_tracker_core::{render, Command, Config, Engine, Inputs};

fn bench_update(c: &mut Criterion) {
    let mut eng = Engine::with_rng(Config::default(), SmallRng::seed_from_u64(1));
    eng.update(0.0, Inputs::one(Command::Start));

    c.bench_function("widget_step", |b| {
        b.iter(|| {
            eng.update(black_box(1.0 / 60.0), Inputs::default());
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut eng = Engine::with_rng(Config::default(), SmallRng::seed_from_u64(1));
    eng.update(0.0, Inputs::one(Command::Start));
    for _ in 0..250 {
        eng.update(1.0 / 60.0, Inputs::default());
    }

    c.bench_function("scene_render", |b| {
        b.iter(|| black_box(render(eng.state())))
    });
}

criterion_group!(benches, bench_update, bench_render);
criterion_main!(benches);
