use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dialkit::basics::Coordinate;
use dialkit::ellipse::EllipseParameters;
use dialkit::gauge::round_gauge_254;
use dialkit::recording::RecordingContext;

fn bench_native_angle(c: &mut Criterion) {
    let ellipse = EllipseParameters::new(Coordinate::new(0.5, 0.5), 1.0 / 0.43, 0.3, 0.7);
    c.bench_function("native_angle", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..360 {
                let visual = i as f64 * (std::f64::consts::TAU / 360.0);
                acc += ellipse.native_angle(black_box(visual));
            }
            acc
        })
    });
}

fn bench_get_point(c: &mut Criterion) {
    let ellipse = EllipseParameters::new(Coordinate::new(0.5, 0.5), 1.0 / 0.43, 0.3, 0.7);
    c.bench_function("get_point", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..360 {
                let theta = i as f64 * (std::f64::consts::TAU / 360.0);
                let p = ellipse.get_point(black_box(theta)).unwrap();
                acc += p.x + p.y;
            }
            acc
        })
    });
}

fn bench_round_gauge(c: &mut Criterion) {
    let gauge = round_gauge_254(Box::new(|| 0.23));
    c.bench_function("round_gauge_254", |b| {
        b.iter(|| {
            let mut ctx = RecordingContext::new();
            gauge.draw(black_box(&mut ctx)).unwrap();
            ctx.ops().len()
        })
    });
}

criterion_group!(benches, bench_native_angle, bench_get_point, bench_round_gauge);
criterion_main!(benches);
