#[macro_use]
extern crate criterion;

use criterion::Criterion;
use grayscale_mandelbrot::{render, Camera, ToneFilter, Xy};
use num::complex::Complex64;

fn small_frame(c: &mut Criterion) {
    let camera = Camera::new(Xy::new(256, 256), 0.3, Complex64::new(-0.5, 0.0)).unwrap();
    c.bench_function("render 256x256 at 500 iterations", move |b| {
        b.iter(|| render(camera, 500, 100.0, ToneFilter::high_contrast()).unwrap())
    });
}

criterion_group!(benches, small_frame);
criterion_main!(benches);
