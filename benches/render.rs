use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vcard_qr::render::{DEFAULT_SIZE_PX, RenderOptions, render_ascii, render_image, render_svg};
use vcard_qr::{ECLevel, encode};

fn bench_render_image(c: &mut Criterion) {
    let symbol = encode(&[b'x'; 120], ECLevel::M).unwrap();
    let options = RenderOptions::fit(&symbol, DEFAULT_SIZE_PX);
    c.bench_function("render_image_200px", |b| {
        b.iter(|| render_image(black_box(&symbol), black_box(&options)))
    });

    let large = RenderOptions::fit(&symbol, 1024);
    c.bench_function("render_image_1024px", |b| {
        b.iter(|| render_image(black_box(&symbol), black_box(&large)))
    });
}

fn bench_render_vector(c: &mut Criterion) {
    let symbol = encode(&[b'x'; 120], ECLevel::M).unwrap();
    let options = RenderOptions::default();
    c.bench_function("render_svg", |b| {
        b.iter(|| render_svg(black_box(&symbol), black_box(&options)))
    });
    c.bench_function("render_ascii", |b| {
        b.iter(|| render_ascii(black_box(&symbol), black_box(4)))
    });
}

criterion_group!(benches, bench_render_image, bench_render_vector);
criterion_main!(benches);
