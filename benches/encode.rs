use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vcard_qr::encoder::mask::select_mask;
use vcard_qr::encoder::reed_solomon::ReedSolomonEncoder;
use vcard_qr::{Contact, ECLevel, QrEncoder, Version, encode, encode_contact};

fn sample_contact() -> Contact {
    Contact {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        phone: "+44 20 7946 0000".into(),
        email: "ada@example.com".into(),
        company: "Analytical Engines".into(),
        job_title: "Programmer".into(),
        website: "https://example.com/ada".into(),
        ..Contact::default()
    }
}

fn bench_encode_short(c: &mut Criterion) {
    c.bench_function("encode_hello_v1_m", |b| {
        b.iter(|| encode(black_box(b"hello"), black_box(ECLevel::M)))
    });
}

fn bench_encode_contact(c: &mut Criterion) {
    let contact = sample_contact();
    c.bench_function("encode_vcard_m", |b| {
        b.iter(|| encode_contact(black_box(&contact), black_box(ECLevel::M)))
    });
}

fn bench_encode_v10(c: &mut Criterion) {
    let data = vec![b'x'; 213];
    c.bench_function("encode_v10_m", |b| {
        b.iter(|| encode(black_box(&data), black_box(ECLevel::M)))
    });
}

fn bench_reed_solomon(c: &mut Criterion) {
    let rs = ReedSolomonEncoder::new(26);
    let data = vec![0xA5u8; 43];
    c.bench_function("reed_solomon_26_ecc", |b| {
        b.iter(|| rs.encode(black_box(&data)))
    });
}

fn bench_mask_selection(c: &mut Criterion) {
    let unmasked = QrEncoder::assemble(&[b'x'; 213], Version::MAX, ECLevel::M).unwrap();
    c.bench_function("select_mask_v10", |b| {
        b.iter(|| select_mask(black_box(&unmasked), black_box(ECLevel::M)))
    });
}

criterion_group!(
    benches,
    bench_encode_short,
    bench_encode_contact,
    bench_encode_v10,
    bench_reed_solomon,
    bench_mask_selection
);
criterion_main!(benches);
