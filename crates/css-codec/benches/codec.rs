use criterion::{criterion_group, criterion_main, Criterion};
use css_codec::{Codec, CssCodec};
use std::hint::black_box;

/// A stylesheet-sized payload mixing plain identifiers with characters that escape.
fn sample_payload() -> String {
    let mut s = String::new();
    for i in 0..500 {
        s.push_str(&format!("font-family: \"Caf\u{e9} {i}\"; content: '</style>';\n"));
    }
    s
}

fn bench_encode(c: &mut Criterion) {
    let payload = sample_payload();
    c.bench_function("encode_stylesheet", |b| {
        b.iter(|| CssCodec.encode(&[' '], black_box(&payload)))
    });
}

fn bench_decode(c: &mut Criterion) {
    let escaped = CssCodec.encode(&[], &sample_payload());
    c.bench_function("decode_stylesheet", |b| {
        b.iter(|| CssCodec.decode(black_box(&escaped)))
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
