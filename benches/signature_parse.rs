use criterion::{criterion_group, criterion_main, Criterion};
use jcall::mutf8::to_modified;
use jcall::Signature;

fn bench_signature_parse(c: &mut Criterion) {
    // Signatures are re-parsed on every dispatched call, so this path is
    // the per-call floor.
    let sig = "(Ljava/lang/String;[[IJLjava/util/Map;D)Ljava/lang/Object;";
    c.bench_function("signature_parse_mixed", |b| {
        b.iter(|| Signature::parse(sig).unwrap())
    });

    let simple = "(II)I";
    c.bench_function("signature_parse_simple", |b| {
        b.iter(|| Signature::parse(simple).unwrap())
    });
}

fn bench_mutf8_encode(c: &mut Criterion) {
    let ascii = "the quick brown fox jumps over the lazy dog".repeat(8);
    c.bench_function("mutf8_encode_ascii", |b| {
        b.iter(|| to_modified(ascii.as_bytes()).unwrap())
    });

    let emoji = "mixed \u{1F600} text \u{10000} with surrogates".repeat(8);
    c.bench_function("mutf8_encode_supplementary", |b| {
        b.iter(|| to_modified(emoji.as_bytes()).unwrap())
    });
}

criterion_group!(benches, bench_signature_parse, bench_mutf8_encode);
criterion_main!(benches);
