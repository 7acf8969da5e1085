use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use translit_core::{Registry, Transliterator, GOST_779A, GOST_779B};

static INPUTS: &[(&str, &str)] = &[
    ("short", "Привет, Ёж!"),
    (
        "medium",
        "Съешь же ещё этих мягких французских булок, да выпей чаю.",
    ),
    (
        "mixed",
        "<div class=\"news\">№ 42: Щедрый урожай в Подмосковье — 2024</div>",
    ),
    ("ascii", "The quick brown fox jumps over the lazy dog."),
];

fn bench_standard(c: &mut Criterion, id: &str) {
    let t = Transliterator::with_standard(Registry::global(), id).unwrap();
    let mut group = c.benchmark_group(format!("transliterate/{id}"));
    for &(label, text) in INPUTS {
        group.bench_with_input(BenchmarkId::new(label, text.len()), &text, |b, &text| {
            b.iter(|| t.transliterate(text));
        });
    }
    group.finish();
}

fn bench_diacritics(c: &mut Criterion) {
    bench_standard(c, GOST_779A);
}

fn bench_digraph(c: &mut Criterion) {
    bench_standard(c, GOST_779B);
}

fn bench_large(c: &mut Criterion) {
    let t = Transliterator::new(Registry::global()).unwrap();
    let text = "Широкая электрификация южных губерний даст мощный толчок подъёму сельского хозяйства. "
        .repeat(1000);
    c.bench_function("transliterate/large", |b| b.iter(|| t.transliterate(&text)));
}

criterion_group!(benches, bench_diacritics, bench_digraph, bench_large);
criterion_main!(benches);
