use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use wordcache::{WordCache, DEFAULT_CAPACITY};
use wordindex::tokenizer::tokenize;
use wordindex::InvertedIndex;

fn build_index() -> InvertedIndex {
    let mut index = InvertedIndex::new();
    for d in 0..100 {
        let text: String = (0..300)
            .map(|w| format!("term{} ", (d * 11 + w * 17) % 2000))
            .collect();
        index.index_document(&format!("doc{}", d), tokenize(&text));
    }
    index
}

fn bench_cached_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_lookup");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("lookup_hot_word", |b| {
        let cache = WordCache::new(build_index(), DEFAULT_CAPACITY);
        cache.lookup("term42");

        b.iter(|| black_box(cache.lookup("term42").len()));
    });

    group.finish();
}

fn bench_cache_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_miss");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("lookup_rotating_words", |b| {
        let cache = WordCache::new(build_index(), DEFAULT_CAPACITY);
        let words: Vec<String> = (0..100).map(|i| format!("term{}", i)).collect();

        let mut counter = 0;
        b.iter(|| {
            // Cycling through more words than slots guarantees misses
            black_box(cache.lookup(&words[counter % words.len()]).len());
            counter += 1;
        });
    });

    group.bench_function("lookup_absent", |b| {
        let cache = WordCache::new(build_index(), DEFAULT_CAPACITY);
        b.iter(|| black_box(cache.lookup("nowhere").is_found()));
    });

    group.finish();
}

criterion_group!(benches, bench_cached_lookup, bench_cache_miss);
criterion_main!(benches);
