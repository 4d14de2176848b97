use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use lexicon::Trie;


fn dictionary(size: usize) -> Trie {
    let mut rng = StdRng::seed_from_u64(42);
    let mut trie = Trie::new();
    while trie.num_words() < size {
        let len = rng.gen_range(2..10);
        let word: String = (0..len).map(|_| (b'a' + rng.gen_range(0..26)) as char).collect();
        trie.add_word(&word);
    }
    trie
}

fn criterion_benchmark(c: &mut Criterion) {
    let trie = dictionary(50_000);

    c.bench_function("contains", |b| b.iter(|| trie.contains_word(black_box("hello"))));
    c.bench_function("suggest dist 2", |b| b.iter(|| trie.suggest_corrections(black_box("puzzle"), 2)));

    { let mut group = c.benchmark_group("match");
        group.sample_size(10);
        group.bench_function("len 5", |b| b.iter(|| trie.match_pattern(black_box("_____"))));
        group.bench_function("star", |b| b.iter(|| trie.match_pattern(black_box("*e*s"))));
        group.bench_function("optional", |b| b.iter(|| trie.match_pattern(black_box("a?b?c*"))));
    }

    c.bench_function("enumerate", |b| b.iter(|| trie.words().count()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
