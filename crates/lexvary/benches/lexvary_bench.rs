// Criterion benchmarks for lexvary.
//
// Run:
//   cargo bench -p lexvary

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use lexvary::variation::FixedSource;
use lexvary::{
    VariationOptions, generate_batch, generate_sentence_variations,
    generate_word_variations_with_source,
};

const WORDS: &[&str] = &[
    "password", "administrateur", "facade", "bonjour", "balloon", "secret", "motdepasse",
    "utilisateur", "connexion", "caf\u{00E9}",
];

const SENTENCES: &[&str] = &[
    "bonjour le monde",
    "par exemple, s'il vous pla\u{00EE}t",
    "donne moi un exemple",
    "c'est-\u{00E0}-dire mot de passe",
];

fn bench_words(c: &mut Criterion) {
    let options = VariationOptions::all();
    c.bench_function("word_variations", |b| {
        b.iter(|| {
            for word in WORDS {
                let out =
                    generate_word_variations_with_source(black_box(word), &options, &mut FixedSource(42));
                black_box(out.ok());
            }
        })
    });
}

fn bench_sentences(c: &mut Criterion) {
    let options = VariationOptions::all();
    c.bench_function("sentence_variations", |b| {
        b.iter(|| {
            for sentence in SENTENCES {
                black_box(generate_sentence_variations(black_box(sentence), &options).ok());
            }
        })
    });
}

/// Fan-out over a larger input list.
fn bench_batch(c: &mut Criterion) {
    let options = VariationOptions::all();
    let inputs: Vec<String> = (0..256)
        .map(|i| {
            if i % 4 == 0 {
                SENTENCES[i % SENTENCES.len()].to_string()
            } else {
                format!("{}{i}", WORDS[i % WORDS.len()])
            }
        })
        .collect();
    c.bench_function("batch_256", |b| {
        b.iter(|| black_box(generate_batch(black_box(&inputs), &options)))
    });
}

criterion_group!(benches, bench_words, bench_sentences, bench_batch);
criterion_main!(benches);
