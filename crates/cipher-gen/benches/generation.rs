use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use cipher_gen::{CipherType, Generator, GeneratorConfig, ModMatrix, WordBank};

const QUOTE: &str = "The only way to do great work is to love what you do.";

fn bench_encoders(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoders");
    for cipher in [
        CipherType::K3Aristocrat,
        CipherType::Hill3x3,
        CipherType::Nihilist,
        CipherType::FractionatedMorse,
        CipherType::Baconian,
    ] {
        let mut gen = Generator::new(ChaCha20Rng::from_seed([1u8; 32]));
        group.bench_function(cipher.slug(), |b| {
            b.iter(|| gen.generate(cipher, QUOTE).unwrap());
        });
    }
    group.finish();
}

fn bench_matrices(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    c.bench_function("random_invertible_3x3", |b| {
        b.iter(|| ModMatrix::random_invertible(&mut rng, 3));
    });
}

fn bench_cryptarithm(c: &mut Criterion) {
    let words = WordBank::from_quotes([
        "Send more money to the old mine and some ores for the road",
        "Dreams need more than good seeds; they need sun and rain",
    ]);
    let mut group = c.benchmark_group("cryptarithm");
    group.sample_size(10);
    group.bench_function("generate", |b| {
        let mut gen = Generator::with_config(
            ChaCha20Rng::from_seed([3u8; 32]),
            GeneratorConfig {
                cryptarithm_rounds: 50,
                ..GeneratorConfig::default()
            },
        )
        .with_word_bank(words.clone());
        b.iter(|| gen.generate(CipherType::Cryptarithm, "").ok());
    });
    group.finish();
}

criterion_group!(benches, bench_encoders, bench_matrices, bench_cryptarithm);
criterion_main!(benches);
