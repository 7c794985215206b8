use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use cipher_gen::{CipherResult, CipherType, Generator};

fn main() {
    let mut gen = Generator::new(ChaCha20Rng::from_seed([7u8; 32]));
    let quote = "Fortune favors the bold.";

    for cipher in [CipherType::K1Aristocrat, CipherType::Hill2x2, CipherType::Nihilist] {
        let result = gen.generate(cipher, quote).expect("generation");
        println!("{cipher}: {}", result.encrypted_text());
        if let CipherResult::Matrix(m) = &result {
            println!("  key matrix: {:?}", m.matrix.rows());
        }
    }
}
