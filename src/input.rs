//! Pre-generated benchmark inputs.
//!
//! Everything a timed region consumes is built here, ahead of time, from a
//! seeded RNG: a numeric sequence and a batch of fixed-length random words.
//! Shuffling happens at generation time so the measured loops only ever walk
//! an immutable array.

use std::fmt;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Length of every generated word, in characters.
pub const WORD_LEN: usize = 30;

/// Presentation order of pre-generated inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOrder {
    /// Values appear in ascending generation order.
    Ascending,
    /// Values appear in a uniform random permutation.
    Shuffled,
}

impl fmt::Display for InsertOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InsertOrder::Ascending => "ordered",
            InsertOrder::Shuffled => "shuffled",
        })
    }
}

/// Input arrays for the insert workloads: the sequence `0..size` and `size`
/// random words of [`WORD_LEN`] ASCII letters.
#[derive(Debug, Clone)]
pub struct InsertInputs {
    pub numbers: Vec<i64>,
    pub words: Vec<String>,
}

impl InsertInputs {
    /// Generates both arrays from `seed`. With [`InsertOrder::Shuffled`] the
    /// numbers and the words are permuted independently of each other.
    pub fn generate(size: usize, order: InsertOrder, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);

        let mut numbers: Vec<i64> = (0..size as i64).collect();
        let mut words: Vec<String> = (0..size).map(|_| random_word(&mut rng, WORD_LEN)).collect();

        if order == InsertOrder::Shuffled {
            numbers.shuffle(&mut rng);
            words.shuffle(&mut rng);
        }

        Self { numbers, words }
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

/// Random word drawn uniformly from the ASCII letters.
pub fn random_word<R: Rng>(rng: &mut R, len: usize) -> String {
    const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
    (0..len)
        .map(|_| LETTERS[rng.random_range(0..LETTERS.len())] as char)
        .collect()
}
