use rand::Rng;
use rand::seq::SliceRandom;

use crate::pair::Pair;

/// Pick `requested` pairs uniformly at random, in shuffled order.
///
/// The count is clamped to `1..=pairs.len()`. The RNG is supplied by the
/// caller so a seeded one can drive deterministic tests; the caller is also
/// responsible for rejecting an empty collection before calling.
pub fn sample<R: Rng>(mut pairs: Vec<Pair>, requested: i64, rng: &mut R) -> Vec<Pair> {
    let count = if requested <= 0 {
        1
    } else {
        (requested as usize).min(pairs.len())
    };

    pairs.shuffle(rng);
    pairs.truncate(count);
    pairs
}
