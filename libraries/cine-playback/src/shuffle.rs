//! Playlist randomization

use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

/// Shuffle a playlist in place (Fisher-Yates)
///
/// Each item has equal probability of landing at any position.
pub fn shuffle_items<T>(items: &mut [T]) {
    shuffle_items_with(items, &mut thread_rng());
}

/// Shuffle with a caller-supplied RNG
pub fn shuffle_items_with<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
