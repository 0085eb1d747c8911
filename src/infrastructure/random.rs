//! Random sources backed by `rand`

use rand::Rng;

use crate::domain::variation::RandomSource;

/// Draws from the calling thread's generator
///
/// Each request thread has its own generator, so concurrent draws never
/// contend on a lock.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl ThreadRandomSource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandomSource {
    fn next_uniform(&self) -> f64 {
        rand::thread_rng().gen_range(0.0..1.0)
    }
}
