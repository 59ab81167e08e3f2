//! Random number generation for the sampling engine.

mod prng;

pub use prng::SamplerRng;
