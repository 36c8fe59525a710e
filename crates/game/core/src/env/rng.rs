//! Injectable random number generation.
//!
//! Every simulation owns exactly one [`RandomSource`]. Strategies never reach
//! for a global generator; they receive the simulation's source per call so
//! tests can substitute a scripted one.

/// Source of randomness shared by one simulation.
pub trait RandomSource: Send {
    /// Generate the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        // 24 high bits keep the result exactly representable.
        (self.next_u32() >> 8) as f64 / (1u32 << 24) as f64
    }

    /// Uniform value in `[min, max]` inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = (max - min) as f64 + 1.0;
        let offset = (self.next_f64() * span) as u32;
        min + offset.min(max - min)
    }

    /// Uniform index in `[0, len)`. Returns 0 for an empty range.
    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        ((self.next_f64() * len as f64) as usize).min(len - 1)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// Same seed, same sequence.
#[derive(Clone, Debug)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    pub fn seeded(seed: u64) -> Self {
        Self {
            state: Self::pcg_step(seed),
        }
    }

    /// `state' = state × multiplier + increment (mod 2^64)`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RandomSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let output = Self::pcg_output(self.state);
        self.state = Self::pcg_step(self.state);
        output
    }
}

/// Replays a fixed list of `[0, 1)` values, cycling when exhausted.
///
/// Useful for pinning down decisions in tests and scripted demos.
#[derive(Clone, Debug)]
pub struct SequenceRng {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values
            .into()
            .into_iter()
            .map(|v| v.clamp(0.0, 0.999_999))
            .collect();
        Self { values, cursor: 0 }
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_f64() * u32::MAX as f64) as u32
    }

    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Derive an independent seed for a sub-stream (one per context, per session...).
///
/// SplitMix64-style avalanche over the combined inputs.
pub fn mix_seed(seed: u64, stream: u64) -> u64 {
    let mut hash = seed ^ stream.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}
