//! Random numbers for dice throws.
//!
//! Throws draw from a `RandomSource` so tests can pin the initial motion.
//! The default source is a xorshift32 generator seeded once per scene.

/// Uniform samples in `[0, 1)`
pub trait RandomSource {
    fn next_f32(&mut self) -> f32;
}

/// Xorshift32 step (Marsaglia). State must be non-zero.
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

#[derive(Clone, Debug)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    pub fn new(seed: u32) -> Self {
        // Zero is a fixed point of xorshift.
        let state = if seed == 0 { 0x9E37_79B9 } else { seed };
        Self { state }
    }

    /// Seed from the page's `Math.random` on wasm, from the clock elsewhere
    pub fn from_entropy() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new((js_sys::Math::random() * u32::MAX as f64) as u32)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let nanos = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.subsec_nanos())
                .unwrap_or(12345);
            Self::new(nanos)
        }
    }
}

impl RandomSource for Xorshift32 {
    fn next_f32(&mut self) -> f32 {
        // Top 24 bits give an exactly representable f32 in [0, 1).
        (xorshift32(&mut self.state) >> 8) as f32 / (1u32 << 24) as f32
    }
}
