//! Random streams for the passes
//!
//! Both generators are owned values seeded explicitly, so two worlds built
//! with the same config replay the exact same frames.

/// Xorshift32 random number generator
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Seeded uniform stream used by the flow step
#[derive(Clone, Debug)]
pub struct Rng {
    state: u32,
}

impl Rng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { crate::domain::config::FALLBACK_SEED } else { seed },
        }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        xorshift32(&mut self.state)
    }

    /// Uniform in [0, 1)
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 * (1.0 / (1u32 << 24) as f32)
    }

    /// Uniform in [0, n)
    #[inline]
    pub fn below(&mut self, n: u32) -> u32 {
        debug_assert!(n > 0);
        ((self.next_u32() as u64 * n as u64) >> 32) as u32
    }

    /// Round to an integer, up with probability equal to the fractional part.
    ///
    /// Averaged over many calls the result equals `v`, which lets a slow
    /// velocity still move liquid the right distance over time.
    #[inline]
    pub fn stochastic_round(&mut self, v: f32) -> i32 {
        let floor = v.floor();
        let frac = v - floor;
        let up = frac > self.next_f32();
        floor as i32 + up as i32
    }
}

/// Grid step in one of the eight compass directions, possibly scaled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

const COMPASS: [Offset; 8] = [
    Offset { dx: 0, dy: -1 },
    Offset { dx: 1, dy: -1 },
    Offset { dx: 1, dy: 0 },
    Offset { dx: 1, dy: 1 },
    Offset { dx: 0, dy: 1 },
    Offset { dx: -1, dy: 1 },
    Offset { dx: -1, dy: 0 },
    Offset { dx: -1, dy: -1 },
];

/// Shuffled compass table with a cursor.
///
/// Each full cycle hands out all eight directions once, then the table is
/// reshuffled, so no direction is consistently tried first.
#[derive(Clone, Debug)]
pub struct OffsetSource {
    table: [Offset; 8],
    cursor: usize,
    rng: Rng,
}

impl OffsetSource {
    pub fn new(seed: u32) -> Self {
        let mut source = Self {
            table: COMPASS,
            cursor: 0,
            // Decorrelate from the flow stream seeded with the same value
            rng: Rng::new(seed.rotate_left(16) ^ 0x9E37_79B9),
        };
        source.shuffle();
        source
    }

    /// Next unit direction
    #[inline]
    pub fn next_direction(&mut self) -> Offset {
        if self.cursor == self.table.len() {
            self.shuffle();
        }
        let o = self.table[self.cursor];
        self.cursor += 1;
        o
    }

    /// Next direction scaled by the source cell's pressure.
    ///
    /// Reach grows with `sqrt(count)` and is capped at `max_radius`, so a
    /// heavily packed cell can push past its immediate neighbours.
    #[inline]
    pub fn next_offset(&mut self, count: u32, max_radius: i32) -> Offset {
        let o = self.next_direction();
        let reach = ((count as f32).sqrt() as i32).clamp(1, max_radius.max(1));
        Offset {
            dx: o.dx * reach,
            dy: o.dy * reach,
        }
    }

    fn shuffle(&mut self) {
        // Fisher-Yates
        for i in (1..self.table.len()).rev() {
            let j = self.rng.below(i as u32 + 1) as usize;
            self.table.swap(i, j);
        }
        self.cursor = 0;
    }
}
