use crate::core::base::*;

const PCG32_DEFAULT_STATE: u64 = 0x853c49e6748fea9b;
const PCG32_DEFAULT_STREAM: u64 = 0xda3e39cb94b95bdb;
const PCG32_MULT: u64 = 0x5851f42d4c957f2d;

/// PCG32 pseudo-random generator. Serves as the i.i.d. uniform baseline
/// that the low-discrepancy sequences are compared against.
#[derive(Debug, PartialEq, Clone)]
pub struct RNG {
    pub state: u64,
    pub inc: u64,
}

impl RNG {
    pub fn new() -> Self {
        RNG {
            state: PCG32_DEFAULT_STATE,
            inc: PCG32_DEFAULT_STREAM,
        }
    }

    pub fn new_sequence(initseq: u64) -> Self {
        let mut r = Self::new();
        r.set_sequence(initseq);
        return r;
    }

    pub fn set_sequence(&mut self, initseq: u64) {
        self.state = 0;
        self.inc = (initseq << 1) | 1;
        self.uniform_uint32();
        self.state = self.state.wrapping_add(PCG32_DEFAULT_STATE);
        self.uniform_uint32();
    }

    #[inline]
    pub fn uniform_uint32(&mut self) -> u32 {
        let oldstate: u64 = self.state;
        self.state = oldstate.wrapping_mul(PCG32_MULT).wrapping_add(self.inc);
        let xorshifted: u32 = ((oldstate.wrapping_shr(18) ^ oldstate).wrapping_shr(27)) as u32;
        let rot: u32 = (oldstate.wrapping_shr(59)) as u32;
        return (xorshifted.wrapping_shr(rot))
            | (xorshifted.wrapping_shl(((!rot).wrapping_add(1)) & 31));
    }

    #[inline]
    pub fn uniform_float(&mut self) -> Float {
        // 2^-32, clamped so the result stays inside [0, 1).
        let f = self.uniform_uint32() as Float * 2.3283064365386963e-10;
        return Float::min(f, ONE_MINUS_EPSILON);
    }
}

impl Default for RNG {
    fn default() -> Self {
        Self::new()
    }
}
