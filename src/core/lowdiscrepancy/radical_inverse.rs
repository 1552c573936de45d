use crate::core::base::*;

pub fn reverse_bits32(mut n: u32) -> u32 {
    n = (n.wrapping_shl(16)) | (n.wrapping_shr(16));
    n = ((n & 0x00ff00ff).wrapping_shl(8)) | ((n & 0xff00ff00).wrapping_shr(8));
    n = ((n & 0x0f0f0f0f).wrapping_shl(4)) | ((n & 0xf0f0f0f0).wrapping_shr(4));
    n = ((n & 0x33333333).wrapping_shl(2)) | ((n & 0xcccccccc).wrapping_shr(2));
    n = ((n & 0x55555555).wrapping_shl(1)) | ((n & 0xaaaaaaaa).wrapping_shr(1));
    return n;
}

pub fn reverse_bits64(n: u64) -> u64 {
    let n0 = reverse_bits32(n as u32) as u64;
    let n1 = reverse_bits32((n.wrapping_shr(32)) as u32) as u64;
    return (n0.wrapping_shl(32)) | n1;
}

fn radical_inverse_specialized(base: u64, mut a: u64) -> Float {
    let inv_base = 1.0 / base as Float;
    let mut reversed_digits = 0;
    let mut inv_base_n = 1.0;
    while a != 0 {
        let next = a / base;
        let digit = a - next * base;
        reversed_digits = reversed_digits * base + digit;
        inv_base_n *= inv_base;
        a = next;
    }
    return Float::min(reversed_digits as Float * inv_base_n, ONE_MINUS_EPSILON);
}

/// Radical inverse of `a` in the given prime base: the base-`base` digits
/// of `a` mirrored across the radix point. Base 2 uses bit reversal.
pub fn radical_inverse(base: u64, a: u64) -> Float {
    return match base {
        2 => reverse_bits64(a) as Float * 5.4210108624275222e-20, // 2^-64
        _ => radical_inverse_specialized(base, a),
    };
}
