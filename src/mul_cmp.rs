//! Overflow-safe comparison of two `u64` products.
//!
//! Deciding `a*b < c*d` by computing the products directly needs 128 bits.
//! This module answers the question exactly using only 64-bit arithmetic:
//! each operand is split into 32-bit halves, the full 128-bit product is
//! expressed as three limbs via schoolbook multiplication, and the limb
//! triples are compared lexicographically from most to least significant.
//!
//! The technique generalizes to any limb width: comparing products of two
//! N-bit values never requires a 2N-bit accumulator.
//!
//! # Example
//!
//! ```
//! use exact_rational::mul_cmp::is_product_less;
//!
//! // (2^64 - 1) * 2 vs (2^63) * 4 -- both products exceed u64::MAX
//! assert!(is_product_less(u64::MAX, 2, 1 << 63, 4));
//! ```

const LO_MASK: u64 = 0xFFFF_FFFF;

/// The 128-bit product of two `u64` values, as `hi * 2^64 + mid * 2^32 + lo`.
///
/// `mid` and `lo` are always below `2^32`, so the representation is unique
/// and the derived lexicographic order (`hi`, then `mid`, then `lo`) agrees
/// with the numeric order of the products.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct ProductLimbs {
    hi: u64,
    mid: u64,
    lo: u64,
}

/// Split a value into its high and low 32-bit halves.
#[inline(always)]
fn split(v: u64) -> (u64, u64) {
    (v >> 32, v & LO_MASK)
}

/// Decompose `a * b` into three limbs without a 128-bit intermediate.
///
/// With `a = a1*2^32 + a0` and `b = b1*2^32 + b0`:
///
/// ```text
/// a*b = a0*b0 + (a0*b1 + a1*b0)*2^32 + a1*b1*2^64
/// ```
///
/// Every partial product is 32x32 bits and fits in a `u64`. The additions
/// folding them together are arranged so each sum stays within `u64` range:
/// the middle sum adds three values below `2^32`, and the high limb adds
/// carries below `2^33` to `a1*b1 <= (2^32 - 1)^2`.
fn product_limbs(a: u64, b: u64) -> ProductLimbs {
    let (a1, a0) = split(a);
    let (b1, b0) = split(b);

    let (p00_hi, p00_lo) = split(a0 * b0);
    let (p01_hi, p01_lo) = split(a0 * b1);
    let (p10_hi, p10_lo) = split(a1 * b0);

    // Each addend is below 2^32, so the sum is at most 3*(2^32 - 1).
    let (carry, mid) = split(p01_lo + p10_lo + p00_hi);
    // a1*b1 + p01_hi + p10_hi + carry <= 2^64 - 1, no overflow possible.
    let hi = a1 * b1 + p01_hi + p10_hi + carry;

    ProductLimbs {
        hi,
        mid,
        lo: p00_lo,
    }
}

/// Returns whether `a * b < c * d`, exactly.
///
/// Equal products compare as not-less.
///
/// # Example
///
/// ```
/// use exact_rational::mul_cmp::is_product_less;
///
/// assert!(is_product_less(3, 5, 4, 4));
/// assert!(!is_product_less(4, 4, 4, 4));
/// ```
#[inline]
pub fn is_product_less(a: u64, b: u64, c: u64, d: u64) -> bool {
    product_limbs(a, b) < product_limbs(c, d)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference answer via 128-bit widening.
    fn is_less_u128(a: u64, b: u64, c: u64, d: u64) -> bool {
        (a as u128) * (b as u128) < (c as u128) * (d as u128)
    }

    const BOUNDARY: &[u64] = &[
        0,
        1,
        2,
        3,
        (1 << 32) - 1,
        1 << 32,
        (1 << 32) + 1,
        (1 << 63) - 1,
        1 << 63,
        (1 << 63) + 1,
        u64::MAX - 1,
        u64::MAX,
        i64::MAX as u64,
        0xDEAD_BEEF_CAFE_BABE,
        0x1234_5678_9ABC_DEF0,
    ];

    #[test]
    fn limbs_reconstruct_product() {
        for &a in BOUNDARY {
            for &b in BOUNDARY {
                let limbs = product_limbs(a, b);
                let product = ((limbs.hi as u128) << 64)
                    + ((limbs.mid as u128) << 32)
                    + limbs.lo as u128;
                assert_eq!(product, (a as u128) * (b as u128), "a={a} b={b}");
                assert!(limbs.mid <= LO_MASK);
                assert!(limbs.lo <= LO_MASK);
            }
        }
    }

    #[test]
    fn matches_u128_reference_on_boundary_grid() {
        for &a in BOUNDARY {
            for &b in BOUNDARY {
                for &c in BOUNDARY {
                    for &d in BOUNDARY {
                        assert_eq!(
                            is_product_less(a, b, c, d),
                            is_less_u128(a, b, c, d),
                            "a={a} b={b} c={c} d={d}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn equal_products_are_not_less() {
        assert!(!is_product_less(6, 35, 14, 15));
        assert!(!is_product_less(u64::MAX, u64::MAX, u64::MAX, u64::MAX));
        assert!(!is_product_less(0, u64::MAX, u64::MAX, 0));
    }

    #[test]
    fn adjacent_products_around_the_limb_boundaries() {
        // (2^32 + 1)(2^32 - 1) = 2^64 - 1 vs (2^32)^2 = 2^64: decided by the
        // high limb alone.
        let a = (1u64 << 32) + 1;
        assert!(is_product_less(a, a - 2, a - 1, a - 1));
        assert!(!is_product_less(a - 1, a - 1, a, a - 2));

        // 2^64 vs 2^64 + 1 (the factorization of F6): high and middle limbs
        // agree, only the lowest limb differs.
        assert!(is_product_less(1 << 32, 1 << 32, 274_177, 67_280_421_310_721));
        assert!(!is_product_less(274_177, 67_280_421_310_721, 1 << 32, 1 << 32));
    }

    #[test]
    fn zero_products() {
        assert!(is_product_less(0, u64::MAX, 1, 1));
        assert!(!is_product_less(0, u64::MAX, 0, u64::MAX));
        assert!(!is_product_less(1, 1, 0, 123));
    }
}
