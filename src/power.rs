//! Integer power operations for root searches.
//!
//! Root searches never need `r^n` itself, only how it compares with the
//! radicand. [`compare_power`] multiplies with overflow checks and stops as
//! soon as the running product exceeds the radicand, so a wrapped product can
//! never be mistaken for a match. [`biguint_pow`] is the arbitrary-precision
//! counterpart used when the radicand does not fit in a machine word.

use std::cmp::Ordering;

use num_bigint::BigUint;
use num_traits::One;

/// Compares `base^n` with `target` using repeated multiplication.
///
/// The product is accumulated with `u64::checked_mul`. If it grows past
/// `target`, or would overflow `u64` (which also means it exceeds any
/// `target`), the result is `Ordering::Greater` without finishing the
/// remaining multiplications.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use answer_search::power::compare_power;
///
/// assert_eq!(compare_power(3, 2, 9), Ordering::Equal);
/// assert_eq!(compare_power(2, 3, 9), Ordering::Less);
/// // 2^64 overflows u64 but still compares as greater than u64::MAX.
/// assert_eq!(compare_power(2, 64, u64::MAX), Ordering::Greater);
/// ```
pub fn compare_power(base: u64, n: u32, target: u64) -> Ordering {
    let mut product: u64 = 1;
    for _ in 0..n {
        product = match product.checked_mul(base) {
            Some(next) if next <= target => next,
            _ => return Ordering::Greater,
        };
        // 0^k and 1^k stay fixed; the rest only grow.
        if base <= 1 {
            break;
        }
    }
    product.cmp(&target)
}

/// Computes `x^n` for a `BigUint` using exponentiation by squaring.
///
/// # Examples
///
/// ```
/// use answer_search::power::biguint_pow;
/// use num_bigint::BigUint;
///
/// let x = BigUint::from(3u32);
/// assert_eq!(biguint_pow(&x, 4), BigUint::from(81u32));
/// ```
pub fn biguint_pow(x: &BigUint, n: u32) -> BigUint {
    // x^n = (x^2)^(n/2) if n is even, x * (x^2)^((n-1)/2) if n is odd.
    let mut result = BigUint::one();
    let mut base = x.clone();
    let mut exp = n;

    while exp > 0 {
        if exp & 1 == 1 {
            result *= &base;
        }
        exp >>= 1;
        if exp > 0 {
            base = &base * &base;
        }
    }

    result
}

/// Compares `x^n` with `target` for `BigUint` values.
///
/// Values are bounded by `target`'s bit length before multiplying: if
/// `x` has more than `bits(target) / n + 1` bits, `x^n` is certainly larger
/// and is not computed.
pub fn compare_biguint_power(x: &BigUint, n: u32, target: &BigUint) -> Ordering {
    if x.bits() > 1 && (x.bits() - 1) * u64::from(n) >= target.bits() {
        // x >= 2^(bits(x)-1), so x^n >= 2^((bits(x)-1)*n) >= 2^bits(target) > target.
        return Ordering::Greater;
    }
    biguint_pow(x, n).cmp(target)
}
