//! Integer helpers for tile sizing
//!
//! The pattern only covers every tile when the tile grid sides are coprime,
//! so sizing reduces to greatest-common-divisor arithmetic on canvas sides.

use num_traits::{PrimInt, Unsigned};

/// Greatest common divisor by the Euclidean algorithm
///
/// `gcd(0, n) == n`, so a zero side never hides the other one.
pub fn gcd<T>(a: T, b: T) -> T
where
    T: PrimInt + Unsigned,
{
    let (mut a, mut b) = (a, b);
    while !b.is_zero() {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Divisors `d` of `number` with `d * d <= number`, ascending
///
/// These are the candidate brush sizes for a canvas side: every divisor
/// up to the square root, so brushes never dwarf the canvas.
pub fn small_divisors(number: u32) -> Vec<u32> {
    let number = u64::from(number);
    (1_u64..)
        .take_while(|divisor| divisor * divisor <= number)
        .filter(|divisor| number % divisor == 0)
        .filter_map(|divisor| u32::try_from(divisor).ok())
        .collect()
}
