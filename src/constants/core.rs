//! Derivation of the SHA-256 constant tables
//!
//! Reproduces the standard constant-generation procedure: scan the
//! integers from 2 upward for primes by trial division, take the
//! fractional part of each prime's cube root (round constants) or square
//! root (initial hash values), scale by 2³², and truncate to a `u32`.
//!
//! `f64` carries 52 mantissa bits, so after scaling by 2³² the root is
//! still accurate to well under one unit in the truncated word for every
//! prime involved. The crate nevertheless does not trust this at runtime:
//! the pipeline uses the literal tables in the parent module, and the
//! functions here exist so tests can assert the tables are exactly what
//! the procedure produces.

/// Trial division primality check, divisors up to √n.
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }

    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }

    true
}

/// Returns the first `N` primes in ascending order.
///
/// The scan starts at 2 and never fails: the primes are infinite, so the
/// array is always filled.
pub fn first_primes<const N: usize>() -> [u32; N] {
    let mut primes = [0u32; N];
    let mut found = 0;
    let mut n = 2;

    while found < N {
        if is_prime(n) {
            primes[found] = n;
            found += 1;
        }
        n += 1;
    }

    primes
}

/// Fractional part of `root`, scaled by 2³² and truncated.
fn fractional_word(root: f64) -> u32 {
    (root.fract() * 4_294_967_296.0) as u32
}

/// Derives the 64 round constants from the cube roots of the first 64
/// primes.
///
/// # Returns
/// - The constants in round order; `[0]` is `0x428a2f98`.
pub fn round_constants() -> [u32; 64] {
    first_primes::<64>().map(|p| fractional_word((p as f64).cbrt()))
}

/// Derives the 8 initial hash values from the square roots of the first
/// 8 primes.
///
/// # Returns
/// - The initial state in register order `a..h`; `[0]` is `0x6a09e667`.
pub fn initial_hash() -> [u32; 8] {
    first_primes::<8>().map(|p| fractional_word((p as f64).sqrt()))
}
