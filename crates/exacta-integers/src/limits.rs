//! Size limits for operations that grow their operands.

/// Largest number of decimal digits a shift may produce.
pub const MAX_DIGITS: usize = 1 << 24;

/// Largest number of coefficients a polynomial shift or literal may produce.
pub const MAX_COEFFICIENTS: usize = 1 << 24;

/// Allocates a vector with exactly `len` slots, or reports `what` as exhausted.
pub fn try_with_capacity<T>(len: usize, what: &'static str) -> crate::Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| crate::Error::ResourceExhausted(what))?;
    Ok(v)
}
