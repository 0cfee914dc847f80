use std::fmt::Debug;

use num::Float;

/// Float type usable for term statistics
///
/// `f32` and `f64` are supported.
pub trait StatNum: Float + Debug + Default + Send + Sync {
    /// Convert an occurrence or document count with an `as` cast
    fn from_count(count: u64) -> Self;
}

impl StatNum for f32 {
    #[inline]
    fn from_count(count: u64) -> Self {
        count as f32
    }
}

impl StatNum for f64 {
    #[inline]
    fn from_count(count: u64) -> Self {
        count as f64
    }
}

/// Smallest value of a slice, zero when empty
#[inline]
pub fn min_of<N: StatNum>(values: &[N]) -> N {
    values
        .iter()
        .copied()
        .reduce(N::min)
        .unwrap_or_else(N::zero)
}

/// Largest value of a slice, zero when empty
#[inline]
pub fn max_of<N: StatNum>(values: &[N]) -> N {
    values
        .iter()
        .copied()
        .reduce(N::max)
        .unwrap_or_else(N::zero)
}

/// `sum / count`, zero when count is 0
#[inline]
pub fn avg_of<N: StatNum>(sum: N, count: u64) -> N {
    if count == 0 {
        return N::zero();
    }
    sum / N::from_count(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_handle_empty_and_values() {
        let empty: [f64; 0] = [];
        assert_eq!(min_of(&empty), 0.0);
        assert_eq!(max_of(&empty), 0.0);

        let values = [0.5f64, 1.0, 0.25];
        assert_eq!(min_of(&values), 0.25);
        assert_eq!(max_of(&values), 1.0);
    }

    #[test]
    fn avg_guards_zero_count() {
        assert_eq!(avg_of(3.0f32, 0), 0.0);
        assert_eq!(avg_of(3.0f32, 2), 1.5);
    }
}
