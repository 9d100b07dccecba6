use crate::engine::errors::PlannerError;

/// Validated `[min_size, max_size]` byte window for a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitConstraints {
    min_size: i64,
    max_size: i64,
}

impl SplitConstraints {
    /// Fails unless `max_size > 0 && max_size >= min_size`. Negative values are
    /// reported with the same error as an inverted window.
    pub fn new(min_size: i64, max_size: i64) -> Result<Self, PlannerError> {
        if max_size <= 0 || max_size < min_size {
            return Err(PlannerError::Configuration {
                min: min_size,
                max: max_size,
            });
        }
        Ok(Self { min_size, max_size })
    }

    /// Window that never limits size; split points then follow block boundaries.
    pub fn unbounded() -> Self {
        Self {
            min_size: 0,
            max_size: i64::MAX,
        }
    }

    pub fn min_size(&self) -> i64 {
        self.min_size
    }

    pub fn max_size(&self) -> i64 {
        self.max_size
    }

    #[inline]
    pub fn meets_min(&self, size: u64) -> bool {
        self.min_size <= 0 || size >= self.min_size as u64
    }

    /// `max_size` is positive once validated.
    #[inline]
    pub fn below_max(&self, size: u64) -> bool {
        size < self.max_size as u64
    }
}
