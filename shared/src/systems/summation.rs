use crate::config::SummationConfig;
use crate::error::SummationError;

const LOG_TARGET: &str = "deployment_shared::summation";

/// Sums the first `n` elements of `values` into an `i64` and adds the offset (100).
///
/// `n` must not exceed `values.len()`. The count is not checked up front;
/// breaking it panics on the slice index. Use [`try_sum_with_offset`] when the
/// count comes from an untrusted caller.
pub fn sum_with_offset(n: usize, values: &[i32]) -> i64 {
    Summation::default().sum(n, values)
}

/// Checked variant of [`sum_with_offset`].
pub fn try_sum_with_offset(n: usize, values: &[i32]) -> Result<i64, SummationError> {
    Summation::default().try_sum(n, values)
}

/// Summation with a configurable offset and diagnostic.
#[derive(Debug, Clone, Default)]
pub struct Summation {
    config: SummationConfig,
}

impl Summation {
    pub fn new(config: SummationConfig) -> Self {
        Summation { config }
    }

    pub fn config(&self) -> &SummationConfig {
        &self.config
    }

    /// Panics if `n > values.len()`, or if adding the configured offset
    /// overflows `i64`. The default offset cannot overflow.
    pub fn sum(&self, n: usize, values: &[i32]) -> i64 {
        self.emit_diagnostic();
        match self.add_offset(accumulate(&values[..n])) {
            Ok(total) => total,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn try_sum(&self, n: usize, values: &[i32]) -> Result<i64, SummationError> {
        let window = prefix(n, values)?;
        self.emit_diagnostic();
        self.add_offset(accumulate(window))
    }

    fn add_offset(&self, sum: i64) -> Result<i64, SummationError> {
        sum.checked_add(self.config.offset)
            .ok_or(SummationError::OffsetOverflow {
                sum,
                offset: self.config.offset,
            })
    }

    fn emit_diagnostic(&self) {
        if let Some(message) = &self.config.diagnostic {
            log::info!(target: LOG_TARGET, "{}", message);
        }
    }
}

fn prefix(n: usize, values: &[i32]) -> Result<&[i32], SummationError> {
    values.get(..n).ok_or(SummationError::CountExceedsLength {
        count: n,
        len: values.len(),
    })
}

// Single pass, widened to i64 per element.
fn accumulate(values: &[i32]) -> i64 {
    values.iter().map(|&v| i64::from(v)).sum()
}
