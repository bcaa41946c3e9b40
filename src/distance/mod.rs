pub mod full_table;
pub mod rapidfuzz;
pub mod rolling;

use std::sync::Arc;

use crate::error::{MatchEngineError, Result};

pub use full_table::FullTableKernel;
pub use rapidfuzz::RapidfuzzKernel;
pub use rolling::RollingKernel;

/// Maximum operand length in characters.
///
/// Guards against pathological table allocations, not a real operational
/// limit. Anything longer than a 31-bit length is rejected with
/// [`MatchEngineError::InputTooLarge`], never silently truncated.
pub const MAX_INPUT_LEN: usize = i32::MAX as usize;

/// Trait for edit-distance kernel implementations.
///
/// Kernels are interchangeable: the ranking pipeline only sees this trait,
/// so swapping the full-table kernel for the rolling or rapidfuzz one never
/// touches the pipeline. All kernels must agree on every input.
pub trait DistanceKernel: Send + Sync {
    /// Distance over already case-folded character slices
    fn distance_chars(&self, a: &[char], b: &[char]) -> usize;

    /// Get kernel name for logging
    fn name(&self) -> &str;

    /// Minimum number of single-character insertions, deletions and
    /// substitutions transforming `a` into `b`. Comparison is
    /// case-insensitive; operands beyond [`MAX_INPUT_LEN`] are rejected.
    fn distance(&self, a: &str, b: &str) -> Result<usize> {
        let (a, b) = fold_pair(a, b)?;
        Ok(self.distance_chars(&a, &b))
    }
}

fn check_len(len: usize) -> Result<()> {
    if len > MAX_INPUT_LEN {
        return Err(MatchEngineError::InputTooLarge {
            len,
            max: MAX_INPUT_LEN,
        });
    }
    Ok(())
}

/// Length-check both operands, then lowercase them for comparison
fn fold_pair(a: &str, b: &str) -> Result<(Vec<char>, Vec<char>)> {
    check_len(a.chars().count())?;
    check_len(b.chars().count())?;
    Ok((
        a.to_lowercase().chars().collect(),
        b.to_lowercase().chars().collect(),
    ))
}

/// Edit distance between `a` and `b` using the default (rolling) kernel
pub fn distance(a: &str, b: &str) -> Result<usize> {
    RollingKernel::new().distance(a, b)
}

/// Similarity percentage between `a` and `b` using the default kernel
pub fn similarity(a: &str, b: &str) -> Result<f64> {
    similarity_with(&RollingKernel::new(), a, b)
}

/// Similarity percentage between `a` and `b` under the given kernel.
///
/// `100 * (max_len - distance) / max_len` over folded character counts.
/// If either operand is empty the score is 0.0 - including the case where
/// both are empty. An empty string carries no information, it is not a
/// perfect match.
pub fn similarity_with(kernel: &dyn DistanceKernel, a: &str, b: &str) -> Result<f64> {
    let (a, b) = fold_pair(a, b)?;

    if a.is_empty() || b.is_empty() {
        return Ok(0.0);
    }

    let max_len = a.len().max(b.len());
    let dist = kernel.distance_chars(&a, &b);

    Ok(100.0 * (max_len - dist) as f64 / max_len as f64)
}

/// Look up a kernel by its CLI/config name
pub fn kernel_by_name(name: &str) -> Option<Arc<dyn DistanceKernel>> {
    match name {
        "full-table" => Some(Arc::new(FullTableKernel::new())),
        "rolling" => Some(Arc::new(RollingKernel::new())),
        "rapidfuzz" => Some(Arc::new(RapidfuzzKernel::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_folding() {
        assert_eq!(distance("Kitten", "kiTTen").unwrap(), 0);
        assert_eq!(similarity("VAMPIRE", "vampire").unwrap(), 100.0);
    }

    #[test]
    fn test_empty_operands() {
        assert_eq!(distance("", "abc").unwrap(), 3);
        assert_eq!(distance("abc", "").unwrap(), 3);
        assert_eq!(distance("", "").unwrap(), 0);
    }

    #[test]
    fn test_zero_length_similarity_rule() {
        assert_eq!(similarity("", "x").unwrap(), 0.0);
        assert_eq!(similarity("x", "").unwrap(), 0.0);
        assert_eq!(similarity("", "").unwrap(), 0.0);
    }

    #[test]
    fn test_similarity_bounds() {
        for (a, b) in [("kitten", "sitting"), ("abc", "xyz"), ("same", "same")] {
            let score = similarity(a, b).unwrap();
            assert!((0.0..=100.0).contains(&score));
            assert!(score.is_finite());
        }
    }

    #[test]
    fn test_distance_properties() {
        for (a, b) in [("kitten", "sitting"), ("flaw", "lawn"), ("", "abc")] {
            let d_ab = distance(a, b).unwrap();
            let d_ba = distance(b, a).unwrap();
            assert_eq!(d_ab, d_ba);

            let (n, m) = (a.chars().count(), b.chars().count());
            assert!(d_ab <= n.max(m));
            assert!(d_ab >= n.abs_diff(m));
        }
    }

    #[test]
    fn test_length_guard() {
        assert!(check_len(MAX_INPUT_LEN).is_ok());
        assert!(matches!(
            check_len(MAX_INPUT_LEN + 1),
            Err(MatchEngineError::InputTooLarge { .. })
        ));
    }

    #[test]
    fn test_kernel_by_name() {
        assert_eq!(kernel_by_name("rolling").unwrap().name(), "rolling");
        assert_eq!(kernel_by_name("full-table").unwrap().name(), "full-table");
        assert_eq!(kernel_by_name("rapidfuzz").unwrap().name(), "rapidfuzz");
        assert!(kernel_by_name("unknown").is_none());
    }
}
