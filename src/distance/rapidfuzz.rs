use rapidfuzz::distance::levenshtein;

use crate::distance::DistanceKernel;

/// Alternative kernel delegating to the `rapidfuzz` crate.
///
/// Uses uniform-cost Levenshtein, so it must agree with the hand-rolled
/// kernels on every input; the shared case folding and length guard still
/// apply before the crate is called.
pub struct RapidfuzzKernel;

impl RapidfuzzKernel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RapidfuzzKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl DistanceKernel for RapidfuzzKernel {
    fn distance_chars(&self, a: &[char], b: &[char]) -> usize {
        levenshtein::distance(a.iter().copied(), b.iter().copied())
    }

    fn name(&self) -> &str {
        "rapidfuzz"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::FullTableKernel;

    #[test]
    fn test_agrees_with_full_table() {
        let reference = FullTableKernel::new();
        let kernel = RapidfuzzKernel::new();

        for (a, b) in [
            ("kitten", "sitting"),
            ("vampire survivors", "vampir survivor"),
            ("", "abc"),
            ("same", "same"),
        ] {
            assert_eq!(
                kernel.distance(a, b).unwrap(),
                reference.distance(a, b).unwrap(),
                "kernels disagree on {:?} vs {:?}",
                a,
                b
            );
        }
    }

    #[test]
    fn test_case_folding_applies() {
        let kernel = RapidfuzzKernel::new();
        assert_eq!(kernel.distance("Kitten", "kitten").unwrap(), 0);
    }
}
