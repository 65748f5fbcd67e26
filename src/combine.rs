//! Combiner
//!
//! Folds partial sums into the total. Addition is commutative and
//! associative, so the result does not depend on the order in which workers
//! finished.

use crate::reduce::PartialSum;

/// Σ of all partial sums
pub fn combine<'a, I>(partials: I) -> i64
where
    I: IntoIterator<Item = &'a PartialSum>,
{
    partials.into_iter().map(|p| p.sum).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine() {
        let partials = [
            PartialSum { chunk: 1, sum: 7 },
            PartialSum { chunk: 0, sum: 3 },
        ];
        assert_eq!(combine(&partials), 10);
    }

    #[test]
    fn test_order_independent() {
        let mut partials: Vec<PartialSum> = (0..10)
            .map(|i| PartialSum {
                chunk: i,
                sum: (i as i64) * 3 - 5,
            })
            .collect();
        let forward = combine(&partials);
        partials.reverse();
        assert_eq!(combine(&partials), forward);
    }

    #[test]
    fn test_empty() {
        assert_eq!(combine(&Vec::<PartialSum>::new()), 0);
    }
}
