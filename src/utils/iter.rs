//! Iterator utilities.

/// The index of the first maximal element in a collection.
///
/// # Example
/// ```
/// use bandit_testbed::utils::iter::ArgMaxFirst;
///
/// let v = vec![1.0, 2.5, 2.5, -3.0];
/// assert_eq!(v.into_iter().argmax_first(), Some(1));
/// ```
pub trait ArgMaxFirst {
    /// The index of the maximum element.
    ///
    /// The running maximum starts at the first element and is only replaced by a strictly
    /// greater element, so ties resolve to the lowest index and incomparable elements
    /// (like `NaN`) never replace the current maximum.
    /// If the iterator is empty, `None` is returned.
    fn argmax_first(self) -> Option<usize>;
}

impl<T, I> ArgMaxFirst for I
where
    T: PartialOrd,
    I: Iterator<Item = T>,
{
    fn argmax_first(self) -> Option<usize> {
        self.enumerate()
            .fold(None, |best: Option<(usize, T)>, (i, x)| match best {
                Some((_, ref max)) if x > *max => Some((i, x)),
                None => Some((i, x)),
                keep => keep,
            })
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod argmax_first {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(Vec::<f64>::new().into_iter().argmax_first(), None);
    }

    #[test]
    fn single() {
        assert_eq!([-7.0].iter().argmax_first(), Some(0));
    }

    #[test]
    fn ties_keep_first() {
        assert_eq!([1.0, 2.0, 2.0, 0.5].iter().argmax_first(), Some(1));
    }

    #[test]
    fn all_equal() {
        assert_eq!([5.0, 5.0, 5.0].iter().argmax_first(), Some(0));
    }

    #[test]
    fn last_is_max() {
        assert_eq!([0.0, 1.0, 3.0].into_iter().argmax_first(), Some(2));
    }

    #[test]
    fn nan_never_replaces() {
        assert_eq!([0.0, f64::NAN, -1.0].into_iter().argmax_first(), Some(0));
    }
}
