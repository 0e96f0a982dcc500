//! Collection-level matching under a [`Strategy`].

use super::Strategy;

/// Items of `expected` with no equivalent anywhere in `actual`.
pub fn find_missing<'e, T, S>(actual: &[T], expected: &'e [T], strategy: &S) -> Vec<&'e T>
where
    S: Strategy<T> + ?Sized,
{
    expected
        .iter()
        .filter(|e| !actual.iter().any(|a| strategy.are_equal(a, e)))
        .collect()
}

/// Items of `actual` with no equivalent anywhere in `expected`.
pub fn find_unexpected<'a, T, S>(actual: &'a [T], expected: &[T], strategy: &S) -> Vec<&'a T>
where
    S: Strategy<T> + ?Sized,
{
    actual
        .iter()
        .filter(|a| !expected.iter().any(|e| strategy.are_equal(a, e)))
        .collect()
}

/// Multiset equivalence in any order: every actual item is matched to a
/// distinct expected item.
///
/// Greedy first-fit, which is exact as long as the strategy is an
/// equivalence relation.
pub fn same_elements<T, S>(actual: &[T], expected: &[T], strategy: &S) -> bool
where
    S: Strategy<T> + ?Sized,
{
    if actual.len() != expected.len() {
        return false;
    }
    let mut used = vec![false; expected.len()];
    actual.iter().all(|a| {
        let slot = expected
            .iter()
            .enumerate()
            .position(|(i, e)| !used[i] && strategy.are_equal(a, e));
        match slot {
            Some(i) => {
                used[i] = true;
                true
            }
            None => false,
        }
    })
}
