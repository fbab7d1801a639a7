//! Pure functions over ordered sequences.
//!
//! Every function borrows its input slice and returns a freshly allocated
//! result; the input is never reordered or modified. Searches return
//! [`Optional`], two-way splits return [`Pair`].
//!
//! Ordering is expressed with a `less` comparator (`Fn(&T, &T) -> bool`)
//! rather than `Ord`, so the same element type can be traversed under
//! several orders. The comparator must be a strict total order; anything
//! else yields an unspecified (but never panicking) order.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::sequence::slice;
//!
//! let words = ["pear", "fig", "banana", "kiwi"];
//!
//! let by_length = slice::sort_by_less(&words, |left, right| left.len() < right.len());
//! assert_eq!(by_length, vec!["fig", "pear", "kiwi", "banana"]);
//!
//! let runs = slice::group_by(&[1, 1, 2, 3, 3, 3], |left, right| left == right);
//! assert_eq!(runs, vec![vec![1, 1], vec![2], vec![3, 3, 3]]);
//! ```

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

use super::Pair;
use crate::control::{Either, Optional};

// =============================================================================
// Ordering
// =============================================================================

/// Derives an [`Ordering`] from a strict `less` comparator.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use fpkit::sequence::slice::ordering_from_less;
///
/// let less = |left: &i32, right: &i32| left < right;
/// assert_eq!(ordering_from_less(&less, &1, &2), Ordering::Less);
/// assert_eq!(ordering_from_less(&less, &2, &2), Ordering::Equal);
/// ```
pub fn ordering_from_less<T, F>(less: &F, left: &T, right: &T) -> Ordering
where
    F: Fn(&T, &T) -> bool,
{
    if less(left, right) {
        Ordering::Less
    } else if less(right, left) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Returns the elements sorted ascending under `less`.
///
/// The sort is stable: elements the comparator considers equal keep their
/// relative order.
pub fn sort_by_less<T, F>(items: &[T], less: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(|left, right| ordering_from_less(&less, left, right));
    sorted
}

/// Returns the least element under `less`, the first one on ties.
pub fn minimum_by_less<T, F>(items: &[T], less: F) -> Optional<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    items
        .iter()
        .fold(None::<&T>, |best, item| match best {
            Some(current) if !less(item, current) => Some(current),
            _ => Some(item),
        })
        .cloned()
        .into()
}

/// Returns the greatest element under `less`, the first one on ties.
pub fn maximum_by_less<T, F>(items: &[T], less: F) -> Optional<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    minimum_by_less(items, |left, right| less(right, left))
}

/// Returns the elements in reverse order.
pub fn reverse<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().rev().cloned().collect()
}

// =============================================================================
// Search
// =============================================================================

/// Returns the first element satisfying `predicate`.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::Optional;
/// use fpkit::sequence::slice;
///
/// assert_eq!(slice::find(&[1, 4, 6], |x| x % 2 == 0), Optional::Some(4));
/// assert_eq!(slice::find(&[1, 3], |x| x % 2 == 0), Optional::None);
/// ```
pub fn find<T, P>(items: &[T], mut predicate: P) -> Optional<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    items.iter().find(|item| predicate(item)).cloned().into()
}

/// Returns the index of the first element satisfying `predicate`.
pub fn find_index<T, P>(items: &[T], predicate: P) -> Optional<usize>
where
    P: FnMut(&T) -> bool,
{
    items.iter().position(predicate).into()
}

/// Returns the element at `index`, or `None` when out of bounds.
pub fn element_at<T: Clone>(items: &[T], index: usize) -> Optional<T> {
    items.get(index).cloned().into()
}

/// Returns the first element.
pub fn head<T: Clone>(items: &[T]) -> Optional<T> {
    items.first().cloned().into()
}

/// Returns the last element.
pub fn last<T: Clone>(items: &[T]) -> Optional<T> {
    items.last().cloned().into()
}

/// Returns `true` if `target` is one of the elements.
pub fn contains<T: PartialEq>(items: &[T], target: &T) -> bool {
    items.iter().any(|item| item == target)
}

/// Returns `true` if every element satisfies `predicate` (vacuously true when empty).
pub fn all<T, P>(items: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    items.iter().all(predicate)
}

/// Returns `true` if any element satisfies `predicate`.
pub fn any<T, P>(items: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    items.iter().any(predicate)
}

// =============================================================================
// Folds
// =============================================================================

/// Left-associative fold: `function(function(init, x0), x1)...`.
pub fn fold_left<T, B, F>(items: &[T], init: B, function: F) -> B
where
    F: FnMut(B, &T) -> B,
{
    items.iter().fold(init, function)
}

/// Right-associative fold: `function(x0, function(x1, ... init))`.
///
/// # Examples
///
/// ```rust
/// use fpkit::sequence::slice;
///
/// let joined = slice::fold_right(&["a", "b", "c"], String::new(), |item, accumulator| {
///     format!("{item}{accumulator}")
/// });
/// assert_eq!(joined, "abc");
/// ```
pub fn fold_right<T, B, F>(items: &[T], init: B, mut function: F) -> B
where
    F: FnMut(&T, B) -> B,
{
    items
        .iter()
        .rev()
        .fold(init, |accumulator, item| function(item, accumulator))
}

// =============================================================================
// Transformation
// =============================================================================

/// Applies `function` to every element.
pub fn map<T, U, F>(items: &[T], function: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    items.iter().map(function).collect()
}

/// Keeps the elements satisfying `predicate`.
pub fn filter<T, P>(items: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).cloned().collect()
}

/// Applies `function` and keeps only the `Some` results.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::Optional;
/// use fpkit::sequence::slice;
///
/// let parsed = slice::map_option(&["1", "x", "3"], |s| Optional::from(s.parse::<i32>().ok()));
/// assert_eq!(parsed, vec![1, 3]);
/// ```
pub fn map_option<T, U, F>(items: &[T], mut function: F) -> Vec<U>
where
    F: FnMut(&T) -> Optional<U>,
{
    items
        .iter()
        .filter_map(|item| function(item).into_option())
        .collect()
}

/// Returns the elements with duplicates removed, keeping first occurrences in order.
pub fn unique<T>(items: &[T]) -> Vec<T>
where
    T: Clone + Hash + Eq,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

// =============================================================================
// Splitting and Grouping
// =============================================================================

/// Splits into (satisfying, not satisfying), preserving order in both.
pub fn partition<T, P>(items: &[T], mut predicate: P) -> Pair<Vec<T>, Vec<T>>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let (matching, rest): (Vec<T>, Vec<T>) = items.iter().cloned().partition(|item| predicate(item));
    Pair::new(matching, rest)
}

/// Splits into the longest prefix satisfying `predicate` and the remainder.
///
/// # Examples
///
/// ```rust
/// use fpkit::sequence::slice;
///
/// let split = slice::span(&[1, 2, 5, 1], |x| *x < 3);
/// assert_eq!(split.into_tuple(), (vec![1, 2], vec![5, 1]));
/// ```
pub fn span<T, P>(items: &[T], mut predicate: P) -> Pair<Vec<T>, Vec<T>>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let boundary = items
        .iter()
        .position(|item| !predicate(item))
        .unwrap_or(items.len());
    split_at(items, boundary)
}

/// Splits at `index`; an index past the end puts everything in the first half.
pub fn split_at<T: Clone>(items: &[T], index: usize) -> Pair<Vec<T>, Vec<T>> {
    let (prefix, suffix) = items.split_at(index.min(items.len()));
    Pair::new(prefix.to_vec(), suffix.to_vec())
}

/// Returns the longest prefix satisfying `predicate`.
pub fn take_while<T, P>(items: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    span(items, predicate).into_first()
}

/// Returns what remains after the longest prefix satisfying `predicate`.
pub fn drop_while<T, P>(items: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    span(items, predicate).into_second()
}

/// Groups consecutive elements into runs.
///
/// Each element joins the current run when `same_group(first_of_run, element)`
/// holds, otherwise it starts a new run.
pub fn group_by<T, F>(items: &[T], mut same_group: F) -> Vec<Vec<T>>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut groups: Vec<Vec<T>> = Vec::new();
    for item in items {
        match groups.last_mut() {
            Some(group) if same_group(&group[0], item) => group.push(item.clone()),
            _ => groups.push(vec![item.clone()]),
        }
    }
    groups
}

// =============================================================================
// Pairs and Eithers
// =============================================================================

/// Pairs elements positionally, stopping at the shorter input.
pub fn zip<A, B>(firsts: &[A], seconds: &[B]) -> Vec<Pair<A, B>>
where
    A: Clone,
    B: Clone,
{
    firsts
        .iter()
        .zip(seconds)
        .map(|(first, second)| Pair::new(first.clone(), second.clone()))
        .collect()
}

/// Splits a sequence of pairs into its first and second components.
pub fn unzip<A, B>(pairs: &[Pair<A, B>]) -> Pair<Vec<A>, Vec<B>>
where
    A: Clone,
    B: Clone,
{
    let (firsts, seconds) = pairs
        .iter()
        .map(|pair| (pair.first().clone(), pair.second().clone()))
        .unzip();
    Pair::new(firsts, seconds)
}

/// Separates eithers into (left values, right values), each in original order.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::Either;
/// use fpkit::sequence::slice;
///
/// let items = vec![Either::Left("a"), Either::Right(1), Either::Right(2)];
/// let split = slice::partition_eithers(items);
/// assert_eq!(split.into_tuple(), (vec!["a"], vec![1, 2]));
/// ```
pub fn partition_eithers<L, R, I>(items: I) -> Pair<Vec<L>, Vec<R>>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    let mut lefts = Vec::new();
    let mut rights = Vec::new();
    for item in items {
        match item {
            Either::Left(value) => lefts.push(value),
            Either::Right(value) => rights.push(value),
        }
    }
    Pair::new(lefts, rights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn less(left: &i32, right: &i32) -> bool {
        left < right
    }

    #[rstest]
    fn test_sort_by_less_is_stable() {
        let items = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        let sorted = sort_by_less(&items, |left, right| left.0 < right.0);
        assert_eq!(sorted, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[rstest]
    fn test_sort_by_less_does_not_touch_input() {
        let items = vec![3, 1, 2];
        let sorted = sort_by_less(&items, less);
        assert_eq!(sorted, vec![1, 2, 3]);
        assert_eq!(items, vec![3, 1, 2]);
    }

    #[rstest]
    #[case(&[], Optional::None)]
    #[case(&[3, 1, 2], Optional::Some(1))]
    #[case(&[5], Optional::Some(5))]
    fn test_minimum_by_less(#[case] items: &[i32], #[case] expected: Optional<i32>) {
        assert_eq!(minimum_by_less(items, less), expected);
    }

    #[rstest]
    fn test_maximum_by_less_prefers_first_on_ties() {
        let items = [(1, 'a'), (3, 'b'), (3, 'c')];
        assert_eq!(
            maximum_by_less(&items, |left, right| left.0 < right.0),
            Optional::Some((3, 'b'))
        );
    }

    #[rstest]
    #[case(0, Optional::Some(10))]
    #[case(2, Optional::Some(30))]
    #[case(3, Optional::None)]
    fn test_element_at(#[case] index: usize, #[case] expected: Optional<i32>) {
        assert_eq!(element_at(&[10, 20, 30], index), expected);
    }

    #[rstest]
    fn test_fold_left_and_right_associate_differently() {
        let items = [1, 2, 3];
        let left = fold_left(&items, String::new(), |accumulator, item| format!("({accumulator}{item})"));
        let right = fold_right(&items, String::new(), |item, accumulator| format!("({item}{accumulator})"));
        assert_eq!(left, "(((1)2)3)");
        assert_eq!(right, "(1(2(3)))");
    }

    #[rstest]
    fn test_partition_preserves_order() {
        let split = partition(&[1, 2, 3, 4, 5], |x| x % 2 == 1);
        assert_eq!(split.into_tuple(), (vec![1, 3, 5], vec![2, 4]));
    }

    #[rstest]
    #[case(0, vec![], vec![1, 2, 3])]
    #[case(2, vec![1, 2], vec![3])]
    #[case(7, vec![1, 2, 3], vec![])]
    fn test_split_at(#[case] index: usize, #[case] prefix: Vec<i32>, #[case] suffix: Vec<i32>) {
        assert_eq!(split_at(&[1, 2, 3], index).into_tuple(), (prefix, suffix));
    }

    #[rstest]
    fn test_take_and_drop_while() {
        let items = [2, 4, 5, 6];
        assert_eq!(take_while(&items, |x| x % 2 == 0), vec![2, 4]);
        assert_eq!(drop_while(&items, |x| x % 2 == 0), vec![5, 6]);
    }

    #[rstest]
    fn test_group_by_compares_against_run_head() {
        let groups = group_by(&[1, 2, 3, 7, 8], |head, item| item - head < 3);
        assert_eq!(groups, vec![vec![1, 2, 3], vec![7, 8]]);
    }

    #[rstest]
    fn test_group_by_empty() {
        let groups: Vec<Vec<i32>> = group_by(&[], |left: &i32, right: &i32| left == right);
        assert!(groups.is_empty());
    }

    #[rstest]
    fn test_unique_keeps_first_occurrence() {
        assert_eq!(unique(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }

    #[rstest]
    fn test_zip_and_unzip() {
        let zipped = zip(&[1, 2, 3], &["a", "b"]);
        assert_eq!(zipped, vec![Pair::new(1, "a"), Pair::new(2, "b")]);
        assert_eq!(unzip(&zipped).into_tuple(), (vec![1, 2], vec!["a", "b"]));
    }

    #[rstest]
    fn test_search_helpers() {
        let items = [5, 8, 13];
        assert_eq!(find_index(&items, |x| *x > 6), Optional::Some(1));
        assert_eq!(head(&items), Optional::Some(5));
        assert_eq!(last(&items), Optional::Some(13));
        assert!(contains(&items, &8));
        assert!(all(&items, |x| *x > 0));
        assert!(!any(&items, |x| *x > 20));
        assert_eq!(reverse(&items), vec![13, 8, 5]);
        assert_eq!(head::<i32>(&[]), Optional::None);
    }

    #[rstest]
    fn test_map_and_filter() {
        assert_eq!(map(&[1, 2], |x| x * 3), vec![3, 6]);
        assert_eq!(filter(&[1, 2, 3, 4], |x| *x > 2), vec![3, 4]);
    }
}
