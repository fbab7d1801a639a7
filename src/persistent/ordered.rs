//! Comparator-driven traversal of [`Map`].
//!
//! A `Map` does not require `K: Ord`. Every operation here instead takes a
//! `less` function that must be a strict total order over the keys
//! (irreflexive, asymmetric, transitive). With an inconsistent comparator the
//! resulting order is unspecified, but no operation panics.

use std::hash::Hash;

use super::map::{Map, accumulate, empty_table};
use crate::control::Optional;
use crate::sequence::{Pair, slice};

impl<K: Clone + Hash + Eq, V: Clone> Map<K, V> {
    fn entries_ascending<L>(&self, less: L) -> Vec<(&K, &V)>
    where
        L: Fn(&K, &K) -> bool,
    {
        let entries: Vec<(&K, &V)> = self.iter().collect();
        slice::sort_by_less(&entries, |left, right| less(left.0, right.0))
    }

    /// Collects the entries in ascending key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::persistent::Map;
    ///
    /// let map = Map::from_slice(vec![(3, 'c'), (1, 'a'), (2, 'b')]);
    /// assert_eq!(map.to_asc_slice(|l, r| l < r), vec![(1, 'a'), (2, 'b'), (3, 'c')]);
    /// assert_eq!(map.to_desc_slice(|l, r| l < r), vec![(3, 'c'), (2, 'b'), (1, 'a')]);
    /// ```
    pub fn to_asc_slice<L>(&self, less: L) -> Vec<(K, V)>
    where
        L: Fn(&K, &K) -> bool,
    {
        self.entries_ascending(less)
            .into_iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Collects the entries in descending key order.
    pub fn to_desc_slice<L>(&self, less: L) -> Vec<(K, V)>
    where
        L: Fn(&K, &K) -> bool,
    {
        self.entries_ascending(less)
            .into_iter()
            .rev()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Collects the keys in ascending order.
    pub fn keys_ordered<L>(&self, less: L) -> Vec<K>
    where
        L: Fn(&K, &K) -> bool,
    {
        self.entries_ascending(less)
            .into_iter()
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Association list in ascending key order. Same as [`Map::to_asc_slice`].
    #[inline]
    pub fn assocs_ordered<L>(&self, less: L) -> Vec<(K, V)>
    where
        L: Fn(&K, &K) -> bool,
    {
        self.to_asc_slice(less)
    }

    /// Returns the entry with the smallest key.
    pub fn lookup_min<L>(&self, less: L) -> Optional<(K, V)>
    where
        L: Fn(&K, &K) -> bool,
    {
        let entries: Vec<(&K, &V)> = self.iter().collect();
        slice::minimum_by_less(&entries, |left, right| less(left.0, right.0))
            .map(|(key, value)| (key.clone(), value.clone()))
    }

    /// Returns the entry with the largest key.
    pub fn lookup_max<L>(&self, less: L) -> Optional<(K, V)>
    where
        L: Fn(&K, &K) -> bool,
    {
        let entries: Vec<(&K, &V)> = self.iter().collect();
        slice::maximum_by_less(&entries, |left, right| less(left.0, right.0))
            .map(|(key, value)| (key.clone(), value.clone()))
    }

    /// Right-associative fold in ascending key order: the highest key is
    /// combined with `init` first, the lowest key last.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::persistent::Map;
    ///
    /// let map = Map::from_slice(vec![(5, "a"), (3, "b")]);
    /// let rendered = map.foldr_with_key(|l, r| l < r, "Map: ".to_string(), |key, value, accumulator| {
    ///     format!("{accumulator}({key}:{value})")
    /// });
    /// assert_eq!(rendered, "Map: (5:a)(3:b)");
    /// ```
    pub fn foldr_with_key<B, L, F>(&self, less: L, init: B, mut function: F) -> B
    where
        L: Fn(&K, &K) -> bool,
        F: FnMut(&K, &V, B) -> B,
    {
        self.entries_ascending(less)
            .into_iter()
            .rev()
            .fold(init, |accumulator, (key, value)| function(key, value, accumulator))
    }

    /// Left-associative fold in ascending key order, lowest key first.
    pub fn foldl_with_key<B, L, F>(&self, less: L, init: B, mut function: F) -> B
    where
        L: Fn(&K, &K) -> bool,
        F: FnMut(B, &K, &V) -> B,
    {
        self.entries_ascending(less)
            .into_iter()
            .fold(init, |accumulator, (key, value)| function(accumulator, key, value))
    }

    /// [`Map::map_accum`] visiting the values in ascending key order.
    pub fn map_accum_ordered<A, W, L, F>(&self, less: L, init: A, mut function: F) -> Pair<A, Map<K, W>>
    where
        L: Fn(&K, &K) -> bool,
        F: FnMut(A, &V) -> (A, W),
    {
        self.map_accum_with_key_ordered(less, init, |accumulator, _, value| {
            function(accumulator, value)
        })
    }

    /// [`Map::map_accum_with_key`] visiting the entries in ascending key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::persistent::Map;
    ///
    /// let map = Map::from_slice(vec![(2, "b"), (1, "a")]);
    /// let (trail, _) = map
    ///     .map_accum_with_key_ordered(|l, r| l < r, String::new(), |trail, key, value| {
    ///         (format!("{trail}{key}{value}"), value.len())
    ///     })
    ///     .into_tuple();
    /// assert_eq!(trail, "1a2b");
    /// ```
    pub fn map_accum_with_key_ordered<A, W, L, F>(
        &self,
        less: L,
        init: A,
        function: F,
    ) -> Pair<A, Map<K, W>>
    where
        L: Fn(&K, &K) -> bool,
        F: FnMut(A, &K, &V) -> (A, W),
    {
        accumulate(self.entries_ascending(less), init, function)
    }

    /// [`Map::map_accum_with_key`] visiting the entries in descending key order.
    pub fn map_accum_r_with_key_ordered<A, W, L, F>(
        &self,
        less: L,
        init: A,
        function: F,
    ) -> Pair<A, Map<K, W>>
    where
        L: Fn(&K, &K) -> bool,
        F: FnMut(A, &K, &V) -> (A, W),
    {
        accumulate(self.entries_ascending(less).into_iter().rev(), init, function)
    }

    /// Rewrites every key with `function`, visiting keys in ascending order.
    /// When two keys collide the later (greater original key) entry wins.
    pub fn map_keys<J, L, F>(&self, less: L, mut function: F) -> Map<J, V>
    where
        J: Clone + Hash + Eq,
        L: Fn(&K, &K) -> bool,
        F: FnMut(&K) -> J,
    {
        Map::from_slice(
            self.entries_ascending(less)
                .into_iter()
                .map(|(key, value)| (function(key), value.clone())),
        )
    }

    /// Like [`Map::map_keys`], resolving collisions with
    /// `combine(new, existing)` instead of overwriting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Optional;
    /// use fpkit::persistent::Map;
    ///
    /// let map = Map::from_slice(vec![(1, "b".to_string()), (2, "a".to_string())]);
    /// let collapsed = map.map_keys_with(|l, r| l < r, |new, existing| existing + &new, |_| 0);
    /// assert_eq!(collapsed.lookup(&0), Optional::Some("ba".to_string()));
    /// ```
    pub fn map_keys_with<J, L, C, F>(&self, less: L, combine: C, mut function: F) -> Map<J, V>
    where
        J: Clone + Hash + Eq,
        L: Fn(&K, &K) -> bool,
        C: FnMut(V, V) -> V,
        F: FnMut(&K) -> J,
    {
        Map::from_slice_with(
            self.entries_ascending(less)
                .into_iter()
                .map(|(key, value)| (function(key), value.clone())),
            combine,
        )
    }

    /// Splits into `(keys less than key, keys greater than key)`. An entry
    /// whose key equals `key` is in neither side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::persistent::Map;
    ///
    /// let map = Map::from_slice(vec![(1, "foo"), (5, "bar"), (8, "baz")]);
    /// let (lower, upper) = map.split(|l, r| l < r, &5).into_tuple();
    ///
    /// assert_eq!(lower, Map::singleton(1, "foo"));
    /// assert_eq!(upper, Map::singleton(8, "baz"));
    /// ```
    pub fn split<L>(&self, less: L, key: &K) -> Pair<Self, Self>
    where
        L: Fn(&K, &K) -> bool,
    {
        let mut lower = empty_table();
        let mut upper = empty_table();
        for (candidate, value) in self.iter() {
            if less(candidate, key) {
                lower.insert(candidate.clone(), value.clone());
            } else if less(key, candidate) {
                upper.insert(candidate.clone(), value.clone());
            }
        }
        Pair::new(Self::from_table(lower), Self::from_table(upper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn less(left: &i32, right: &i32) -> bool {
        left < right
    }

    fn sample() -> Map<i32, &'static str> {
        Map::from_slice(vec![(5, "a"), (3, "b"), (9, "c")])
    }

    #[rstest]
    fn test_ordered_conversions() {
        let map = sample();

        assert_eq!(map.to_asc_slice(less), vec![(3, "b"), (5, "a"), (9, "c")]);
        assert_eq!(map.to_desc_slice(less), vec![(9, "c"), (5, "a"), (3, "b")]);
        assert_eq!(map.keys_ordered(less), vec![3, 5, 9]);
        assert_eq!(map.assocs_ordered(less), map.to_asc_slice(less));
    }

    #[rstest]
    fn test_reversed_comparator_reverses_order() {
        assert_eq!(sample().keys_ordered(|l, r| l > r), vec![9, 5, 3]);
    }

    #[rstest]
    fn test_lookup_min_and_max() {
        let map = sample();

        assert_eq!(map.lookup_min(less), Optional::Some((3, "b")));
        assert_eq!(map.lookup_max(less), Optional::Some((9, "c")));
        assert_eq!(Map::<i32, i32>::new().lookup_min(less), Optional::None);
    }

    #[rstest]
    fn test_foldr_with_key_visits_highest_first() {
        let rendered = sample().foldr_with_key(less, String::new(), |key, value, accumulator| {
            format!("{accumulator}{key}{value}")
        });
        assert_eq!(rendered, "9c5a3b");
    }

    #[rstest]
    fn test_foldr_with_key_is_right_associative() {
        let rendered = sample().foldr_with_key(less, String::new(), |key, _, accumulator| {
            format!("({key}{accumulator})")
        });
        assert_eq!(rendered, "(3(5(9)))");
    }

    #[rstest]
    fn test_foldl_with_key_visits_lowest_first() {
        let rendered = sample().foldl_with_key(less, String::new(), |accumulator, key, value| {
            format!("{accumulator}{key}{value}")
        });
        assert_eq!(rendered, "3b5a9c");
    }

    #[rstest]
    fn test_map_accum_ordered_variants() {
        let map = sample();
        let ascending = map
            .map_accum_ordered(less, String::new(), |trail, value| {
                (trail + *value, value.to_uppercase())
            })
            .into_tuple();
        let descending = map
            .map_accum_r_with_key_ordered(less, Vec::new(), |mut keys, key, _| {
                keys.push(*key);
                (keys, *key * 2)
            })
            .into_tuple();

        assert_eq!(ascending.0, "bac");
        assert_eq!(ascending.1.lookup(&9), Optional::Some("C".to_string()));
        assert_eq!(descending.0, vec![9, 5, 3]);
        assert_eq!(descending.1.to_asc_slice(less), vec![(3, 6), (5, 10), (9, 18)]);
    }

    #[rstest]
    fn test_map_keys_collision_keeps_greatest_original() {
        let map = Map::from_slice(vec![(1, "one"), (2, "two"), (3, "three")]);
        let collapsed = map.map_keys(less, |key| key % 2);

        assert_eq!(collapsed.to_asc_slice(less), vec![(0, "two"), (1, "three")]);
    }

    #[rstest]
    fn test_map_keys_with_combines_new_and_existing() {
        let map = Map::from_slice(vec![(1, "a".to_string()), (2, "b".to_string()), (3, "c".to_string())]);
        let collapsed = map.map_keys_with(less, |new, existing| new + &existing, |_| 0);

        assert_eq!(collapsed.lookup(&0), Optional::Some("cba".to_string()));
    }

    #[rstest]
    #[case(5, vec![(1, "foo")], vec![(8, "baz")])]
    #[case(0, vec![], vec![(1, "foo"), (5, "bar"), (8, "baz")])]
    #[case(6, vec![(1, "foo"), (5, "bar")], vec![(8, "baz")])]
    fn test_split(
        #[case] pivot: i32,
        #[case] expected_lower: Vec<(i32, &str)>,
        #[case] expected_upper: Vec<(i32, &str)>,
    ) {
        let map = Map::from_slice(vec![(1, "foo"), (5, "bar"), (8, "baz")]);
        let (lower, upper) = map.split(less, &pivot).into_tuple();

        assert_eq!(lower.to_asc_slice(less), expected_lower);
        assert_eq!(upper.to_asc_slice(less), expected_upper);
    }
}
