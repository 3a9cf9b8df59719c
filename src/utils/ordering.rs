use std::collections::BTreeMap;

/// Anything listed by the API carries a sortable key.
pub trait Identified {
    type Key: Ord + Clone;

    fn key(&self) -> Self::Key;
}

/// Flattens a keyed map into a vector ordered by key.
pub fn ordered_values<K: Ord, V>(map: BTreeMap<K, V>) -> Vec<V> {
    map.into_values().collect()
}

/// Sorts ascending by key. Rows sharing a key collapse to the last one seen,
/// so a listing never contains duplicates.
pub fn sorted_by_id<T: Identified>(items: Vec<T>) -> Vec<T> {
    let keyed: BTreeMap<T::Key, T> = items.into_iter().map(|item| (item.key(), item)).collect();
    ordered_values(keyed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(i32, &'static str);

    impl Identified for Row {
        type Key = i32;

        fn key(&self) -> i32 {
            self.0
        }
    }

    #[test]
    fn sorts_ascending() {
        let rows = vec![Row(3, "c"), Row(1, "a"), Row(2, "b")];
        assert_eq!(
            sorted_by_id(rows),
            vec![Row(1, "a"), Row(2, "b"), Row(3, "c")]
        );
    }

    #[test]
    fn duplicate_keys_collapse() {
        let rows = vec![Row(1, "old"), Row(1, "new")];
        assert_eq!(sorted_by_id(rows), vec![Row(1, "new")]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(sorted_by_id(Vec::<Row>::new()).is_empty());
    }

    proptest! {
        #[test]
        fn output_is_strictly_increasing(ids in proptest::collection::vec(-50i32..50, 0..40)) {
            let rows: Vec<Row> = ids.iter().map(|id| Row(*id, "x")).collect();
            let sorted = sorted_by_id(rows);
            prop_assert!(sorted.windows(2).all(|w| w[0].0 < w[1].0));
        }
    }
}
