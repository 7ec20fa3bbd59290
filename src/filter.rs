use crate::models::{Dataset, Selection};
use std::collections::BTreeSet;

/// Records whose username is in `selection`, in dataset order.
/// An empty selection always yields an empty dataset.
pub fn filter(dataset: &Dataset, selection: &Selection) -> Dataset {
    if selection.is_empty() {
        return Dataset::empty();
    }
    dataset
        .iter()
        .filter(|record| selection.contains(&record.username))
        .cloned()
        .collect()
}

pub fn distinct_usernames(dataset: &Dataset) -> BTreeSet<String> {
    dataset.iter().map(|record| record.username.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    fn sample() -> Dataset {
        Dataset::from(vec![
            Record::new("a", 10, 2),
            Record::new("b", 5, 7),
            Record::new("a", 3, 1),
        ])
    }

    fn select(names: &[&str]) -> Selection {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn keeps_matching_records_in_order() {
        let result = filter(&sample(), &select(&["a"]));
        assert_eq!(
            result.records(),
            &[Record::new("a", 10, 2), Record::new("a", 3, 1)]
        );
    }

    #[test]
    fn empty_selection_yields_nothing() {
        assert!(filter(&sample(), &Selection::new()).is_empty());
        assert!(filter(&Dataset::empty(), &Selection::new()).is_empty());
    }

    #[test]
    fn empty_dataset_yields_nothing() {
        assert!(filter(&Dataset::empty(), &select(&["a"])).is_empty());
    }

    #[test]
    fn unknown_usernames_are_ignored() {
        let result = filter(&sample(), &select(&["b", "zed"]));
        assert_eq!(result.records(), &[Record::new("b", 5, 7)]);
    }

    #[test]
    fn result_is_sound_and_complete() {
        let dataset = Dataset::from(vec![
            Record::new("c", 1, 1),
            Record::new("a", 2, 2),
            Record::new("b", 3, 3),
            Record::new("c", 4, 4),
            Record::new("a", 5, 5),
        ]);
        let selection = select(&["a", "c"]);
        let result = filter(&dataset, &selection);

        assert!(result.iter().all(|r| selection.contains(&r.username)));
        let expected: Vec<_> = dataset
            .iter()
            .filter(|r| r.username != "b")
            .cloned()
            .collect();
        assert_eq!(result.records(), expected.as_slice());
    }

    #[test]
    fn input_is_left_untouched() {
        let dataset = sample();
        let _ = filter(&dataset, &select(&["b"]));
        assert_eq!(dataset, sample());
    }

    #[test]
    fn distinct_usernames_collapses_repeats() {
        assert_eq!(distinct_usernames(&sample()), select(&["a", "b"]));
        assert!(distinct_usernames(&Dataset::empty()).is_empty());
    }
}
