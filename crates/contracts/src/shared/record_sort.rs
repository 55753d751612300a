use std::cmp::Ordering;

/// Record that can be ordered by a column key
pub trait Sortable {
    /// Compares two records by `field`; unknown fields compare equal
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sorts in place by `field`. The sort is stable, so rows with equal keys
/// keep the order the filter produced.
pub fn sort_records<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Case-insensitive text comparison used by most columns
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        rank: u8,
    }

    impl Sortable for Item {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => cmp_text(self.name, other.name),
                "rank" => self.rank.cmp(&other.rank),
                _ => Ordering::Equal,
            }
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { name: "delta", rank: 2 },
            Item { name: "Alpha", rank: 1 },
            Item { name: "charlie", rank: 2 },
            Item { name: "bravo", rank: 1 },
        ]
    }

    #[test]
    fn test_sort_by_text_ignores_case() {
        let mut list = items();
        sort_records(&mut list, "name", true);
        let names: Vec<&str> = list.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Alpha", "bravo", "charlie", "delta"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut list = items();
        sort_records(&mut list, "rank", true);
        let names: Vec<&str> = list.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Alpha", "bravo", "delta", "charlie"]);
    }

    #[test]
    fn test_descending_reverses_keys() {
        let mut list = items();
        sort_records(&mut list, "rank", false);
        assert_eq!(list[0].rank, 2);
        assert_eq!(list[3].rank, 1);
    }

    #[test]
    fn test_unknown_field_keeps_order() {
        let mut list = items();
        sort_records(&mut list, "missing", true);
        assert_eq!(list, items());
    }
}
