use crate::shared::category::CategoryValue;

/// Number of records per category value, in declared order, zero counts
/// included.
pub fn count_by<T, E, F>(records: &[T], accessor: F) -> Vec<(E, usize)>
where
    E: CategoryValue,
    F: Fn(&T) -> E,
{
    let mut counts: Vec<(E, usize)> = E::all().iter().map(|v| (*v, 0)).collect();
    for record in records {
        let value = accessor(record);
        if let Some(entry) = counts.iter_mut().find(|(v, _)| *v == value) {
            entry.1 += 1;
        }
    }
    counts
}

/// Number of records whose category is one of `values`
pub fn count_where<T, E, F>(records: &[T], accessor: F, values: &[E]) -> usize
where
    E: CategoryValue,
    F: Fn(&T) -> E,
{
    records
        .iter()
        .filter(|&r| values.contains(&accessor(r)))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::severity::Severity;

    #[test]
    fn test_count_by_includes_zero_counts_in_declared_order() {
        let records = vec![Severity::High, Severity::Low, Severity::High];
        let counts = count_by(&records, |s| *s);
        assert_eq!(counts.len(), Severity::all().len());
        assert_eq!(counts.iter().map(|(_, c)| c).sum::<usize>(), 3);
        let high = counts.iter().find(|(s, _)| *s == Severity::High).map(|(_, c)| *c);
        assert_eq!(high, Some(2));
        let critical = counts.iter().find(|(s, _)| *s == Severity::Critical).map(|(_, c)| *c);
        assert_eq!(critical, Some(0));
        assert_eq!(counts[0].0, Severity::all()[0]);
    }

    #[test]
    fn test_count_where() {
        let records = vec![Severity::High, Severity::Critical, Severity::Info];
        assert_eq!(count_where(&records, |s| *s, &[Severity::High, Severity::Critical]), 2);
        assert_eq!(count_where(&records, |s| *s, &[]), 0);
    }
}
