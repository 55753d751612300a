use crate::shared::status_tone::StatusTone;

/// Selection value of a dropdown meaning "no constraint on this field"
pub const ALL_SELECTION: &str = "all";

/// A closed set of literal values a record field can take.
///
/// `as_str` is the exact value shown in the table and compared by the
/// categorical filters, so it must be unique within `all()`.
pub trait CategoryValue: Copy + Eq + 'static {
    /// Every declared value, in display order
    fn all() -> &'static [Self];

    /// Literal value of the field
    fn as_str(&self) -> &'static str;

    /// Colour of the value's badge
    fn tone(&self) -> StatusTone;

    /// Exact, case-sensitive lookup of a literal value
    fn parse(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.as_str() == value)
    }
}

/// Dropdown options for a category: the "all" sentinel first, then every
/// declared value as `(value, label)`.
pub fn category_options<E: CategoryValue>(all_label: &str) -> Vec<(String, String)> {
    let mut options = Vec::with_capacity(E::all().len() + 1);
    options.push((ALL_SELECTION.to_string(), all_label.to_string()));
    options.extend(
        E::all()
            .iter()
            .map(|v| (v.as_str().to_string(), v.as_str().to_string())),
    );
    options
}

/// Dropdown options built from free-form field values (e.g. department
/// names), deduplicated in first-appearance order.
pub fn distinct_options<'a, I>(values: I, all_label: &str) -> Vec<(String, String)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut options = vec![(ALL_SELECTION.to_string(), all_label.to_string())];
    for value in values {
        if !options.iter().skip(1).any(|(v, _)| v == value) {
            options.push((value.to_string(), value.to_string()));
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::severity::Severity;

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(Severity::parse("High"), Some(Severity::High));
        assert_eq!(Severity::parse("high"), None);
        assert_eq!(Severity::parse(ALL_SELECTION), None);
    }

    #[test]
    fn test_category_options_start_with_all() {
        let options = category_options::<Severity>("All severities");
        assert_eq!(options[0], ("all".to_string(), "All severities".to_string()));
        assert_eq!(options.len(), Severity::all().len() + 1);
        assert_eq!(options[1].0, Severity::all()[0].as_str());
    }

    #[test]
    fn test_distinct_options_keep_first_appearance_order() {
        let options = distinct_options(["Finance", "IT", "Finance", "Legal"], "All");
        let values: Vec<&str> = options.iter().map(|(v, _)| v.as_str()).collect();
        assert_eq!(values, vec!["all", "Finance", "IT", "Legal"]);
    }
}
