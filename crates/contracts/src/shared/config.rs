use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    pub app: AppSection,
    pub dates: DatesSection,
    pub table: TableSection,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSection {
    pub title: String,
    pub organisation: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DatesSection {
    /// "Today" for overdue and upcoming computations over the static data
    pub reference_date: NaiveDate,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TableSection {
    pub default_sort_ascending: bool,
    pub search_placeholder: String,
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[app]
title = "GRC Command Centre"
organisation = "Northwind Capital Markets Ltd"

[dates]
reference_date = "2026-10-16"

[table]
default_sort_ascending = true
search_placeholder = "Search..."
"#;

pub fn parse_config(contents: &str) -> anyhow::Result<DashboardConfig> {
    let config: DashboardConfig = toml::from_str(contents)?;
    Ok(config)
}

/// Loads the embedded configuration.
///
/// There is no filesystem in the browser, so the embedded TOML is the only
/// source; `parse_config` covers alternative documents.
pub fn load_config() -> anyhow::Result<DashboardConfig> {
    log::info!("Using embedded dashboard configuration");
    parse_config(DEFAULT_CONFIG)
}

impl DashboardConfig {
    pub fn today(&self) -> NaiveDate {
        self.dates.reference_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config().expect("embedded config parses");
        assert_eq!(config.app.title, "GRC Command Centre");
        assert_eq!(
            config.today(),
            NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date")
        );
        assert!(config.table.default_sort_ascending);
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let broken = DEFAULT_CONFIG.replace("2026-10-16", "16/10/2026");
        assert!(parse_config(&broken).is_err());
    }

    #[test]
    fn test_missing_section_is_rejected() {
        assert!(parse_config("[app]\ntitle = \"x\"\norganisation = \"y\"\n").is_err());
    }
}
