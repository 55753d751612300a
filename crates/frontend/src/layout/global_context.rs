use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::layout::tabs::registry::VIEW_KEYS;

/// Shell state shared by every view: opened tabs, the active one and the
/// visibility of the side panels.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    pub right_open: RwSignal<bool>,
    /// Table state of each view, keyed by tab key, kept for the session only
    pub form_states: RwSignal<HashMap<String, serde_json::Value>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            right_open: RwSignal::new(false),
            form_states: RwSignal::new(HashMap::new()),
        }
    }

    pub fn get_form_state(&self, form_key: &str) -> Option<serde_json::Value> {
        self.form_states
            .with_untracked(|states| states.get(form_key).cloned())
    }

    pub fn set_form_state(&self, form_key: String, state: serde_json::Value) {
        self.form_states.update(|states| {
            states.insert(form_key, state);
        });
    }

    /// Opens the tab named by `?active=` and keeps the query string in sync
    /// with the active tab afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        match active_key_from_query(&search) {
            Some(active_key) if is_known_view(&active_key) => {
                let title = crate::layout::tabs::tab_label_for_key(&active_key);
                self.open_tab(&active_key, title);
            }
            Some(active_key) => {
                log::warn!("ignoring unknown view in URL: '{}'", active_key);
            }
            None => {}
        }

        let this = *self;
        Effect::new(move |_| {
            if let Some(active_key) = this.active.get() {
                let new_url = query_for_active_key(&active_key);

                let current_search = window()
                    .and_then(|w| w.location().search().ok())
                    .unwrap_or_default();

                // Only update URL if it actually changed
                if current_search != new_url {
                    if let Some(w) = window() {
                        if let Ok(history) = w.history() {
                            let _ = history.replace_state_with_url(
                                &wasm_bindgen::JsValue::NULL,
                                "",
                                Some(&new_url),
                            );
                        }
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("open_tab: key='{}', title='{}'", key, title);
        self.opened.update(|tabs| {
            if push_tab(tabs, key, title) {
                leptos::logging::log!("tab added, total: {}", tabs.len());
            }
        });
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        let active = self.active.get_untracked();
        let next_active = self
            .opened
            .with_untracked(|tabs| next_active_after_close(tabs, active.as_deref(), key));
        if next_active != active {
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn toggle_right(&self) {
        self.right_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Appends a tab unless one with `key` is already open; `true` if added
fn push_tab(tabs: &mut Vec<Tab>, key: &str, title: &str) -> bool {
    if tabs.iter().any(|tab| tab.key == key) {
        return false;
    }
    tabs.push(Tab {
        key: key.to_string(),
        title: title.to_string(),
    });
    true
}

/// Active tab after `closed` was removed from `remaining`: unchanged unless
/// the closed tab was active, then the last remaining tab.
fn next_active_after_close(remaining: &[Tab], active: Option<&str>, closed: &str) -> Option<String> {
    if active == Some(closed) {
        remaining.last().map(|t| t.key.clone())
    } else {
        active.map(str::to_string)
    }
}

fn active_key_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").filter(|k| !k.is_empty()).cloned()
}

fn is_known_view(key: &str) -> bool {
    VIEW_KEYS.contains(&key)
}

fn query_for_active_key(active_key: &str) -> String {
    let query_string =
        serde_qs::to_string(&HashMap::from([("active".to_string(), active_key.to_string())]))
            .unwrap_or_default();
    format!("?{}", query_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(keys: &[&str]) -> Vec<Tab> {
        keys.iter()
            .map(|k| Tab { key: k.to_string(), title: k.to_string() })
            .collect()
    }

    #[test]
    fn test_push_tab_ignores_duplicates() {
        let mut opened = tabs(&["a001_access_log"]);
        assert!(!push_tab(&mut opened, "a001_access_log", "Access Log"));
        assert!(push_tab(&mut opened, "a002_audit_trail", "Audit Trail"));
        assert_eq!(opened.len(), 2);
    }

    #[test]
    fn test_closing_active_tab_activates_last_remaining() {
        let remaining = tabs(&["a", "b"]);
        assert_eq!(next_active_after_close(&remaining, Some("c"), "c"), Some("b".to_string()));
        assert_eq!(next_active_after_close(&[], Some("c"), "c"), None);
    }

    #[test]
    fn test_closing_inactive_tab_keeps_active() {
        let remaining = tabs(&["a", "c"]);
        assert_eq!(next_active_after_close(&remaining, Some("a"), "b"), Some("a".to_string()));
    }

    #[test]
    fn test_only_registered_views_open_from_url() {
        assert!(is_known_view("a006_sebi_submission"));
        assert!(is_known_view("d400_grc_overview"));
        assert!(!is_known_view("foo"));
        let requested = active_key_from_query("?active=foo");
        assert_eq!(requested.as_deref(), Some("foo"));
        assert!(!requested.is_some_and(|k| is_known_view(&k)));
    }

    #[test]
    fn test_active_key_query_round_trip() {
        let query = query_for_active_key("a006_sebi_submission");
        assert_eq!(query, "?active=a006_sebi_submission");
        assert_eq!(active_key_from_query(&query), Some("a006_sebi_submission".to_string()));
        assert_eq!(active_key_from_query(""), None);
        assert_eq!(active_key_from_query("?active="), None);
    }
}
