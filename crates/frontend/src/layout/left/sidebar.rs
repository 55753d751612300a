//! Sidebar with collapsible menu groups, one item per view.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn item(id: &'static str, icon: &'static str) -> (&'static str, &'static str, &'static str) {
    (id, tab_label_for_key(id), icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            icon: "bar-chart",
            items: vec![item("d400_grc_overview", "layout-dashboard")],
        },
        MenuGroup {
            id: "governance",
            label: "Governance",
            icon: "book",
            items: vec![
                item("a004_policy_repository", "file-text"),
                item("a012_policy_exception", "alert-triangle"),
                item("a007_training_calendar", "calendar"),
            ],
        },
        MenuGroup {
            id: "risk",
            label: "Risk",
            icon: "activity",
            items: vec![
                item("a008_risk_register", "activity"),
                item("a003_vendor_risk", "building"),
                item("a011_control_testing", "check-square"),
            ],
        },
        MenuGroup {
            id: "compliance",
            label: "Compliance",
            icon: "shield",
            items: vec![
                item("a010_compliance_obligation", "list"),
                item("a006_sebi_submission", "send"),
            ],
        },
        MenuGroup {
            id: "security",
            label: "Security Operations",
            icon: "lock",
            items: vec![
                item("a009_incident_register", "alert-triangle"),
                item("a005_soc_shift_log", "clock"),
                item("a001_access_log", "eye"),
                item("a002_audit_trail", "database"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec!["dashboards".to_string()]);

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();
                let items_stored = StoredValue::new(group.items.clone());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(id)
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| {
                                                ctx.open_tab(id, label);
                                            }
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tabs::registry::VIEW_KEYS;

    #[test]
    fn test_every_view_is_in_the_menu_once() {
        let ids: Vec<&str> = get_menu_groups()
            .into_iter()
            .flat_map(|g| g.items.into_iter().map(|(id, _, _)| id))
            .collect();
        for key in VIEW_KEYS {
            assert_eq!(ids.iter().filter(|id| *id == key).count(), 1, "{}", key);
        }
        assert_eq!(ids.len(), VIEW_KEYS.len());
    }
}
