use super::column::{CellKind, ColumnDef, FilterDef};
use super::state::TableState;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::{Badge as UiBadge, CategoryBadge, FilterSelect};
use crate::shared::export::download_csv;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use contracts::shared::config::DashboardConfig;
use contracts::shared::export::{export_file_name, CsvExportable};
use contracts::shared::record_filter::FilterableRecord;
use contracts::shared::record_sort::Sortable;
use contracts::shared::status_tone::StatusTone;
use leptos::prelude::*;
use thaw::*;

/// Counts shown as chips in the page header, computed over the visible rows
pub type ChipsFn<T> = fn(&[T]) -> Vec<(&'static str, usize, StatusTone)>;

/// List page for one register: search, category dropdowns, sortable
/// columns, optional expandable detail rows and CSV export of what is
/// currently visible.
///
/// The table state is restored from and written back to the tab's form
/// state, so switching tabs keeps filters, sort and expanded rows.
#[component]
pub fn FilterableTable<T>(
    /// Tab key of the view, also the page id prefix and export file name
    view_key: &'static str,
    title: &'static str,
    records: &'static [T],
    columns: Vec<ColumnDef<T>>,
    #[prop(optional)]
    filters: Vec<FilterDef>,
    /// Stable row identity for `For` and the expanded set
    row_id: fn(&T) -> String,
    /// Content of the expandable row under each record
    #[prop(optional)]
    detail: Option<fn(&T) -> AnyView>,
    /// Initial sort column, source order when unset
    #[prop(optional)]
    default_sort: Option<&'static str>,
    #[prop(optional)]
    chips: Option<ChipsFn<T>>,
) -> impl IntoView
where
    T: FilterableRecord + Sortable + CsvExportable + Clone + PartialEq + Send + Sync + 'static,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = use_context::<DashboardConfig>().expect("DashboardConfig not found");
    let today = config.today();
    let search_placeholder = config.table.search_placeholder.clone();

    let initial = ctx
        .get_form_state(view_key)
        .and_then(|saved| match serde_json::from_value::<TableState>(saved) {
            Ok(state) => Some(state),
            Err(e) => {
                log::warn!("{}: discarding saved table state: {}", view_key, e);
                None
            }
        })
        .unwrap_or_else(|| TableState::new(default_sort, config.table.default_sort_ascending));
    let state = RwSignal::new(initial);

    Effect::new(move |_| {
        let snapshot = state.get();
        match serde_json::to_value(&snapshot) {
            Ok(value) => ctx.set_form_state(view_key.to_string(), value),
            Err(e) => log::warn!("{}: table state not saved: {}", view_key, e),
        }
    });

    let visible = Memo::new(move |_| state.with(|s| s.visible_rows(records)));
    let query = Memo::new(move |_| state.with(|s| s.criteria.query.clone()));
    let columns = StoredValue::new(columns);
    let filters = StoredValue::new(filters);
    let is_filter_expanded = RwSignal::new(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let active_filters_count = Signal::derive(move || state.with(|s| s.criteria.active_filters_count()));
    let summary = Signal::derive(move || {
        format!("{} of {} rows", visible.with(|rows| rows.len()), records.len())
    });

    let export = move |_| {
        let rows = visible.get_untracked();
        let filename = export_file_name(view_key, &today.format("%Y-%m-%d").to_string());
        match download_csv(&rows, &filename) {
            Ok(()) => set_error.set(None),
            Err(e) => {
                log::warn!("{}: CSV export failed: {}", view_key, e);
                set_error.set(Some(format!("Export failed: {}", e)));
            }
        }
    };

    let on_sort = Callback::new(move |field: String| {
        log::debug!("{}: sort by {}", view_key, field);
        state.update(|s| s.toggle_sort(&field));
    });

    let column_count = columns.with_value(|cols| cols.len()) + usize::from(detail.is_some());

    view! {
        <PageFrame page_id=page_id(view_key, PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    <UiBadge tone=StatusTone::Primary>
                        {move || visible.with(|rows| rows.len()).to_string()}
                    </UiBadge>
                    {move || chips.map(|count| {
                        let items = visible.with(|rows| count(rows));
                        view! {
                            <div class="page__chips">
                                {items
                                    .into_iter()
                                    .map(|(label, n, tone)| view! {
                                        <UiBadge tone=tone>{format!("{}: {}", label, n)}</UiBadge>
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=export
                        disabled=Signal::derive(move || visible.with(|rows| rows.is_empty()))
                    >
                        {icon("download")}
                        " Export CSV"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=active_filters_count
                    summary=summary
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 360px;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Search:"</Label>
                                <SearchInput
                                    value=Signal::derive(move || query.get())
                                    on_change=Callback::new(move |text: String| {
                                        state.update(|s| s.criteria.set_query(text));
                                    })
                                    placeholder=search_placeholder
                                />
                            </Flex>
                        </div>
                        {filters.with_value(|defs| {
                            defs.iter()
                                .map(|def| {
                                    let key = def.key;
                                    let options = def.options.clone();
                                    view! {
                                        <FilterSelect
                                            label=def.label
                                            id=format!("{}-{}", view_key, key)
                                            selection=Signal::derive(move || {
                                                state.with(|s| s.criteria.selection(key).to_string())
                                            })
                                            options=options
                                            on_select=Callback::new(move |selection: String| {
                                                log::debug!("{}: {} = {}", view_key, key, selection);
                                                state.update(|s| s.criteria.set_category(key, &selection));
                                            })
                                        />
                                    }
                                })
                                .collect_view()
                        })}
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| state.update(|s| s.reset_filters())
                            disabled=Signal::derive(move || state.with(|s| s.criteria.is_empty()))
                        >
                            {icon("rotate-ccw")}
                            " Reset"
                        </Button>
                    </Flex>
                    {move || {
                        let tags = state.with(|s| filters.with_value(|defs| s.active_tags(defs)));
                        (!tags.is_empty()).then(|| view! {
                            <div class="filter-panel__tags">
                                {tags
                                    .into_iter()
                                    .map(|tag| {
                                        let target = tag.target.clone();
                                        view! {
                                            <FilterTag
                                                label=tag.label
                                                on_remove=Callback::new(move |_| {
                                                    state.update(|s| s.remove_tag(&target));
                                                })
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        })
                    }}
                </FilterPanel>

                {move || error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:id=format!("{}-table", view_key) attr:style="width: 100%; min-width: 800px;">
                        <TableHeader>
                            <TableRow>
                                {detail.is_some().then(|| view! {
                                    <TableHeaderCell resizable=false min_width=36.0>""</TableHeaderCell>
                                })}
                                {columns.with_value(|cols| {
                                    cols.iter()
                                        .map(|col| header_cell(col, state, on_sort))
                                        .collect_view()
                                })}
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=move |row: &T| row_id(row)
                                children=move |row: T| {
                                    let id = row_id(&row);
                                    let id_for_toggle = id.clone();
                                    let is_expanded = Signal::derive(move || state.with(|s| s.is_expanded(&id)));
                                    let cells = columns.with_value(|cols| {
                                        cols.iter().map(|col| body_cell(col, &row, query)).collect_view()
                                    });

                                    view! {
                                        <TableRow>
                                            {detail.is_some().then(|| view! {
                                                <TableCell>
                                                    <button
                                                        class="table__expand-toggle"
                                                        title="Details"
                                                        on:click=move |_| state.update(|s| s.toggle_expanded(&id_for_toggle))
                                                    >
                                                        {move || if is_expanded.get() { icon("chevron-down") } else { icon("chevron-right") }}
                                                    </button>
                                                </TableCell>
                                            })}
                                            {cells}
                                        </TableRow>
                                        {detail.map(|render| {
                                            let detail_row = StoredValue::new(row.clone());
                                            view! {
                                            <Show when=move || is_expanded.get()>
                                                <TableRow>
                                                    <TableCell attr:colspan=column_count.to_string()>
                                                        <div class="table__detail">{detail_row.with_value(|row| render(row))}</div>
                                                    </TableCell>
                                                </TableRow>
                                            </Show>
                                            }
                                        })}
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    <Show when=move || visible.with(|rows| rows.is_empty())>
                        <div class="table__empty">"No records match the current filters"</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}

fn header_cell<T>(col: &ColumnDef<T>, state: RwSignal<TableState>, on_sort: Callback<String>) -> AnyView {
    let align = if col.align_right { "right" } else { "left" };
    if col.sortable {
        view! {
            <SortableHeaderCell
                label=col.title
                sort_field=col.key
                current_sort_field=Signal::derive(move || state.with(|s| s.sort_field_or_empty()))
                sort_ascending=Signal::derive(move || state.with(|s| s.sort_ascending))
                on_sort=on_sort
                min_width=col.min_width
                align=align
            />
        }
        .into_any()
    } else {
        let title = col.title;
        view! {
            <TableHeaderCell resizable=false min_width=col.min_width class="resizable">
                {title}
            </TableHeaderCell>
        }
        .into_any()
    }
}

fn body_cell<T>(col: &ColumnDef<T>, row: &T, query: Memo<String>) -> AnyView {
    let content = match col.cell {
        CellKind::Text(value) => value(row).into_any(),
        CellKind::Search(value) => {
            let text = value(row);
            (move || highlight_matches(&text, &query.get())).into_any()
        }
        CellKind::Badge(value) => {
            let (label, tone) = value(row);
            view! { <CategoryBadge label=label tone=tone /> }.into_any()
        }
        CellKind::Custom(render) => render(row),
    };
    let style = if col.align_right { "text-align: right;" } else { "" };

    view! {
        <TableCell attr:style=style>
            <TableCellLayout truncate=true>{content}</TableCellLayout>
        </TableCell>
    }
    .into_any()
}

/// Label/value pairs for an expanded row
pub fn detail_grid(items: Vec<(&'static str, String)>) -> AnyView {
    view! {
        <dl class="detail-grid">
            {items
                .into_iter()
                .map(|(label, value)| view! {
                    <dt class="detail-grid__label">{label}</dt>
                    <dd class="detail-grid__value">{value}</dd>
                })
                .collect_view()}
        </dl>
    }
    .into_any()
}
