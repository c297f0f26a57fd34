//! Универсальная таблица списка.
//!
//! Принимает колонки, строки, действия (общие или вычисляемые по строке),
//! флаг загрузки и обработчик сортировки. Во время загрузки строки не
//! показываются, чтобы старая страница не выглядела результатом новой
//! сортировки.

use contracts::domain::common::SortOrder;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::{
    Spinner, SpinnerSize, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use super::sortable_header_cell::SortableHeaderCell;
use crate::shared::columns::{self, Column};
use crate::shared::icons::icon;
use crate::shared::row_actions::RowAction;

/// Действия строк: общий список либо функция от строки
pub enum RowActions<R> {
    Static(Vec<RowAction>),
    PerRow(Arc<dyn Fn(&R) -> Vec<RowAction> + Send + Sync>),
}

impl<R> Clone for RowActions<R> {
    fn clone(&self) -> Self {
        match self {
            RowActions::Static(actions) => RowActions::Static(actions.clone()),
            RowActions::PerRow(f) => RowActions::PerRow(Arc::clone(f)),
        }
    }
}

impl<R> RowActions<R> {
    pub fn per_row(f: impl Fn(&R) -> Vec<RowAction> + Send + Sync + 'static) -> Self {
        RowActions::PerRow(Arc::new(f))
    }

    pub fn resolve(&self, row: &R) -> Vec<RowAction> {
        match self {
            RowActions::Static(actions) => actions.clone(),
            RowActions::PerRow(f) => f(row),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyState {
    Loading,
    Empty,
    Rows,
}

pub fn body_state(row_count: usize, is_loading: bool) -> BodyState {
    if is_loading {
        BodyState::Loading
    } else if row_count == 0 {
        BodyState::Empty
    } else {
        BodyState::Rows
    }
}

#[component]
pub fn DataTable<R: columns::TableRow>(
    columns: Vec<Column>,
    #[prop(into)] rows: Signal<Vec<R>>,
    actions: RowActions<R>,
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(into)] sorting_by: Signal<String>,
    #[prop(into)] sorting_order: Signal<SortOrder>,
    on_sort: Callback<String>,
    /// Текст для пустого списка
    #[prop(optional, into)]
    empty_text: Option<String>,
) -> impl IntoView {
    let colspan = (columns.len() + 1).to_string();
    let empty_text = empty_text.unwrap_or_else(|| "No records found".to_string());

    let header = columns
        .iter()
        .map(|c| {
            view! {
                <SortableHeaderCell
                    label=c.label.clone()
                    sort_field=c.id.clone()
                    current_sort_field=sorting_by
                    sort_order=sorting_order
                    on_sort=on_sort
                    sortable=c.sortable
                    class=c.class_name.clone()
                />
            }
        })
        .collect_view();

    let columns = StoredValue::new(columns);
    let actions = StoredValue::new(actions);

    let body = move || match body_state(rows.with(|r| r.len()), is_loading.get()) {
        BodyState::Loading => {
            let colspan = colspan.clone();
            view! {
                <TableRow>
                    <TableCell class="table__cell--overlay" attr:colspan=colspan>
                        <Spinner />
                    </TableCell>
                </TableRow>
            }
            .into_any()
        }
        BodyState::Empty => {
            let colspan = colspan.clone();
            let empty_text = empty_text.clone();
            view! {
                <TableRow>
                    <TableCell class="table__cell--empty" attr:colspan=colspan>
                        {empty_text}
                    </TableCell>
                </TableRow>
            }
            .into_any()
        }
        BodyState::Rows => rows
            .get()
            .into_iter()
            .map(|row| render_row(&row, columns, actions))
            .collect_view()
            .into_any(),
    };

    view! {
        <div class="table-container" class:table-container--loading=move || is_loading.get()>
            <Table class="table__data" attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {header}
                        <TableHeaderCell resizable=false min_width=80.0 class="table__header-cell--actions" />
                    </TableRow>
                </TableHeader>
                <TableBody>{body}</TableBody>
            </Table>
        </div>
    }
}

fn render_row<R: columns::TableRow>(
    row: &R,
    columns: StoredValue<Vec<Column>>,
    actions: StoredValue<RowActions<R>>,
) -> impl IntoView {
    let row_id = row.row_id();
    let cells = columns.with_value(|cols| {
        cols.iter()
            .map(|c| {
                let cell = row.cell(&c.id);
                let title = cell.value().to_string();
                let display = cell.display().to_string();
                view! {
                    <TableCell class=c.class_name.clone() attr:title=title>
                        <TableCellLayout truncate=true>{display}</TableCellLayout>
                    </TableCell>
                }
            })
            .collect_view()
    });
    let buttons = actions
        .with_value(|a| a.resolve(row))
        .into_iter()
        .filter(|a| !a.hidden)
        .map(|a| action_button(a, row_id))
        .collect_view();

    view! {
        <TableRow class="table__row">
            {cells}
            <TableCell class="table__cell--actions">{buttons}</TableCell>
        </TableRow>
    }
}

fn action_button(action: RowAction, row_id: i64) -> AnyView {
    if action.pending {
        return view! {
            <span class="table__action table__action--pending">
                <Spinner size=SpinnerSize::Tiny />
            </span>
        }
        .into_any();
    }

    let on_click = action.on_click;
    view! {
        <button
            class="table__action"
            title=action.tooltip
            on:click=move |ev| {
                ev.stop_propagation();
                on_click.run(row_id);
            }
        >
            {icon(action.icon)}
        </button>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_state() {
        assert_eq!(body_state(0, false), BodyState::Empty);
        assert_eq!(body_state(3, false), BodyState::Rows);
        // Загрузка скрывает устаревшие строки
        assert_eq!(body_state(3, true), BodyState::Loading);
        assert_eq!(body_state(0, true), BodyState::Loading);
    }

    #[test]
    fn test_static_actions_resolve_for_any_row() {
        let actions: RowActions<i64> = RowActions::Static(Vec::new());
        assert!(actions.resolve(&1).is_empty());

        let per_row: RowActions<i64> = RowActions::per_row(|_| Vec::new());
        assert!(per_row.clone().resolve(&2).is_empty());
    }
}
