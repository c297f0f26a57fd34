use contracts::domain::common::Entity;
use leptos::prelude::*;
use std::marker::PhantomData;
use thaw::{Button, ButtonAppearance};

use crate::layout::global_context::AppGlobalContext;
use crate::shared::cache::{use_query_cache, CacheInvalidator};
use crate::shared::columns::columns_for;
use crate::shared::components::table::{DataTable, RowActions};
use crate::shared::components::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::query::use_list_query;
use crate::shared::row_actions::use_row_actions;
use crate::shared::table_options::{use_table_options, TableOptionsProvider};

/// Страница списка сущности `E`: `<EntityListPage<Room> />`
#[component]
pub fn EntityListPage<E: Entity>(#[prop(marker)] _entity: PhantomData<E>) -> impl IntoView {
    view! {
        <TableOptionsProvider entity_key=E::ENTITY_KEY.to_string()>
            <EntityListBody<E> />
        </TableOptionsProvider>
    }
}

#[component]
fn EntityListBody<E: Entity>(#[prop(marker)] _entity: PhantomData<E>) -> impl IntoView {
    let options = use_table_options();
    let query = use_list_query::<E>();
    let row_actions = use_row_actions::<E>();
    let cache = use_query_cache();
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let rows = Signal::derive(move || query.items());
    let is_loading = Signal::derive(move || query.is_loading());

    let on_sort = Callback::new(move |field: String| options.on_sort(&field));
    let on_page_change = Callback::new(move |page: usize| options.set_current_page(page));
    let on_page_size_change = Callback::new(move |size: usize| options.set_page_size(size));

    let on_create = move |_| {
        tabs_store.open_tab(
            &format!("{}/new", E::ENTITY_KEY),
            &format!("{}: new", E::TITLE),
        );
    };
    let on_refresh = move |_| cache.invalidate(E::ENTITY_KEY);

    view! {
        <div class="content">
            <div class="header">
                <h2 class="header__title">{E::TITLE}</h2>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=on_create>
                        {icon("plus")}
                        " New"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=on_refresh>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <DataTable
                columns={columns_for::<E>()}
                rows=rows
                actions=RowActions::per_row(row_actions)
                is_loading=is_loading
                sorting_by=Signal::derive(move || options.sorting_by())
                sorting_order=Signal::derive(move || options.sorting_order())
                on_sort=on_sort
            />

            <PaginationControls
                current_page=Signal::derive(move || options.current_page())
                total_count=Signal::derive(move || options.total())
                page_size=Signal::derive(move || options.page_size())
                on_page_change=on_page_change
                on_page_size_change=on_page_size_change
            />
        </div>
    }
}
