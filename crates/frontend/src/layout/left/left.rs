use super::navbar::Navbar;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Левая панель навигации по сущностям; сворачивается из верхней панели
#[component]
pub fn Left() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <aside data-zone="left" class="left" class:hidden=move || !tabs_store.left_open.get()>
            <Navbar />
        </aside>
    }
}
