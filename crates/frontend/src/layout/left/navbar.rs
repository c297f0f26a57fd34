use crate::domain::catalog::CATALOG;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <nav class="main-nav-bar">
            <ul>
                {CATALOG.iter().map(|entry| {
                    let (key, title) = (entry.key, entry.title);
                    let is_active = move || {
                        tabs_store.active.with(|active| active.as_deref() == Some(key))
                    };
                    view! {
                        <li class:active=is_active on:click=move |_| tabs_store.open_tab(key, title)>
                            {icon(key)}
                            <span>{title}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
