use contracts::domain::common::{AttributeKind, Entity};
use leptos::prelude::*;
use std::marker::PhantomData;
use thaw::{Button, ButtonAppearance, Spinner};

use super::form::FormField;
use super::view_model::{EntityDetailsViewModel, LoadStatus};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::cache::use_query_cache;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::system::auth::context::use_auth;

/// Карточка сущности `E`. Без `id` открывается форма создания.
#[component]
pub fn EntityDetails<E: Entity>(
    id: Option<i64>,
    #[prop(marker)] _entity: PhantomData<E>,
) -> impl IntoView {
    let cache = use_query_cache();
    let notifier = use_notifications();
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let vm = EntityDetailsViewModel::<E>::new(id);
    vm.load(auth_state.with_untracked(|a| a.access_token.clone()), notifier);

    let read_only = Signal::derive(move || {
        let actor_id = auth_state.with(|a| a.actor_id());
        vm.is_locked_by_other(actor_id) || vm.saving.get()
    });

    let title = match id {
        Some(id) => format!("{} #{}", E::TITLE, id),
        None => format!("{}: new record", E::TITLE),
    };

    let on_save = move |_| {
        let token = auth_state.with_untracked(|a| a.access_token.clone());
        vm.save_command(token, cache, notifier, tabs_store);
    };
    let tab_key = match id {
        Some(id) => format!("{}/{}", E::ENTITY_KEY, id),
        None => format!("{}/new", E::ENTITY_KEY),
    };
    let on_close = move |_| tabs_store.close_tab(&tab_key);

    view! {
        <div class="content details-container">
            <div class="header">
                <h2 class="header__title">{title}</h2>
                <div class="header__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || {
                            read_only.get() || vm.status.get() != LoadStatus::Ready
                        })
                    >
                        {icon("save")}
                        {if vm.is_edit_mode() { " Save" } else { " Create" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=on_close>
                        {icon("x")}
                        " Close"
                    </Button>
                </div>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || match vm.status.get() {
                LoadStatus::Loading => view! {
                    <div class="details-loading"><Spinner /></div>
                }.into_any(),
                LoadStatus::NotFound => view! {
                    <div class="details-not-found">
                        <h3>"Record not found"</h3>
                        <p>{format!("{} #{} does not exist or was removed.", E::TITLE, id.unwrap_or_default())}</p>
                    </div>
                }.into_any(),
                LoadStatus::Failed(message) => view! {
                    <div class="error">{message}</div>
                }.into_any(),
                LoadStatus::Ready => view! {
                    <LockBanner vm=vm />
                    <div class="details-form">
                        {move || vm.fields.get()
                            .into_iter()
                            .map(|field| view! { <FieldInput field=field vm=vm read_only=read_only /> })
                            .collect_view()}
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn LockBanner<E: Entity>(vm: EntityDetailsViewModel<E>) -> impl IntoView {
    let (auth_state, _) = use_auth();
    move || {
        let actor_id = auth_state.with(|a| a.actor_id());
        if !vm.is_locked_by_other(actor_id) {
            return None;
        }
        let locked_by = vm
            .record
            .with(|r| r.as_ref().and_then(|e| e.base().locked_by))
            .unwrap_or_default();
        Some(view! {
            <div class="details-lock-banner">
                {icon("lock")}
                {format!(" Record is being edited by user #{}. The form is read-only.", locked_by)}
            </div>
        })
    }
}

#[component]
fn FieldInput<E: Entity>(
    field: FormField,
    vm: EntityDetailsViewModel<E>,
    read_only: Signal<bool>,
) -> impl IntoView {
    let name = field.name;
    let input_id = format!("field-{}", name);

    let input = match field.kind {
        AttributeKind::Bool => view! {
            <input
                type="checkbox"
                id=input_id.clone()
                prop:checked=field.is_checked()
                disabled=move || read_only.get()
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    vm.set_field(name, checked.to_string());
                }
            />
        }
        .into_any(),
        kind => {
            let input_type = match kind {
                AttributeKind::Integer => "number",
                AttributeKind::DateTime => "datetime-local",
                _ => "text",
            };
            let placeholder = if kind == AttributeKind::IdList { "1, 2, 3" } else { "" };
            view! {
                <input
                    type=input_type
                    id=input_id.clone()
                    prop:value=field.value.clone()
                    placeholder=placeholder
                    disabled=move || read_only.get()
                    on:change=move |ev| vm.set_field(name, event_target_value(&ev))
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="form-group">
            <label for=input_id>{field.label}</label>
            {input}
        </div>
    }
}
