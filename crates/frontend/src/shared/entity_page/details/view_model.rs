use contracts::domain::common::Entity;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::form::{fields_from_entity, payload_from_fields, FormField};
use crate::domain::api::EntityApiClient;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::cache::{CacheInvalidator, QueryCache};
use crate::shared::http::ApiError;
use crate::shared::notifications::{NotificationService, Notifier};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    NotFound,
    Failed(String),
}

impl LoadStatus {
    pub fn from_error(error: &ApiError) -> Self {
        match error {
            ApiError::NotFound => LoadStatus::NotFound,
            other => LoadStatus::Failed(other.to_string()),
        }
    }
}

/// ViewModel карточки сущности `E`: загрузка, редактирование полей, сохранение
pub struct EntityDetailsViewModel<E: Entity> {
    pub id: Option<i64>,
    pub record: RwSignal<Option<E>>,
    pub fields: RwSignal<Vec<FormField>>,
    pub status: RwSignal<LoadStatus>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl<E: Entity> Clone for EntityDetailsViewModel<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Entity> Copy for EntityDetailsViewModel<E> {}

impl<E: Entity> EntityDetailsViewModel<E> {
    pub fn new(id: Option<i64>) -> Self {
        let status = if id.is_some() {
            LoadStatus::Loading
        } else {
            LoadStatus::Ready
        };
        Self {
            id,
            record: RwSignal::new(None),
            fields: RwSignal::new(fields_from_entity::<E>(None)),
            status: RwSignal::new(status),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    /// Запись заблокирована другим пользователем: форма только для чтения
    pub fn is_locked_by_other(&self, actor_id: Option<i64>) -> bool {
        self.record
            .with(|r| r.as_ref().is_some_and(|e| e.base().is_locked_by_other(actor_id)))
    }

    pub fn set_field(&self, name: &'static str, value: String) {
        self.fields.update(|fields| {
            if let Some(field) = fields.iter_mut().find(|f| f.name == name) {
                field.value = value;
            }
        });
    }

    /// Load record from server if ID is provided
    pub fn load(&self, token: Option<String>, notifier: NotificationService) {
        let Some(id) = self.id else {
            return;
        };
        let vm = *self;
        let _ = vm.status.try_set(LoadStatus::Loading);
        spawn_local(async move {
            match EntityApiClient::<E>::new(token).get_by_id(id).await {
                Ok(entity) => {
                    let _ = vm.fields.try_set(fields_from_entity(Some(&entity)));
                    let _ = vm.record.try_set(Some(entity));
                    let _ = vm.status.try_set(LoadStatus::Ready);
                }
                Err(e) => {
                    // 404 показывается самой страницей
                    if e != ApiError::NotFound {
                        notifier.notify_failure(&e.notification_key());
                    }
                    let _ = vm.status.try_set(LoadStatus::from_error(&e));
                }
            }
        });
    }

    /// Save form data to server
    pub fn save_command(
        &self,
        token: Option<String>,
        cache: QueryCache,
        notifier: NotificationService,
        tabs_store: AppGlobalContext,
    ) {
        let payload = match self.fields.with_untracked(|f| payload_from_fields(f)) {
            Ok(payload) => payload,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        let vm = *self;
        vm.error.set(None);
        vm.saving.set(true);
        spawn_local(async move {
            let client = EntityApiClient::<E>::new(token.clone());
            let result = match vm.id {
                Some(id) => client.update(id, &payload).await,
                None => client.create(&payload).await,
            };
            let _ = vm.saving.try_set(false);

            match result {
                Ok(reply) => {
                    log::info!("{} saved with status {}", E::ENTITY_KEY, reply.status);
                    notifier.notify(&reply.status.to_string(), None);
                    cache.invalidate(E::ENTITY_KEY);
                    match vm.id {
                        Some(_) => vm.load(token, notifier),
                        None => {
                            tabs_store.close_tab(&format!("{}/new", E::ENTITY_KEY));
                            tabs_store.open_tab(E::ENTITY_KEY, E::TITLE);
                        }
                    }
                }
                Err(e) => {
                    notifier.notify_failure(&e.notification_key());
                    let _ = vm.error.try_set(Some(e.to_string()));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_status_from_error() {
        assert_eq!(LoadStatus::from_error(&ApiError::NotFound), LoadStatus::NotFound);
        assert!(matches!(
            LoadStatus::from_error(&ApiError::Network("offline".into())),
            LoadStatus::Failed(_)
        ));
    }
}
