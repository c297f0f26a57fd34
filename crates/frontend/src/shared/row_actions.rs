//! Действия над строкой таблицы: редактирование, удаление, восстановление.
//!
//! Видимость действий зависит от мягкого удаления и блокировки записи.
//! Удаление и восстановление вызывают API-клиент с `[row.id]`; успех
//! (`count > 0`) даёт уведомление и инвалидацию кэша, всё остальное даёт
//! уведомление по коду статуса.

use async_trait::async_trait;
use contracts::domain::common::{Entity, EntityBase, MutationCount};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;

use super::cache::{use_query_cache, CacheInvalidator};
use super::http::{ApiError, ApiReply};
use super::notifications::{use_notifications, Notifier};
use crate::domain::api::EntityApiClient;
use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::context::use_auth;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Edit,
    Delete,
    Restore,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [ActionKind::Edit, ActionKind::Delete, ActionKind::Restore];

    pub fn icon(self) -> &'static str {
        match self {
            ActionKind::Edit => "edit",
            ActionKind::Delete => "delete",
            ActionKind::Restore => "restore",
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            ActionKind::Edit => "Edit",
            ActionKind::Delete => "Delete",
            ActionKind::Restore => "Restore",
        }
    }

    /// Действие, выполняемое запросом к API (без перехода на форму)
    pub fn mutation(self) -> Option<MutationKind> {
        match self {
            ActionKind::Edit => None,
            ActionKind::Delete => Some(MutationKind::Delete),
            ActionKind::Restore => Some(MutationKind::Restore),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    Delete,
    Restore,
}

impl MutationKind {
    /// Ключ уведомления при успехе
    pub fn success_key(self) -> &'static str {
        match self {
            MutationKind::Delete => "deleted",
            MutationKind::Restore => "restored",
        }
    }
}

/// Скрыто ли действие для строки с учётом текущего пользователя.
///
/// - Edit: скрыто для удалённых и заблокированных другим пользователем
/// - Delete: скрыто для удалённых и любых заблокированных (включая себя)
/// - Restore: доступно только для удалённых
pub fn is_hidden(kind: ActionKind, base: &EntityBase, actor_id: Option<i64>) -> bool {
    match kind {
        ActionKind::Edit => base.deleted || base.is_locked_by_other(actor_id),
        ActionKind::Delete => base.deleted || base.is_locked(),
        ActionKind::Restore => !base.deleted,
    }
}

/// Клиент, умеющий удалять и восстанавливать записи по списку id
#[async_trait(?Send)]
pub trait MutationClient {
    async fn delete(&self, ids: &[i64]) -> Result<ApiReply<MutationCount>, ApiError>;
    async fn restore(&self, ids: &[i64]) -> Result<ApiReply<MutationCount>, ApiError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied(u64),
    /// Ошибка или нулевой эффект; содержит ключ показанного уведомления
    Rejected(String),
}

/// Выполнить удаление/восстановление одной записи.
///
/// Повторов нет. Ответ с `count == 0` считается ошибкой, хотя HTTP-статус успешный.
pub async fn run_row_mutation<C, I, N>(
    kind: MutationKind,
    row_id: i64,
    entity_key: &str,
    client: &C,
    cache: &I,
    notifier: &N,
) -> MutationOutcome
where
    C: MutationClient + ?Sized,
    I: CacheInvalidator + ?Sized,
    N: Notifier + ?Sized,
{
    let ids = [row_id];
    let result = match kind {
        MutationKind::Delete => client.delete(&ids).await,
        MutationKind::Restore => client.restore(&ids).await,
    };

    match result {
        Ok(reply) if reply.data.count > 0 => {
            notifier.notify(kind.success_key(), Some(reply.data.count));
            cache.invalidate(entity_key);
            MutationOutcome::Applied(reply.data.count)
        }
        Ok(reply) => {
            log::error!(
                "{:?} {} #{}: no records affected (status {})",
                kind,
                entity_key,
                row_id,
                reply.status
            );
            let key = reply.status.to_string();
            notifier.notify_failure(&key);
            MutationOutcome::Rejected(key)
        }
        Err(e) => {
            log::error!("{:?} {} #{}: {}", kind, entity_key, row_id, e);
            let key = e.notification_key();
            notifier.notify_failure(&key);
            MutationOutcome::Rejected(key)
        }
    }
}

/// Строки, по которым сейчас выполняется запрос
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingMutations {
    rows: HashSet<(MutationKind, i64)>,
}

impl PendingMutations {
    /// Возвращает `false`, если такой запрос уже выполняется
    pub fn start(&mut self, kind: MutationKind, row_id: i64) -> bool {
        self.rows.insert((kind, row_id))
    }

    pub fn finish(&mut self, kind: MutationKind, row_id: i64) {
        self.rows.remove(&(kind, row_id));
    }

    pub fn is_pending(&self, kind: MutationKind, row_id: i64) -> bool {
        self.rows.contains(&(kind, row_id))
    }
}

/// Описание кнопки действия для конкретной строки
#[derive(Clone)]
pub struct RowAction {
    pub kind: ActionKind,
    pub hidden: bool,
    /// Запрос по строке выполняется: вместо иконки показывается спиннер
    pub pending: bool,
    pub icon: &'static str,
    pub tooltip: String,
    pub on_click: Callback<i64>,
}

impl RowAction {
    pub fn new(kind: ActionKind, on_click: Callback<i64>) -> Self {
        Self {
            kind,
            hidden: false,
            pending: false,
            icon: kind.icon(),
            tooltip: kind.tooltip().to_string(),
            on_click,
        }
    }
}

/// Построитель действий строки для списка сущности `E`.
///
/// Edit открывает вкладку карточки, Delete/Restore выполняются на месте.
pub fn use_row_actions<E: Entity>() -> impl Fn(&E) -> Vec<RowAction> + Clone + Send + Sync + 'static {
    let cache = use_query_cache();
    let notifier = use_notifications();
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let pending = RwSignal::new(PendingMutations::default());

    let on_edit = Callback::new(move |row_id: i64| {
        let key = format!("{}/{}", E::ENTITY_KEY, row_id);
        let title = format!("{} #{}", E::TITLE, row_id);
        tabs_store.open_tab(&key, &title);
    });

    let mutate = move |kind: MutationKind| {
        Callback::new(move |row_id: i64| {
            let started = pending
                .try_update(|p| p.start(kind, row_id))
                .unwrap_or(false);
            if !started {
                return;
            }
            let token = auth_state.with_untracked(|a| a.access_token.clone());
            spawn_local(async move {
                let client = EntityApiClient::<E>::new(token);
                run_row_mutation(kind, row_id, E::ENTITY_KEY, &client, &cache, &notifier).await;
                let _ = pending.try_update(|p| p.finish(kind, row_id));
            });
        })
    };
    let on_delete = mutate(MutationKind::Delete);
    let on_restore = mutate(MutationKind::Restore);

    move |row: &E| {
        let actor_id = auth_state.with(|a| a.actor_id());
        let row_id = row.id();
        ActionKind::ALL
            .into_iter()
            .map(|kind| {
                let on_click = match kind {
                    ActionKind::Edit => on_edit,
                    ActionKind::Delete => on_delete,
                    ActionKind::Restore => on_restore,
                };
                let mut action = RowAction::new(kind, on_click);
                action.hidden = is_hidden(kind, row.base(), actor_id);
                action.pending = kind
                    .mutation()
                    .map(|m| pending.with(|p| p.is_pending(m, row_id)))
                    .unwrap_or(false);
                action
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notifications::{kind_for, NotificationKind};
    use chrono::Utc;
    use std::cell::RefCell;

    const SELF_ID: i64 = 7;
    const OTHER_ID: i64 = 8;

    fn row(deleted: bool, locked_by: Option<i64>) -> EntityBase {
        let now = Utc::now();
        EntityBase {
            id: 100,
            date_of_creation: now,
            last_update: now,
            deleted,
            locked_by,
        }
    }

    fn visible(base: &EntityBase) -> [bool; 3] {
        ActionKind::ALL.map(|kind| !is_hidden(kind, base, Some(SELF_ID)))
    }

    #[test]
    fn test_visibility_matrix() {
        // [Edit, Delete, Restore]
        assert_eq!(visible(&row(false, None)), [true, true, false]);
        assert_eq!(visible(&row(true, None)), [false, false, true]);
        assert_eq!(visible(&row(false, Some(OTHER_ID))), [false, false, false]);
        assert_eq!(visible(&row(false, Some(SELF_ID))), [true, false, false]);
    }

    #[test]
    fn test_pending_rows_are_independent() {
        let mut pending = PendingMutations::default();
        assert!(pending.start(MutationKind::Delete, 1));
        assert!(!pending.start(MutationKind::Delete, 1));
        assert!(pending.start(MutationKind::Delete, 2));
        assert!(pending.is_pending(MutationKind::Delete, 1));
        assert!(!pending.is_pending(MutationKind::Restore, 1));

        pending.finish(MutationKind::Delete, 1);
        assert!(!pending.is_pending(MutationKind::Delete, 1));
        assert!(pending.is_pending(MutationKind::Delete, 2));
    }

    struct FakeClient {
        reply: Result<ApiReply<MutationCount>, ApiError>,
        calls: RefCell<Vec<(MutationKind, Vec<i64>)>>,
    }

    impl FakeClient {
        fn returning(reply: Result<ApiReply<MutationCount>, ApiError>) -> Self {
            Self {
                reply,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl MutationClient for FakeClient {
        async fn delete(&self, ids: &[i64]) -> Result<ApiReply<MutationCount>, ApiError> {
            self.calls.borrow_mut().push((MutationKind::Delete, ids.to_vec()));
            self.reply.clone()
        }

        async fn restore(&self, ids: &[i64]) -> Result<ApiReply<MutationCount>, ApiError> {
            self.calls.borrow_mut().push((MutationKind::Restore, ids.to_vec()));
            self.reply.clone()
        }
    }

    #[derive(Default)]
    struct FakeCache {
        invalidated: RefCell<Vec<String>>,
    }

    impl CacheInvalidator for FakeCache {
        fn invalidate(&self, entity_key: &str) {
            self.invalidated.borrow_mut().push(entity_key.to_string());
        }
    }

    #[derive(Default)]
    struct FakeNotifier {
        sent: RefCell<Vec<(NotificationKind, String, Option<u64>)>>,
    }

    impl Notifier for FakeNotifier {
        fn notify(&self, key: &str, count: Option<u64>) {
            self.sent.borrow_mut().push((kind_for(key), key.to_string(), count));
        }

        fn notify_failure(&self, key: &str) {
            self.sent
                .borrow_mut()
                .push((NotificationKind::Error, key.to_string(), None));
        }
    }

    #[tokio::test]
    async fn test_delete_success_invalidates_once() {
        let client = FakeClient::returning(Ok(ApiReply {
            data: MutationCount { count: 1 },
            status: 204,
        }));
        let cache = FakeCache::default();
        let notifier = FakeNotifier::default();

        let outcome =
            run_row_mutation(MutationKind::Delete, 100, "rooms", &client, &cache, &notifier).await;

        assert_eq!(outcome, MutationOutcome::Applied(1));
        assert_eq!(*client.calls.borrow(), vec![(MutationKind::Delete, vec![100])]);
        assert_eq!(*cache.invalidated.borrow(), vec!["rooms".to_string()]);
        assert_eq!(*notifier.sent.borrow(), vec![(NotificationKind::Success, "deleted".to_string(), Some(1))]);
    }

    #[tokio::test]
    async fn test_zero_count_is_failure() {
        let client = FakeClient::returning(Ok(ApiReply {
            data: MutationCount { count: 0 },
            status: 200,
        }));
        let cache = FakeCache::default();
        let notifier = FakeNotifier::default();

        let outcome =
            run_row_mutation(MutationKind::Delete, 100, "rooms", &client, &cache, &notifier).await;

        assert_eq!(outcome, MutationOutcome::Rejected("200".to_string()));
        assert!(cache.invalidated.borrow().is_empty());
        assert_eq!(*notifier.sent.borrow(), vec![(NotificationKind::Error, "200".to_string(), None)]);
    }

    #[tokio::test]
    async fn test_zero_count_after_no_content_is_still_an_error() {
        // 204 приходит как 201, но без изменённых записей это ошибка
        let client = FakeClient::returning(Ok(ApiReply {
            data: MutationCount { count: 0 },
            status: 201,
        }));
        let cache = FakeCache::default();
        let notifier = FakeNotifier::default();

        run_row_mutation(MutationKind::Restore, 3, "news", &client, &cache, &notifier).await;

        assert!(cache.invalidated.borrow().is_empty());
        let sent = notifier.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, NotificationKind::Error);
        assert_ne!(kind_for(&sent[0].1), NotificationKind::Error);
    }

    #[tokio::test]
    async fn test_restore_transport_error_notifies_status() {
        let client = FakeClient::returning(Err(ApiError::Http {
            status: 409,
            message: "locked".to_string(),
        }));
        let cache = FakeCache::default();
        let notifier = FakeNotifier::default();

        let outcome =
            run_row_mutation(MutationKind::Restore, 5, "tags", &client, &cache, &notifier).await;

        assert_eq!(outcome, MutationOutcome::Rejected("409".to_string()));
        assert_eq!(*client.calls.borrow(), vec![(MutationKind::Restore, vec![5])]);
        assert!(cache.invalidated.borrow().is_empty());
        assert_eq!(*notifier.sent.borrow(), vec![(NotificationKind::Error, "409".to_string(), None)]);
    }

    #[tokio::test]
    async fn test_restore_success_uses_restored_key() {
        let client = FakeClient::returning(Ok(ApiReply {
            data: MutationCount { count: 2 },
            status: 200,
        }));
        let cache = FakeCache::default();
        let notifier = FakeNotifier::default();

        run_row_mutation(MutationKind::Restore, 5, "tags", &client, &cache, &notifier).await;

        assert_eq!(*notifier.sent.borrow(), vec![(NotificationKind::Success, "restored".to_string(), Some(2))]);
        assert_eq!(*cache.invalidated.borrow(), vec!["tags".to_string()]);
    }
}
