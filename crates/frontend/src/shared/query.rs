//! Привязка состояния таблицы к загрузке данных.
//!
//! Запрос перезапускается при любом изменении `(entity_key, sorting_by,
//! sorting_order, current_page, page_size)` или версии кэша. Применяется только
//! ответ на последний выданный запрос: каждый запуск получает [`Ticket`], и
//! ответы с устаревшим билетом отбрасываются.

use contracts::domain::common::{Entity, ListResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::cache::use_query_cache;
use super::http::ApiError;
use super::notifications::{use_notifications, Notifier};
use super::table_options::use_table_options;
use crate::domain::api::EntityApiClient;
use crate::system::auth::context::use_auth;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Счётчик выданных запросов. После `dispose` ни один ответ не применяется.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: u64,
    disposed: bool,
}

impl RequestTracker {
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        !self.disposed && ticket.0 == self.latest
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub is_loading: bool,
    pub error: Option<ApiError>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            is_loading: false,
            error: None,
        }
    }
}

impl<T> QueryState<T> {
    pub fn start(&mut self) {
        self.is_loading = true;
    }

    /// Применить результат. Возвращает `total` при успехе.
    pub fn resolve(&mut self, result: Result<ListResponse<T>, ApiError>) -> Result<usize, ApiError> {
        self.is_loading = false;
        match result {
            Ok(response) => {
                self.items = response.items;
                self.total = response.total;
                self.error = None;
                Ok(response.total)
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }
}

/// Итог применения ответа к состоянию
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// Ответ устарел (пришёл более новый запрос или страница закрыта)
    Stale,
    Loaded(usize),
    Failed(ApiError),
}

/// Применить ответ, только если билет ещё актуален
pub fn apply_if_current<T>(
    tracker: &RequestTracker,
    ticket: Ticket,
    state: &mut QueryState<T>,
    result: Result<ListResponse<T>, ApiError>,
) -> Applied {
    if !tracker.is_current(ticket) {
        log::debug!("discarding stale list response {:?}", ticket);
        return Applied::Stale;
    }
    match state.resolve(result) {
        Ok(total) => Applied::Loaded(total),
        Err(e) => Applied::Failed(e),
    }
}

/// Результат `use_list_query`
pub struct ListQueryHandle<E: Entity> {
    pub state: RwSignal<QueryState<E>>,
}

impl<E: Entity> Clone for ListQueryHandle<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Entity> Copy for ListQueryHandle<E> {}

impl<E: Entity> ListQueryHandle<E> {
    pub fn items(&self) -> Vec<E> {
        self.state.with(|s| s.items.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading)
    }

    pub fn error(&self) -> Option<ApiError> {
        self.state.with(|s| s.error.clone())
    }
}

/// Загрузка страницы списка сущности `E` по текущему состоянию `TableOptionsProvider`.
///
/// Автоматических повторов нет. Ошибка превращается в уведомление по коду статуса.
pub fn use_list_query<E: Entity>() -> ListQueryHandle<E> {
    let options = use_table_options();
    let cache = use_query_cache();
    let notifier = use_notifications();
    let (auth_state, _) = use_auth();

    let tracker = StoredValue::new(RequestTracker::default());
    let state = RwSignal::new(QueryState::<E>::default());

    // Memo отсекает изменения `total` и инвалидацию чужих ключей,
    // иначе они перезапускали бы запрос
    let params = Memo::new(move |_| {
        let entity_key = options.entity_key();
        let version = cache.version(&entity_key);
        (entity_key, options.query(), version)
    });

    Effect::new(move |_| {
        let (entity_key, query, _version) = params.get();

        let Some(ticket) = tracker.try_update_value(|t| t.begin()) else {
            return;
        };
        state.update(|s| s.start());
        log::debug!("loading {} {:?} ({:?})", entity_key, query, ticket);

        let token = auth_state.with_untracked(|a| a.access_token.clone());
        spawn_local(async move {
            let client = EntityApiClient::<E>::new(token);
            let result = client.get_all(&query).await;

            let applied = tracker
                .try_with_value(|t| {
                    state.try_update(|s| apply_if_current(t, ticket, s, result))
                })
                .flatten()
                .unwrap_or(Applied::Stale);

            match applied {
                Applied::Loaded(total) => options.set_total(total),
                Applied::Failed(e) => notifier.notify_failure(&e.notification_key()),
                Applied::Stale => {}
            }
        });
    });

    on_cleanup(move || {
        let _ = tracker.try_update_value(|t| t.dispose());
    });

    ListQueryHandle { state }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<&'static str>, total: usize) -> Result<ListResponse<&'static str>, ApiError> {
        Ok(ListResponse { items, total })
    }

    #[test]
    fn test_latest_request_wins() {
        let mut tracker = RequestTracker::default();
        let mut state = QueryState::default();

        let a = tracker.begin();
        state.start();
        let b = tracker.begin();
        state.start();

        // B отвечает первым, A позже
        assert_eq!(apply_if_current(&tracker, b, &mut state, page(vec!["b1", "b2"], 2)), Applied::Loaded(2));
        assert_eq!(apply_if_current(&tracker, a, &mut state, page(vec!["a1"], 40)), Applied::Stale);

        assert_eq!(state.items, vec!["b1", "b2"]);
        assert_eq!(state.total, 2);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_stale_response_keeps_loading_until_latest_arrives() {
        let mut tracker = RequestTracker::default();
        let mut state = QueryState::default();

        let a = tracker.begin();
        let b = tracker.begin();
        state.start();

        assert_eq!(apply_if_current(&tracker, a, &mut state, page(vec!["a1"], 1)), Applied::Stale);
        assert!(state.is_loading);
        assert!(state.items.is_empty());

        assert_eq!(apply_if_current(&tracker, b, &mut state, page(vec![], 0)), Applied::Loaded(0));
        assert!(!state.is_loading);
    }

    #[test]
    fn test_disposed_tracker_ignores_everything() {
        let mut tracker = RequestTracker::default();
        let mut state = QueryState::default();
        let ticket = tracker.begin();
        tracker.dispose();

        assert_eq!(apply_if_current(&tracker, ticket, &mut state, page(vec!["x"], 1)), Applied::Stale);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_error_keeps_previous_items() {
        let mut tracker = RequestTracker::default();
        let mut state = QueryState::default();

        let first = tracker.begin();
        apply_if_current(&tracker, first, &mut state, page(vec!["a"], 1));

        let second = tracker.begin();
        state.start();
        let applied = apply_if_current(
            &tracker,
            second,
            &mut state,
            Err(ApiError::Http { status: 500, message: String::new() }),
        );
        assert!(matches!(applied, Applied::Failed(ApiError::Http { status: 500, .. })));
        assert_eq!(state.items, vec!["a"]);
        assert_eq!(state.error.as_ref().map(|e| e.notification_key()), Some("500".to_string()));
        assert!(!state.is_loading);
    }
}
