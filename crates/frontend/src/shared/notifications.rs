//! Всплывающие уведомления.
//!
//! Ядро передаёт только ключ (`"deleted"`, `"restored"`, `"404"`…) и
//! необязательное количество; текст сообщения определяется здесь.

use leptos::prelude::*;
use uuid::Uuid;

use super::config::AppConfig;

/// Порт уведомлений (подменяется в тестах)
pub trait Notifier {
    /// Вид уведомления определяется по ключу
    fn notify(&self, key: &str, count: Option<u64>);

    /// Всегда ошибка, даже если ключ похож на успешный статус (например,
    /// `"200"` при нулевом количестве изменённых записей)
    fn notify_failure(&self, key: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
}

pub fn kind_for(key: &str) -> NotificationKind {
    match key {
        "deleted" | "restored" | "saved" => NotificationKind::Success,
        other => match other.parse::<u16>() {
            Ok(status) if (200..300).contains(&status) => NotificationKind::Success,
            _ => NotificationKind::Error,
        },
    }
}

pub fn resolve_message(key: &str, count: Option<u64>) -> String {
    let count = count.unwrap_or(1);
    match key {
        "deleted" => format!("Deleted records: {}", count),
        "restored" => format!("Restored records: {}", count),
        "saved" | "200" => "Changes saved".to_string(),
        "201" => "Record saved".to_string(),
        "400" => "Invalid request".to_string(),
        "401" => "Session expired, please log in again".to_string(),
        "403" => "Access denied".to_string(),
        "404" => "Record not found".to_string(),
        "409" => "Record is locked by another user".to_string(),
        "network" => "Server is unreachable".to_string(),
        "decode" => "Unexpected server response".to_string(),
        other => format!("Request failed ({})", other),
    }
}

/// Текст ошибки для ключа, переданного в `notify_failure`
pub fn failure_message(key: &str) -> String {
    match kind_for(key) {
        NotificationKind::Success => format!("No records were changed ({})", key),
        NotificationKind::Error => resolve_message(key, None),
    }
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    ttl_ms: u32,
}

impl NotificationService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            ttl_ms: config.notification_ttl_ms,
        }
    }

    pub fn items(&self) -> Vec<Notification> {
        self.items.get()
    }

    pub fn dismiss(&self, id: Uuid) {
        // Таймер может сработать уже после размонтирования приложения
        let _ = self.items.try_update(|items| items.retain(|n| n.id != id));
    }

    fn push(&self, kind: NotificationKind, message: String) {
        let notification = Notification {
            id: Uuid::new_v4(),
            kind,
            message,
        };
        let id = notification.id;
        self.items.update(|items| items.push(notification));

        let this = *self;
        gloo_timers::callback::Timeout::new(self.ttl_ms, move || this.dismiss(id)).forget();
    }
}

impl Notifier for NotificationService {
    fn notify(&self, key: &str, count: Option<u64>) {
        self.push(kind_for(key), resolve_message(key, count));
    }

    fn notify_failure(&self, key: &str) {
        log::debug!("failure notification: {}", key);
        self.push(NotificationKind::Error, failure_message(key));
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not found in context")
}

/// Область вывода уведомлений (правый верхний угол)
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notifications">
            <For
                each=move || service.items()
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div
                            class="notification"
                            class:notification--success={n.kind == NotificationKind::Success}
                            class:notification--error={n.kind == NotificationKind::Error}
                        >
                            <span>{n.message}</span>
                            <button class="notification__close" on:click=move |_| service.dismiss(id) title="Close">
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_for() {
        assert_eq!(kind_for("deleted"), NotificationKind::Success);
        assert_eq!(kind_for("restored"), NotificationKind::Success);
        assert_eq!(kind_for("201"), NotificationKind::Success);
        assert_eq!(kind_for("200"), NotificationKind::Success);
        assert_eq!(kind_for("400"), NotificationKind::Error);
        assert_eq!(kind_for("network"), NotificationKind::Error);
    }

    #[test]
    fn test_resolve_message_interpolates_count() {
        assert_eq!(resolve_message("deleted", Some(3)), "Deleted records: 3");
        assert_eq!(resolve_message("restored", None), "Restored records: 1");
        assert_eq!(resolve_message("418", None), "Request failed (418)");
    }

    #[test]
    fn test_failure_message_never_reads_as_success() {
        assert_eq!(failure_message("200"), "No records were changed (200)");
        assert_eq!(failure_message("201"), "No records were changed (201)");
        assert_eq!(failure_message("409"), resolve_message("409", None));
        assert_eq!(failure_message("network"), "Server is unreachable");
    }
}
