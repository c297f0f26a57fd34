//! Состояние сортировки и пагинации одного списка.
//!
//! `TableOptionsProvider` создаёт состояние на время жизни страницы списка и
//! раздаёт его потомкам через контекст; `use_table_options` достаёт его в любом
//! вложенном компоненте без прокидывания props.

use contracts::domain::common::{ListQuery, SortOrder};
use leptos::prelude::*;

/// Допустимые размеры страницы
pub const PAGE_SIZES: [usize; 3] = [20, 50, 100];

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_SORT_FIELD: &str = "id";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableOptions {
    /// Ключ сущности, для которой открыт список
    pub entity_key: String,
    pub sorting_by: String,
    pub sorting_order: SortOrder,
    pub page_size: usize,
    pub current_page: usize,
    pub total: usize,
}

impl TableOptions {
    pub fn new(entity_key: impl Into<String>) -> Self {
        Self {
            entity_key: entity_key.into(),
            sorting_by: DEFAULT_SORT_FIELD.to_string(),
            sorting_order: SortOrder::Desc,
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 0,
            total: 0,
        }
    }

    /// Клик по заголовку колонки: та же колонка меняет направление,
    /// новая колонка сортируется по возрастанию.
    pub fn on_sort(&mut self, attribute: &str) {
        if self.sorting_by == attribute {
            self.sorting_order = self.sorting_order.toggled();
        } else {
            self.sorting_by = attribute.to_string();
            self.sorting_order = SortOrder::Asc;
        }
    }

    /// Размер страницы выбирается только из [`PAGE_SIZES`].
    /// Новый размер возвращает список на первую страницу.
    pub fn set_page_size(&mut self, page_size: usize) {
        debug_assert!(
            PAGE_SIZES.contains(&page_size),
            "unsupported page size {}",
            page_size
        );
        if self.page_size != page_size {
            self.page_size = page_size;
            self.current_page = 0;
        }
    }

    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page;
    }

    /// Вызывается только обработчиком результата запроса
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
    }

    /// Переключение на другую сущность сбрасывает сортировку и пагинацию.
    /// Возвращает `true`, если состояние изменилось.
    pub fn switch_entity(&mut self, entity_key: &str) -> bool {
        if self.entity_key == entity_key {
            return false;
        }
        *self = Self::new(entity_key);
        true
    }

    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size)
    }

    pub fn has_next_page(&self) -> bool {
        (self.current_page + 1) * self.page_size < self.total
    }

    pub fn query(&self) -> ListQuery {
        ListQuery {
            sort: self.sorting_by.clone(),
            order: self.sorting_order,
            page: self.current_page,
            page_size: self.page_size,
        }
    }
}

/// Реактивная обёртка над [`TableOptions`], раздаётся через контекст
#[derive(Clone, Copy)]
pub struct TableOptionsHandle {
    state: RwSignal<TableOptions>,
}

impl TableOptionsHandle {
    pub fn get(&self) -> TableOptions {
        self.state.get()
    }

    pub fn entity_key(&self) -> String {
        self.state.with(|s| s.entity_key.clone())
    }

    pub fn sorting_by(&self) -> String {
        self.state.with(|s| s.sorting_by.clone())
    }

    pub fn sorting_order(&self) -> SortOrder {
        self.state.with(|s| s.sorting_order)
    }

    pub fn page_size(&self) -> usize {
        self.state.with(|s| s.page_size)
    }

    pub fn current_page(&self) -> usize {
        self.state.with(|s| s.current_page)
    }

    pub fn total(&self) -> usize {
        self.state.with(|s| s.total)
    }

    pub fn total_pages(&self) -> usize {
        self.state.with(|s| s.total_pages())
    }

    pub fn query(&self) -> ListQuery {
        self.state.with(|s| s.query())
    }

    pub fn on_sort(&self, attribute: &str) {
        self.state.update(|s| s.on_sort(attribute));
    }

    pub fn set_page_size(&self, page_size: usize) {
        self.state.update(|s| s.set_page_size(page_size));
    }

    pub fn set_current_page(&self, page: usize) {
        self.state.update(|s| s.set_current_page(page));
    }

    pub fn set_total(&self, total: usize) {
        // Страница может быть уже размонтирована, когда приходит ответ
        let _ = self.state.try_maybe_update(|s| {
            let changed = s.total != total;
            s.set_total(total);
            (changed, ())
        });
    }
}

/// Провайдер состояния таблицы для поддерева одной страницы списка
#[component]
pub fn TableOptionsProvider(
    /// Ключ сущности; при его смене состояние сбрасывается к значениям по умолчанию
    #[prop(into)]
    entity_key: Signal<String>,
    children: Children,
) -> impl IntoView {
    provide_table_options(entity_key);
    children()
}

/// Создать состояние таблицы в текущем владельце и положить его в контекст
pub fn provide_table_options(entity_key: Signal<String>) -> TableOptionsHandle {
    let state = RwSignal::new(TableOptions::new(entity_key.get_untracked()));

    Effect::new(move |_| {
        let key = entity_key.get();
        state.maybe_update(|s| s.switch_entity(&key));
    });

    let handle = TableOptionsHandle { state };
    provide_context(handle);
    handle
}

pub fn use_table_options() -> TableOptionsHandle {
    use_context::<TableOptionsHandle>()
        .expect("use_table_options must be used within a TableOptionsProvider")
}

#[cfg(test)]
mod tests {
    use super::*;
    use any_spawner::Executor;

    #[test]
    fn test_defaults() {
        let options = TableOptions::new("rooms");
        assert_eq!(options.sorting_by, "id");
        assert_eq!(options.sorting_order, SortOrder::Desc);
        assert_eq!(options.page_size, 20);
        assert_eq!(options.current_page, 0);
        assert_eq!(options.total, 0);
    }

    #[test]
    fn test_sort_same_column_twice_restores_order() {
        for column in ["id", "name", "floor"] {
            let mut options = TableOptions::new("rooms");
            options.on_sort("name");
            let before = options.sorting_order;

            options.on_sort(column);
            assert_eq!(options.sorting_by, column);
            options.on_sort(column);
            assert_eq!(options.sorting_by, column);

            if column == "name" {
                assert_eq!(options.sorting_order, before);
            } else {
                // Первый клик по новой колонке даёт ASC, второй DESC
                assert_eq!(options.sorting_order, SortOrder::Desc);
            }
        }
    }

    #[test]
    fn test_sort_different_column_resets_to_asc() {
        let mut options = TableOptions::new("rooms");
        options.on_sort("name");
        options.on_sort("name");
        assert_eq!(options.sorting_order, SortOrder::Desc);

        options.on_sort("floor");
        assert_eq!(options.sorting_by, "floor");
        assert_eq!(options.sorting_order, SortOrder::Asc);
    }

    #[test]
    fn test_switch_entity_resets_state() {
        let mut options = TableOptions::new("rooms");
        options.on_sort("name");
        options.set_page_size(100);
        options.set_current_page(4);
        options.set_total(1000);

        assert!(!options.switch_entity("rooms"));
        assert_eq!(options.current_page, 4);

        assert!(options.switch_entity("ships"));
        assert_eq!(options, TableOptions::new("ships"));
        assert_eq!(options.sorting_by, "id");
        assert_eq!(options.sorting_order, SortOrder::Desc);
        assert_eq!(options.current_page, 0);
        assert_eq!(options.page_size, 20);
    }

    #[test]
    fn test_page_size_change_returns_to_first_page() {
        let mut options = TableOptions::new("rooms");
        options.set_total(100);
        options.set_current_page(4);

        options.set_page_size(100);
        assert_eq!(options.page_size, 100);
        assert_eq!(options.current_page, 0);
        assert!(options.current_page < options.total_pages());

        // Тот же размер не сбрасывает страницу
        options.set_current_page(0);
        options.set_page_size(20);
        options.set_current_page(3);
        options.set_page_size(20);
        assert_eq!(options.current_page, 3);
    }

    #[tokio::test]
    async fn test_provider_resets_when_entity_key_changes() {
        let _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        tokio::task::LocalSet::new()
            .run_until(async {
                let entity_key = RwSignal::new("rooms".to_string());
                let handle = provide_table_options(entity_key.into());
                Executor::tick().await;

                handle.on_sort("name");
                handle.set_page_size(50);
                handle.set_current_page(3);
                handle.set_total(400);
                assert_eq!(use_table_options().current_page(), 3);

                entity_key.set("ships".to_string());
                Executor::tick().await;

                assert_eq!(handle.get(), TableOptions::new("ships"));
                assert_eq!(handle.sorting_by(), "id");
                assert_eq!(handle.sorting_order(), SortOrder::Desc);
                assert_eq!(handle.page_size(), 20);
                assert_eq!(handle.current_page(), 0);
            })
            .await;
    }

    #[test]
    fn test_page_math() {
        let mut options = TableOptions::new("tags");
        options.set_total(41);
        assert_eq!(options.total_pages(), 3);
        assert!(options.has_next_page());
        options.set_current_page(2);
        assert!(!options.has_next_page());

        options.set_total(0);
        assert_eq!(options.total_pages(), 0);
    }

    #[test]
    fn test_query_reflects_state() {
        let mut options = TableOptions::new("news");
        options.on_sort("title");
        options.set_page_size(50);
        options.set_current_page(1);
        let query = options.query();
        assert_eq!(query.sort, "title");
        assert_eq!(query.order, SortOrder::Asc);
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 50);
    }
}
