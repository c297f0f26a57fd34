use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::cache::QueryCache;
use crate::shared::config::AppConfig;
use crate::shared::notifications::NotificationService;
use crate::system::auth::context::{use_auth, AuthProvider};
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    log::info!(
        "api port: {}, prefix: {}, notification ttl: {} ms",
        config.api_port,
        config.api_prefix,
        config.notification_ttl_ms
    );

    provide_context(AppGlobalContext::new());
    provide_context(QueryCache::new());
    provide_context(NotificationService::new(&config));

    view! {
        <AuthProvider>
            <AuthGate />
        </AuthProvider>
    }
}

/// Без токена показывается форма входа
#[component]
fn AuthGate() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Вкладка из URL восстанавливается только после входа
    Effect::new(move |initialized: Option<bool>| {
        let authenticated = auth_state.with(|a| a.is_authenticated());
        if authenticated && initialized != Some(true) {
            tabs_store.init_router_integration();
            return true;
        }
        initialized.unwrap_or(false)
    });

    view! {
        <Show
            when=move || auth_state.with(|a| a.is_authenticated())
            fallback=|| view! { <LoginPage /> }
        >
            <Shell />
        </Show>
    }
}
