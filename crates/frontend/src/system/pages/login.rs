use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Input, InputType};

use crate::shared::http::ApiError;
use crate::system::auth::context::{use_auth, AuthState};
use crate::system::auth::{api, storage};

/// Текст ошибки входа для пользователя
pub fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Unauthenticated => "Invalid username or password".to_string(),
        ApiError::Network(_) => "Server is unreachable".to_string(),
        other => format!("Login failed: {}", other),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let (_, set_auth_state) = use_auth();

    let can_submit = move || {
        !is_loading.get() && username.with(|u| !u.trim().is_empty()) && password.with(|p| !p.is_empty())
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !can_submit() {
            return;
        }

        let username_val = username.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        is_loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            match api::login(username_val, password_val).await {
                Ok(response) => {
                    log::info!("logged in as {}", response.user.username);
                    storage::save_access_token(&response.access_token);
                    // AuthGate переключится на Shell
                    set_auth_state.set(AuthState {
                        access_token: Some(response.access_token),
                        user_info: Some(response.user),
                    });
                }
                Err(e) => {
                    log::error!("login failed: {}", e);
                    error_message.set(Some(login_error_message(&e)));
                }
            }
            is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <form class="login-box" on:submit=on_submit>
                <h1>"Museum Admin"</h1>

                {move || error_message.get().map(|e| view! { <div class="error-message">{e}</div> })}

                <div class="form-group">
                    <label>"Username"</label>
                    <Input value=username disabled=Signal::derive(move || is_loading.get()) />
                </div>

                <div class="form-group">
                    <label>"Password"</label>
                    <Input
                        value=password
                        input_type=InputType::Password
                        disabled=Signal::derive(move || is_loading.get())
                    />
                </div>

                <button type="submit" class="btn-primary" disabled=move || !can_submit()>
                    {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_message() {
        assert_eq!(login_error_message(&ApiError::Unauthenticated), "Invalid username or password");
        assert_eq!(login_error_message(&ApiError::Network("offline".into())), "Server is unreachable");
        assert!(login_error_message(&ApiError::Http {
            status: 500,
            message: "boom".into()
        })
        .contains("500"));
    }
}
