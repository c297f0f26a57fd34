pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use crate::shared::notifications::NotificationHost;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Left   |      Center        |
/// | (nav)   |  (tab bar + pages) |
/// +------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <left::Left />
                <div class="app-main">
                    <center::Center>
                        <center::tabs::Tabs />
                    </center::Center>
                </div>
            </div>
            <NotificationHost />
        </div>
    }
}
