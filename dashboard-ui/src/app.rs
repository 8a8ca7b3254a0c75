use crate::components::analysis::Analysis;
use crate::components::comparison::Comparison;
use crate::components::conclusion::Conclusion;
use crate::components::introduction::Introduction;
use crate::components::overview::Overview;
use crate::components::sidebar::Sidebar;
use crate::components::training::Training;
use dashboard_core::models::ModelName;
use dashboard_core::reveal::{RevealBoard, REVEAL_DELAY_MS};
use dashboard_core::section::Section;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use std::time::Duration;

#[component]
pub fn App() -> impl IntoView {
    let active = create_rw_signal(Section::default());
    let board = create_rw_signal(RevealBoard::new());

    // Handle of the in-flight reveal timer, cleared on unmount so a pending
    // reveal never fires into a dead scope.
    let pending_timer = store_value(None::<TimeoutHandle>);

    let reveal = move |model: ModelName| {
        let Some(pending) = board.try_update(|b| b.begin(model)).flatten() else {
            // Busy, or the scope is gone. The button is disabled while busy,
            // so this is belt and braces for stray events.
            return;
        };
        let scheduled = set_timeout_with_handle(
            move || {
                pending_timer.set_value(None);
                board.update(|b| b.complete(pending));
            },
            Duration::from_millis(REVEAL_DELAY_MS),
        );
        if let Ok(handle) = scheduled {
            pending_timer.set_value(Some(handle));
        }
    };

    on_cleanup(move || {
        if let Some(handle) = pending_timer.try_get_value().flatten() {
            handle.clear();
        }
    });

    let reveal = Callback::new(reveal);

    view! {
      <div class="layout">
        <Sidebar active=active />
        <main class="content">
          {move || match active.get() {
              Section::Introduction => view! { <Introduction /> }.into_view(),
              Section::Overview => view! { <Overview /> }.into_view(),
              Section::Analysis => view! { <Analysis /> }.into_view(),
              Section::Training => view! { <Training board=board reveal=reveal /> }.into_view(),
              Section::Comparison => view! { <Comparison /> }.into_view(),
              Section::Conclusion => view! { <Conclusion /> }.into_view(),
          }}
        </main>
      </div>
    }
}
