use dashboard_core::assets;
use dashboard_core::section::Section;
use leptos::*;

#[component]
pub fn Sidebar(active: RwSignal<Section>) -> impl IntoView {
    view! {
      <aside class="sidebar">
        <h1 class="brand">"Mining ML Dashboard"</h1>

        <div class="downloads">
          <span class="nav-heading">"Downloads"</span>
          {assets::downloads()
              .into_iter()
              .map(|asset| view! {
                <a class="download" href=asset.href download="">
                  <span class="icon">{asset.icon}</span>
                  {asset.label}
                </a>
              })
              .collect_view()}
        </div>

        <a
          class="live-app"
          href=assets::LIVE_APP_URL
          target="_blank"
          rel="noopener noreferrer"
        >
          "Open the prediction app"
        </a>

        <nav>
          {Section::ALL
              .into_iter()
              .map(|section| view! {
                <button
                  class=move || {
                      if active.get() == section {
                          format!("nav-entry active {}", section.accent())
                      } else {
                          "nav-entry".to_string()
                      }
                  }
                  on:click=move |_| active.set(section)
                >
                  {section.label()}
                </button>
              })
              .collect_view()}
        </nav>
      </aside>
    }
}
