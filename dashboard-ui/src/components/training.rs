use dashboard_core::models::{self, ModelName};
use dashboard_core::reveal::RevealBoard;
use leptos::*;

#[component]
pub fn Training(board: RwSignal<RevealBoard>, reveal: Callback<ModelName>) -> impl IntoView {
    view! {
      <div class="section accent-orange">
        <h1>"Model Training"</h1>
        <div class="cards two-wide">
          {ModelName::ALL
              .into_iter()
              .map(|model| view! { <ModelCard board=board reveal=reveal model=model /> })
              .collect_view()}
        </div>
      </div>
    }
}

#[component]
fn ModelCard(
    board: RwSignal<RevealBoard>,
    reveal: Callback<ModelName>,
    model: ModelName,
) -> impl IntoView {
    let busy = move || board.get().is_busy();
    let revealed = move || board.get().is_revealed(model);

    view! {
      <div class="card model-card">
        <div class="row spread">
          <h3>{model.label()}</h3>
          <button
            class="reveal-btn"
            disabled=busy
            on:click=move |_| reveal.call(model)
          >
            {move || if busy() { "⏳" } else { "▶" }}
            " Results"
          </button>
        </div>
        <Show when=revealed fallback=|| ()>
          <Interpretation model=model />
        </Show>
      </div>
    }
}

#[component]
fn Interpretation(model: ModelName) -> impl IntoView {
    let interp = models::interpretation(model);

    view! {
      <div class="interp">
        <h4>{interp.heading}</h4>
        <table class="compact">
          <thead>
            <tr>
              <th>"Metric"</th>
              <th>"Value"</th>
              <th>"Reading"</th>
            </tr>
          </thead>
          <tbody>
            {interp
                .metrics
                .into_iter()
                .map(|m| view! {
                  <tr>
                    <td>{m.metric}</td>
                    <td class="mono">{m.value}</td>
                    <td>{m.reading}</td>
                  </tr>
                })
                .collect_view()}
          </tbody>
        </table>
        <div class="takeaways">
          <span class="check">"✅ Overall reading"</span>
          <ul>
            {interp
                .takeaways
                .into_iter()
                .map(|line| view! { <li>{line}</li> })
                .collect_view()}
          </ul>
        </div>
      </div>
    }
}
