use dashboard_core::models::ModelName;
use leptos::*;

#[component]
pub fn Introduction() -> impl IntoView {
    let tags = ["Machine Learning", "Geology", "Prediction", "Big Data"];
    let stats = [
        ("5,000", "mining samples"),
        ("7", "variables"),
        ("4", "algorithms compared"),
    ];

    view! {
      <div class="section accent-blue">
        <div class="panel hero">
          <h1>"Predictive Analysis of Mining Data"</h1>
          <div class="columns">
            <div>
              <h2>"Project goal"</h2>
              <p>
                "This dashboard presents a complete analysis of mining data to \
                 predict gold grade using several machine-learning algorithms. \
                 The approach compares the performance of four distinct models."
              </p>
              <div class="tags">
                {tags
                    .into_iter()
                    .map(|tag| view! { <span class="tag">{tag}</span> })
                    .collect_view()}
              </div>
            </div>
            <div class="panel">
              <h3>"Models studied"</h3>
              <ul class="model-list">
                {ModelName::ALL
                    .into_iter()
                    .map(|model| view! { <li>{model.label()}</li> })
                    .collect_view()}
              </ul>
            </div>
          </div>
        </div>

        <div class="cards">
          {stats
              .into_iter()
              .map(|(value, subtitle)| view! {
                <div class="card stat">
                  <p class="stat-value">{value}</p>
                  <p class="meta">{subtitle}</p>
                </div>
              })
              .collect_view()}
        </div>
      </div>
    }
}
