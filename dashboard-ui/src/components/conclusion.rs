use leptos::*;

#[component]
pub fn Conclusion() -> impl IntoView {
    let key_results = [
        "The MLP Regressor stands out as the best model, with an R² of 0.9979 \
         and a mean absolute error of 0.22. It shows excellent predictive \
         capability for gold grade.",
        "Geological variables such as depth, fault distance and conductivity \
         appear the most predictive of gold grade, according to the Random \
         Forest feature importances.",
        "Data preparation (categorical encoding, normalisation, outlier \
         removal) significantly improved every model, especially the \
         scale-sensitive MLP and XGBoost.",
    ];

    let recommendations = [
        (
            "tone-green",
            "Production",
            [
                "Deploy the MLP Regressor for gold grade predictions; it offers \
                 exceptional accuracy (R² = 0.9979).",
                "Add continuous monitoring to catch data drift or performance \
                 degradation.",
            ],
        ),
        (
            "tone-blue",
            "Research",
            [
                "Enrich the dataset with more geochemical and mineralogical \
                 variables (copper, zinc, silica grades).",
                "This would sharpen the understanding of the links between \
                 geology and gold grade.",
            ],
        ),
        (
            "tone-purple",
            "Evolution",
            [
                "Explore deep networks, or CNN/RNN architectures if spatial or \
                 temporal data become available.",
                "Test hybrid ensembles (weighted average of MLP and XGBoost) to \
                 maximise robustness.",
            ],
        ),
    ];

    let impact = [
        ("💰", "Cost reduction — up to 25%", "Reliable grade predictions \
          optimise extraction zones and cut unnecessary drilling."),
        ("⏱", "Time savings — up to 40%", "Prospecting speeds up, with models \
          scoring thousands of points in seconds."),
        ("🎯", "High accuracy — up to 99.8% R²", "The MLP model reaches \
          exceptional reliability, enabling strategic decisions built on \
          robust predictions."),
    ];

    let next_steps = [
        "Turn this analysis into an interactive web application so geologists \
         can enter new measurements and get live predictions.",
        "Add richer dynamic visualisations, such as 3D geological maps or \
         interactive charts.",
        "Extend the analysis to other deposits or ores to validate how the \
         models generalise across geological conditions.",
    ];

    view! {
      <div class="section accent-indigo">
        <h1>"Conclusions & Recommendations"</h1>

        <div class="columns">
          <div class="panel">
            <h2>"Key Results"</h2>
            <ul class="findings-list">
              {key_results
                  .into_iter()
                  .map(|line| view! { <li>{line}</li> })
                  .collect_view()}
            </ul>
          </div>

          <div class="panel">
            <h2>"Recommendations"</h2>
            {recommendations
                .into_iter()
                .map(|(tone, title, lines)| view! {
                  <div class=format!("card highlight {tone}")>
                    <h4>{title}</h4>
                    <ul>
                      {lines
                          .into_iter()
                          .map(|line| view! { <li>{line}</li> })
                          .collect_view()}
                    </ul>
                  </div>
                })
                .collect_view()}
          </div>
        </div>

        <div class="panel">
          <h2>"Business Impact"</h2>
          {impact
              .into_iter()
              .map(|(icon, title, body)| view! {
                <div class="row impact">
                  <span class="icon">{icon}</span>
                  <div>
                    <b>{title}</b>
                    <p class="meta">{body}</p>
                  </div>
                </div>
              })
              .collect_view()}
        </div>

        <div class="panel next-steps">
          <h2>"Next Steps"</h2>
          <ul>
            {next_steps
                .into_iter()
                .map(|line| view! { <li>{line}</li> })
                .collect_view()}
          </ul>
        </div>
      </div>
    }
}
