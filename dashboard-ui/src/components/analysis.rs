use dataset_catalog::ColumnKind;
use leptos::*;

#[component]
pub fn Analysis() -> impl IntoView {
    let summary = dataset_catalog::summary();
    let dims = format!("{} × {}", summary.rows, summary.columns);

    view! {
      <div class="section accent-purple">
        <h1>"Preliminary Analysis"</h1>

        <div class="columns">
          <div class="panel">
            <div class="row">
              <span class="check">"✔"</span>
              <span>"Dimensions"</span>
              <span class="badge mono">{dims}</span>
            </div>
            <div class="row">
              <span class="check">"✔"</span>
              <span>"No missing values"</span>
            </div>
            <div class="row">
              <span class="check">"✔"</span>
              <span>"Variables"</span>
            </div>
            <ul class="var-list">
              {dataset_catalog::columns()
                  .into_iter()
                  .map(|col| {
                      let dtype = match col.kind {
                          ColumnKind::Numeric => "float64",
                          ColumnKind::Categorical => "object",
                      };
                      view! {
                        <li>
                          {col.name}
                          " "
                          <span class="meta">{format!("({dtype})")}</span>
                        </li>
                      }
                  })
                  .collect_view()}
            </ul>
          </div>

          <div class="panel">
            <div class="row">
              <span class="check">"✔"</span>
              <span>"Descriptive statistics"</span>
            </div>
            <table class="compact">
              <thead>
                <tr>
                  <th>"Variable"</th>
                  <th>"Mean"</th>
                  <th>"Std dev"</th>
                  <th>"Min"</th>
                  <th>"Max"</th>
                </tr>
              </thead>
              <tbody>
                <For
                  each=dataset_catalog::descriptive_stats
                  key=|stat| stat.name
                  children=|stat| view! {
                    <tr>
                      <td class="mono">{stat.name}</td>
                      <td>{format!("{:.2}", stat.mean)}</td>
                      <td>{format!("{:.2}", stat.std_dev)}</td>
                      <td>{format!("{:.2}", stat.min)}</td>
                      <td>{format!("{:.2}", stat.max)}</td>
                    </tr>
                  }
                />
              </tbody>
            </table>
          </div>
        </div>

        <h2>"Exploratory Visualisations"</h2>
        <div class="cards">
          {dataset_catalog::figure_captions()
              .into_iter()
              .map(|figure| view! {
                <div class="card figure">
                  <img src=figure.image alt=figure.title />
                  <h3>{figure.title}</h3>
                  <p class="meta">{figure.caption}</p>
                </div>
              })
              .collect_view()}
        </div>

        <div class="panel findings">
          <h3>"Exploratory takeaways"</h3>
          <ul>
            {dataset_catalog::exploratory_findings()
                .into_iter()
                .map(|finding| view! { <li>{finding}</li> })
                .collect_view()}
          </ul>
        </div>
      </div>
    }
}
