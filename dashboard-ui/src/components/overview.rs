use dataset_catalog::{ColumnKind, ColumnRole};
use leptos::*;

fn thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[component]
pub fn Overview() -> impl IntoView {
    let summary = dataset_catalog::summary();
    let completeness = dataset_catalog::completeness(&summary);

    view! {
      <div class="section accent-green">
        <h1>"Dataset Overview"</h1>

        <div class="cards">
          <div class="card stat">
            <h3 class="meta">"Observations"</h3>
            <p class="stat-value">{thousands(summary.rows)}</p>
          </div>
          <div class="card stat">
            <h3 class="meta">"Variables"</h3>
            <p class="stat-value">{summary.columns}</p>
          </div>
          <div class="card stat">
            <h3 class="meta">"Missing values"</h3>
            <p class="stat-value">{summary.missing_values}</p>
          </div>
          <div class="card stat">
            <h3 class="meta">"Completeness"</h3>
            <p class="stat-value">{format!("{completeness:.1}%")}</p>
          </div>
        </div>

        <div class="panel">
          <h2>"Data structure"</h2>
          <table>
            <thead>
              <tr>
                <th>"Variable"</th>
                <th>"Type"</th>
                <th>"Description"</th>
                <th>"Role"</th>
              </tr>
            </thead>
            <tbody>
              <For
                each=dataset_catalog::columns
                key=|col| col.name
                children=|col| {
                    let kind_class = match col.kind {
                        ColumnKind::Numeric => "badge num",
                        ColumnKind::Categorical => "badge cat",
                    };
                    let (role_class, role_label) = match col.role {
                        ColumnRole::Feature => ("badge feature", "Feature"),
                        ColumnRole::Target => ("badge target", "Target"),
                    };
                    let kind_label = match col.kind {
                        ColumnKind::Numeric => "Numeric",
                        ColumnKind::Categorical => "Categorical",
                    };
                    view! {
                      <tr>
                        <td class="mono">{col.name}</td>
                        <td><span class=kind_class>{kind_label}</span></td>
                        <td>{col.description}</td>
                        <td><span class=role_class>{role_label}</span></td>
                      </tr>
                    }
                }
              />
            </tbody>
          </table>
        </div>

        <div class="panel">
          <h2>"First rows of the dataset"</h2>
          <table class="compact">
            <thead>
              <tr>
                <th>"depth"</th>
                <th>"rock_type"</th>
                <th>"ph"</th>
                <th>"conductivity"</th>
                <th>"fault_distance"</th>
                <th>"humidity"</th>
                <th>"gold_grade"</th>
              </tr>
            </thead>
            <tbody>
              {dataset_catalog::sample_rows()
                  .into_iter()
                  .map(|row| view! {
                    <tr>
                      <td>{format!("{:.2}", row.depth)}</td>
                      <td>{row.rock_type}</td>
                      <td>{format!("{:.2}", row.ph)}</td>
                      <td>{format!("{:.2}", row.conductivity)}</td>
                      <td>{format!("{:.2}", row.fault_distance)}</td>
                      <td>{format!("{:.2}", row.humidity)}</td>
                      <td>{format!("{:.2}", row.gold_grade)}</td>
                    </tr>
                  })
                  .collect_view()}
            </tbody>
          </table>
        </div>
      </div>
    }
}
