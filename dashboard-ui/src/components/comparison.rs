use dashboard_core::models::{self, MetricKind};
use leptos::*;

fn rank_class(index: usize) -> &'static str {
    match index {
        0 => "rank rank-gold",
        1 => "rank rank-silver",
        2 => "rank rank-bronze",
        _ => "rank",
    }
}

#[component]
pub fn Comparison() -> impl IntoView {
    let ranked = models::ranking();

    view! {
      <div class="section accent-pink">
        <h1>"Comparative Study of the Models"</h1>

        <div class="panel">
          <h2>"Performance Ranking"</h2>
          <div class="ranking">
            {ranked
                .into_iter()
                .enumerate()
                .map(|(index, (model, perf))| view! {
                  <div class="row spread ranked">
                    <div class="row">
                      <span class=rank_class(index)>{index + 1}</span>
                      <span class="model-name">{model.label()}</span>
                    </div>
                    <div class="row metrics meta">
                      <span>"R²: " <b>{format!("{:.3}", perf.r2)}</b></span>
                      <span>"RMSE: " <b>{format!("{:.2}", perf.rmse)}</b></span>
                      <span>"Time: " <b>{format!("{:.2}s", perf.train_seconds)}</b></span>
                    </div>
                  </div>
                })
                .collect_view()}
          </div>
        </div>

        <div class="columns">
          <div class="panel">
            <h3>"Performance Metrics"</h3>
            {MetricKind::ALL
                .into_iter()
                .map(|metric| view! {
                  <div class="metric-group">
                    <span class="meta">{metric.label()}</span>
                    {models::ranking()
                        .into_iter()
                        .map(|(model, perf)| {
                            let width = models::metric_bar_percent(metric, &perf);
                            view! {
                              <div class="row">
                                <span class="bar-label meta">{model.label()}</span>
                                <div class="bar-track">
                                  <div
                                    class="bar-fill"
                                    style:width=format!("{width:.1}%")
                                  ></div>
                                </div>
                                <span class="mono">
                                  {format!("{:.3}", metric.value(&perf))}
                                </span>
                              </div>
                            }
                        })
                        .collect_view()}
                  </div>
                })
                .collect_view()}
          </div>

          <div class="panel">
            <h3>"Result Analysis"</h3>
            {models::highlights()
                .into_iter()
                .map(|card| view! {
                  <div class=format!("card highlight {}", card.tone)>
                    <h4>{card.title} " — " {card.model.label()}</h4>
                    <p class="meta">{card.body}</p>
                  </div>
                })
                .collect_view()}
          </div>
        </div>
      </div>
    }
}
