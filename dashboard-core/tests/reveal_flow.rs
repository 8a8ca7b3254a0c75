use dashboard_core::models::{self, ModelName};
use dashboard_core::reveal::RevealBoard;
use dashboard_core::section::{Navigation, Section};

#[test]
fn viewer_walks_every_section_and_reveals_every_model() {
    let mut nav = Navigation::new();
    assert_eq!(nav.active(), Section::Introduction);

    for &section in &Section::ALL {
        nav.select(section);
        assert_eq!(nav.active(), section);
    }

    nav.select(Section::Training);
    let mut board = RevealBoard::new();

    // Ranked order, each reveal waiting for the previous one to finish.
    for (model, _) in models::ranking() {
        let pending = board.begin(model).expect("board idle");
        assert!(board.is_busy());
        assert!(board.begin(model).is_none());
        board.complete(pending);
        assert!(!board.is_busy());
        assert!(board.is_revealed(model));
    }

    assert!(board.all_revealed());

    nav.select(Section::Comparison);
    let ranked = models::ranking();
    assert_eq!(ranked[0].0, ModelName::MlpRegressor);
    assert_eq!(ranked[3].0, ModelName::LinearRegression);
}

#[test]
fn interpretations_quote_the_recorded_metrics() {
    for (model, perf) in models::ranking() {
        let interp = models::interpretation(model);
        let quoted_mae: f64 = interp.metrics[0].value.parse().expect("mae");
        let quoted_rmse: f64 = interp.metrics[1].value.parse().expect("rmse");
        assert_eq!(quoted_mae, perf.mae);
        assert_eq!(quoted_rmse, perf.rmse);
    }
}
