use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ModelName {
    LinearRegression,
    RandomForest,
    MlpRegressor,
    XgBoost,
}

impl ModelName {
    pub const ALL: [ModelName; 4] = [
        ModelName::LinearRegression,
        ModelName::RandomForest,
        ModelName::MlpRegressor,
        ModelName::XgBoost,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ModelName::LinearRegression => "Linear Regression",
            ModelName::RandomForest => "Random Forest",
            ModelName::MlpRegressor => "MLP Regressor",
            ModelName::XgBoost => "XGBoost",
        }
    }
}

/// Metrics recorded for one model on the held-out split. Constant lookup,
/// never computed here.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    pub r2: f64,
    pub rmse: f64,
    pub mae: f64,
    pub train_seconds: f64,
}

pub fn performance(model: ModelName) -> Performance {
    match model {
        ModelName::LinearRegression => Performance {
            r2: 0.9272,
            rmse: 1.68,
            mae: 1.27,
            train_seconds: 0.12,
        },
        ModelName::RandomForest => Performance {
            r2: 0.9802,
            rmse: 0.87,
            mae: 0.64,
            train_seconds: 2.45,
        },
        ModelName::MlpRegressor => Performance {
            r2: 0.9979,
            rmse: 0.28,
            mae: 0.22,
            train_seconds: 8.32,
        },
        ModelName::XgBoost => Performance {
            r2: 0.989,
            rmse: 0.65,
            mae: 0.52,
            train_seconds: 3.21,
        },
    }
}

/// All four models ordered by goodness of fit, best first. Stable sort so
/// the order is deterministic even if two scores ever tie.
pub fn ranking() -> Vec<(ModelName, Performance)> {
    let mut ranked: Vec<(ModelName, Performance)> = ModelName::ALL
        .iter()
        .map(|&m| (m, performance(m)))
        .collect();
    ranked.sort_by(|a, b| b.1.r2.total_cmp(&a.1.r2));
    ranked
}

pub fn best_model() -> ModelName {
    ranking()[0].0
}

pub fn fastest_model() -> ModelName {
    let mut fastest = ModelName::ALL[0];
    for &m in &ModelName::ALL[1..] {
        if performance(m).train_seconds < performance(fastest).train_seconds {
            fastest = m;
        }
    }
    fastest
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricKind {
    R2,
    Rmse,
    Mae,
}

impl MetricKind {
    pub const ALL: [MetricKind; 3] = [MetricKind::R2, MetricKind::Rmse, MetricKind::Mae];

    pub fn label(self) -> &'static str {
        match self {
            MetricKind::R2 => "R²",
            MetricKind::Rmse => "RMSE",
            MetricKind::Mae => "MAE",
        }
    }

    pub fn value(self, perf: &Performance) -> f64 {
        match self {
            MetricKind::R2 => perf.r2,
            MetricKind::Rmse => perf.rmse,
            MetricKind::Mae => perf.mae,
        }
    }
}

/// Bar width for the comparison charts. Error metrics are inverted so that
/// longer always means better.
pub fn metric_bar_percent(metric: MetricKind, perf: &Performance) -> f64 {
    let fraction = match metric {
        MetricKind::R2 => perf.r2,
        MetricKind::Rmse => 1.0 - perf.rmse / 3.0,
        MetricKind::Mae => 1.0 - perf.mae / 2.5,
    };
    (fraction * 100.0).clamp(0.0, 100.0)
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct MetricReading {
    pub metric: &'static str,
    pub value: &'static str,
    pub reading: &'static str,
}

/// Fixed interpretive block shown once a model's result is revealed.
#[derive(Clone, Debug, Serialize)]
pub struct Interpretation {
    pub heading: &'static str,
    pub metrics: [MetricReading; 3],
    pub takeaways: Vec<&'static str>,
}

pub fn interpretation(model: ModelName) -> Interpretation {
    match model {
        ModelName::LinearRegression => Interpretation {
            heading: "Reading the results — Linear Regression",
            metrics: [
                MetricReading {
                    metric: "MAE (Mean Absolute Error)",
                    value: "1.27",
                    reading: "On average the model is off by 1.27 g/t",
                },
                MetricReading {
                    metric: "RMSE (Root Mean Squared Error)",
                    value: "1.68",
                    reading: "Large errors are only mildly penalised",
                },
                MetricReading {
                    metric: "R² (coefficient of determination)",
                    value: "0.9272",
                    reading: "The model explains 92.7% of the gold grade variance",
                },
            ],
            takeaways: vec![
                "The model predicts the gold grade very well on this data.",
                "An R² above 0.9 is usually considered excellent for a model as \
                 simple as linear regression.",
                "RMSE is close to MAE, so there are no extreme errors.",
            ],
        },
        ModelName::RandomForest => Interpretation {
            heading: "Reading the results — Random Forest",
            metrics: [
                MetricReading {
                    metric: "MAE (Mean Absolute Error)",
                    value: "0.64",
                    reading: "On average the model is off by 0.64 g/t",
                },
                MetricReading {
                    metric: "RMSE (Root Mean Squared Error)",
                    value: "0.87",
                    reading: "Large errors are rare",
                },
                MetricReading {
                    metric: "R² (coefficient of determination)",
                    value: "0.9802",
                    reading: "The model explains 98.02% of the gold grade variance",
                },
            ],
            takeaways: vec![
                "The Random Forest predicts the gold grade extremely well.",
                "An R² of 0.98 is near-perfect, showing a remarkable ability to \
                 capture the relationships between variables.",
                "The very low MAE (0.64) means a tiny average error, excellent in \
                 a mining context.",
                "RMSE is close to MAE, indicating few extreme errors.",
                "A strong candidate to deploy behind a prediction app.",
            ],
        },
        ModelName::MlpRegressor => Interpretation {
            heading: "Reading the results — MLP Regressor",
            metrics: [
                MetricReading {
                    metric: "MAE (Mean Absolute Error)",
                    value: "0.22",
                    reading: "On average the model is off by 0.22 g/t",
                },
                MetricReading {
                    metric: "RMSE (Root Mean Squared Error)",
                    value: "0.28",
                    reading: "Extreme errors are almost nonexistent",
                },
                MetricReading {
                    metric: "R² (coefficient of determination)",
                    value: "0.9979",
                    reading: "The model explains 99.79% of the gold grade variance",
                },
            ],
            takeaways: vec![
                "The MLP Regressor performs exceptionally, even better than the \
                 Random Forest.",
                "An R² of 0.9979 means the model captures almost all of the \
                 target's variance.",
                "The very low MAE (0.22) makes average errors negligible.",
                "RMSE below 0.3 indicates very stable predictions, with no drift \
                 or sudden error.",
                "Ideal for a reliable predictive application, though harder to \
                 explain than RF or LR (black box).",
            ],
        },
        ModelName::XgBoost => Interpretation {
            heading: "Reading the results — XGBoost",
            metrics: [
                MetricReading {
                    metric: "MAE (Mean Absolute Error)",
                    value: "0.52",
                    reading: "On average the model is off by 0.52 g/t",
                },
                MetricReading {
                    metric: "RMSE (Root Mean Squared Error)",
                    value: "0.65",
                    reading: "Low squared errors, predictions are stable",
                },
                MetricReading {
                    metric: "R² (coefficient of determination)",
                    value: "0.989",
                    reading: "The model explains 98.9% of the gold grade variance",
                },
            ],
            takeaways: vec![
                "XGBoost performs very well, better than linear regression and \
                 close to the Random Forest.",
                "An R² of 0.989 is an excellent indicator of generalisation.",
                "An MAE of 0.52 keeps average errors low enough for field use.",
                "Its RMSE of 0.65, lower than RF's, also points to high precision \
                 without large misses.",
                "Robust, fast and accurate, a good fit for production.",
            ],
        },
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub model: ModelName,
    pub body: &'static str,
    pub tone: &'static str,
}

/// Analysis cards for the Comparison section. Which model is best and which
/// is fastest is derived from the table, not hardcoded.
pub fn highlights() -> Vec<Highlight> {
    vec![
        Highlight {
            title: "Best model",
            model: best_model(),
            body: "By far the strongest performer, with an R² of 0.9979 and the \
                   lowest errors (RMSE 0.28 / MAE 0.22). Ideal for a precise \
                   predictive solution, even if it is a black box.",
            tone: "tone-purple",
        },
        Highlight {
            title: "Fastest to train",
            model: fastest_model(),
            body: "The simplest model to train. Acceptable results (R² 0.9272) \
                   but well below the others. Useful for a quick interpretable \
                   read, not optimal for prediction.",
            tone: "tone-blue",
        },
        Highlight {
            title: "Best compromise",
            model: ModelName::XgBoost,
            body: "An excellent R² (0.989) with low errors (RMSE 0.65, MAE 0.52). \
                   A very good balance of performance, speed and robustness.",
            tone: "tone-yellow",
        },
        Highlight {
            title: "Robust choice",
            model: ModelName::RandomForest,
            body: "Also very strong (R² 0.9802), a little behind XGBoost and the \
                   MLP. A good pick for a stable, interpretable solution with \
                   feature importances.",
            tone: "tone-green",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking_orders_by_goodness_of_fit() {
        let ranked = ranking();
        let order: Vec<ModelName> = ranked.iter().map(|(m, _)| *m).collect();
        assert_eq!(
            order,
            vec![
                ModelName::MlpRegressor,
                ModelName::XgBoost,
                ModelName::RandomForest,
                ModelName::LinearRegression,
            ]
        );
        let scores: Vec<f64> = ranked.iter().map(|(_, p)| p.r2).collect();
        assert_eq!(scores, vec![0.9979, 0.989, 0.9802, 0.9272]);
    }

    #[test]
    fn best_and_fastest_are_derived_from_the_table() {
        assert_eq!(best_model(), ModelName::MlpRegressor);
        assert_eq!(fastest_model(), ModelName::LinearRegression);
    }

    #[test]
    fn bar_percentages_stay_in_range() {
        for &model in &ModelName::ALL {
            let perf = performance(model);
            for &metric in &MetricKind::ALL {
                let pct = metric_bar_percent(metric, &perf);
                assert!((0.0..=100.0).contains(&pct), "{model:?} {metric:?}: {pct}");
            }
        }
    }

    #[test]
    fn better_fit_gets_the_longer_bar() {
        let mlp = performance(ModelName::MlpRegressor);
        let linear = performance(ModelName::LinearRegression);
        for &metric in &MetricKind::ALL {
            assert!(metric_bar_percent(metric, &mlp) > metric_bar_percent(metric, &linear));
        }
    }

    #[test]
    fn every_model_has_an_interpretation() {
        for &model in &ModelName::ALL {
            let interp = interpretation(model);
            assert!(!interp.heading.is_empty());
            assert!(!interp.takeaways.is_empty());
            let r2 = interp.metrics[2]
                .value
                .parse::<f64>()
                .expect("r2 value parses");
            assert_eq!(r2, performance(model).r2);
        }
    }
}
