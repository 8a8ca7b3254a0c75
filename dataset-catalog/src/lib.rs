use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnRole {
    Feature,
    Target,
}

#[derive(Clone, Debug, Serialize)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
    pub description: &'static str,
    pub role: ColumnRole,
}

#[derive(Clone, Debug, Serialize)]
pub struct ColumnStats {
    pub name: &'static str,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct DatasetSummary {
    pub rows: u32,
    pub columns: u32,
    pub missing_values: u32,
    pub target: &'static str,
}

/// One borehole observation as shown in the Overview preview table.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SampleRow {
    pub depth: f64,
    pub rock_type: &'static str,
    pub ph: f64,
    pub conductivity: f64,
    pub fault_distance: f64,
    pub humidity: f64,
    pub gold_grade: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct FigureCaption {
    pub image: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
}

pub fn summary() -> DatasetSummary {
    DatasetSummary {
        rows: 5000,
        columns: 7,
        missing_values: 0,
        target: "gold_grade",
    }
}

/// Completeness in percent, as displayed on the Overview cards.
pub fn completeness(summary: &DatasetSummary) -> f64 {
    let cells = f64::from(summary.rows) * f64::from(summary.columns);
    (1.0 - f64::from(summary.missing_values) / cells) * 100.0
}

pub fn columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec {
            name: "depth",
            kind: ColumnKind::Numeric,
            description: "Extraction depth (m)",
            role: ColumnRole::Feature,
        },
        ColumnSpec {
            name: "ph",
            kind: ColumnKind::Numeric,
            description: "Soil pH level",
            role: ColumnRole::Feature,
        },
        ColumnSpec {
            name: "conductivity",
            kind: ColumnKind::Numeric,
            description: "Electrical conductivity",
            role: ColumnRole::Feature,
        },
        ColumnSpec {
            name: "fault_distance",
            kind: ColumnKind::Numeric,
            description: "Distance to the nearest fault (km)",
            role: ColumnRole::Feature,
        },
        ColumnSpec {
            name: "humidity",
            kind: ColumnKind::Numeric,
            description: "Humidity rate (%)",
            role: ColumnRole::Feature,
        },
        ColumnSpec {
            name: "rock_type",
            kind: ColumnKind::Categorical,
            description: "Rock formation type",
            role: ColumnRole::Feature,
        },
        ColumnSpec {
            name: "gold_grade",
            kind: ColumnKind::Numeric,
            description: "Gold concentration (g/t)",
            role: ColumnRole::Target,
        },
    ]
}

pub fn descriptive_stats() -> Vec<ColumnStats> {
    vec![
        ColumnStats { name: "depth", mean: 255.57, std_dev: 141.32, min: 10.09, max: 499.93 },
        ColumnStats { name: "ph", mean: 6.78, std_dev: 1.29, min: 4.50, max: 9.00 },
        ColumnStats { name: "conductivity", mean: 259.78, std_dev: 141.37, min: 10.02, max: 499.95 },
        ColumnStats { name: "fault_distance", mean: 491.85, std_dev: 284.94, min: 0.11, max: 999.70 },
        ColumnStats { name: "humidity", mean: 19.94, std_dev: 8.68, min: 5.00, max: 34.99 },
        ColumnStats { name: "gold_grade", mean: 7.02, std_dev: 6.22, min: 0.00, max: 27.15 },
    ]
}

pub fn sample_rows() -> Vec<SampleRow> {
    vec![
        SampleRow { depth: 32.64, rock_type: "Basalt", ph: 6.02, conductivity: 445.39, fault_distance: 892.75, humidity: 28.01, gold_grade: 2.7 },
        SampleRow { depth: 294.0, rock_type: "Granite", ph: 5.51, conductivity: 495.45, fault_distance: 276.99, humidity: 25.43, gold_grade: 17.96 },
        SampleRow { depth: 457.18, rock_type: "Schist", ph: 6.12, conductivity: 288.61, fault_distance: 242.14, humidity: 18.71, gold_grade: 13.45 },
        SampleRow { depth: 96.9, rock_type: "Schist", ph: 5.54, conductivity: 389.59, fault_distance: 869.57, humidity: 20.23, gold_grade: 0.7 },
        SampleRow { depth: 13.45, rock_type: "Granite", ph: 7.11, conductivity: 430.93, fault_distance: 625.4, humidity: 13.01, gold_grade: 3.82 },
        SampleRow { depth: 404.69, rock_type: "Limestone", ph: 8.09, conductivity: 353.48, fault_distance: 1.45, humidity: 7.23, gold_grade: 18.05 },
        SampleRow { depth: 47.63, rock_type: "Basalt", ph: 8.04, conductivity: 31.64, fault_distance: 353.13, humidity: 14.93, gold_grade: 0.0 },
        SampleRow { depth: 212.72, rock_type: "Gabbro", ph: 6.14, conductivity: 87.24, fault_distance: 857.86, humidity: 19.87, gold_grade: 0.0 },
        SampleRow { depth: 342.65, rock_type: "Schist", ph: 8.95, conductivity: 44.78, fault_distance: 27.32, humidity: 6.72, gold_grade: 6.46 },
        SampleRow { depth: 126.03, rock_type: "Gabbro", ph: 7.17, conductivity: 14.84, fault_distance: 3.25, humidity: 7.65, gold_grade: 5.89 },
        SampleRow { depth: 51.14, rock_type: "Granite", ph: 6.3, conductivity: 159.94, fault_distance: 281.26, humidity: 12.89, gold_grade: 2.64 },
        SampleRow { depth: 387.31, rock_type: "Gabbro", ph: 8.26, conductivity: 202.25, fault_distance: 914.0, humidity: 16.01, gold_grade: 0.0 },
        SampleRow { depth: 318.79, rock_type: "Gabbro", ph: 7.78, conductivity: 128.1, fault_distance: 901.48, humidity: 16.8, gold_grade: 0.0 },
        SampleRow { depth: 494.36, rock_type: "Basalt", ph: 7.87, conductivity: 41.66, fault_distance: 518.76, humidity: 8.54, gold_grade: 0.0 },
        SampleRow { depth: 178.71, rock_type: "Granite", ph: 5.38, conductivity: 269.63, fault_distance: 553.24, humidity: 11.77, gold_grade: 2.35 },
        SampleRow { depth: 40.26, rock_type: "Gabbro", ph: 6.61, conductivity: 143.93, fault_distance: 332.01, humidity: 12.85, gold_grade: 2.9 },
        SampleRow { depth: 369.83, rock_type: "Schist", ph: 8.38, conductivity: 400.06, fault_distance: 243.74, humidity: 7.03, gold_grade: 12.8 },
    ]
}

pub fn figure_captions() -> Vec<FigureCaption> {
    vec![
        FigureCaption {
            image: "/Boxplots.png",
            title: "Boxplots of the main variables",
            caption: "Boxplots show the spread, median and extreme values of each variable. \
                      They expose outliers and measurement variability, which matters for \
                      spotting bias or anomalies in the mining data.",
        },
        FigureCaption {
            image: "/Pairplot.png",
            title: "Pairplot of the variables",
            caption: "The pairplot crosses every variable with the others to surface \
                      correlations, trends and clusters. It is the main tool for spotting \
                      linear or non-linear relationships between geological parameters.",
        },
        FigureCaption {
            image: "/distributions.png",
            title: "Variable distributions",
            caption: "Shows the shape of each variable's distribution (symmetry, kurtosis, \
                      long tails). Useful for choosing transformations and anticipating \
                      their impact on the predictive models.",
        },
        FigureCaption {
            image: "/matrice_correlation.png",
            title: "Correlation matrix",
            caption: "Summarises the linear relationships between all variables. High \
                      coefficients flag strong dependencies, useful for feature selection \
                      and for understanding geochemical interactions.",
        },
        FigureCaption {
            image: "/teneur_moyenne.png",
            title: "Mean gold grade per group",
            caption: "Compares the mean gold grade across groups (rock type, depth band). \
                      Highlights the geological conditions most favourable to high grades, \
                      guiding exploration strategy.",
        },
    ]
}

/// Exploratory takeaways shown under the figures in the Analysis section.
pub fn exploratory_findings() -> Vec<&'static str> {
    vec![
        "depth and fault_distance show high variability, suggesting heterogeneous \
         geological environments.",
        "Marked correlations between some variables point to shared geochemical \
         processes or subsoil structure effects.",
        "The gold grade distribution is skewed, with a few exceptionally high values \
         typical of mining deposits.",
        "The visualisations reveal distinct data groups, opening the door to \
         segmentation or clustering analyses.",
    ]
}

/// Sanity check on the fixed schema: exactly one target column, no duplicate
/// names, and stats only for numeric columns.
pub fn check_schema(columns: &[ColumnSpec], stats: &[ColumnStats]) -> Result<(), String> {
    let targets = columns
        .iter()
        .filter(|c| c.role == ColumnRole::Target)
        .count();
    if targets != 1 {
        return Err(format!("expected exactly one target column, found {targets}"));
    }

    for (i, col) in columns.iter().enumerate() {
        if columns[..i].iter().any(|c| c.name == col.name) {
            return Err(format!("duplicate column '{}'", col.name));
        }
    }

    for stat in stats {
        let Some(col) = columns.iter().find(|c| c.name == stat.name) else {
            return Err(format!("stats for unknown column '{}'", stat.name));
        };
        if col.kind != ColumnKind::Numeric {
            return Err(format!("stats for non-numeric column '{}'", stat.name));
        }
        if stat.min > stat.max {
            return Err(format!("min > max for column '{}'", stat.name));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_schema_passes_check() {
        check_schema(&columns(), &descriptive_stats()).expect("schema");
    }

    #[test]
    fn schema_check_rejects_duplicate_column() {
        let mut cols = columns();
        cols.push(ColumnSpec {
            name: "depth",
            kind: ColumnKind::Numeric,
            description: "duplicate",
            role: ColumnRole::Feature,
        });
        let err = check_schema(&cols, &[]).expect_err("duplicate");
        assert!(err.contains("duplicate"));
    }

    #[test]
    fn schema_check_rejects_missing_target() {
        let cols: Vec<ColumnSpec> = columns()
            .into_iter()
            .filter(|c| c.role != ColumnRole::Target)
            .collect();
        assert!(check_schema(&cols, &[]).is_err());
    }

    #[test]
    fn schema_check_rejects_stats_for_categorical() {
        let stats = vec![ColumnStats {
            name: "rock_type",
            mean: 0.0,
            std_dev: 0.0,
            min: 0.0,
            max: 0.0,
        }];
        let err = check_schema(&columns(), &stats).expect_err("categorical");
        assert!(err.contains("non-numeric"));
    }

    #[test]
    fn complete_dataset_reports_full_completeness() {
        let s = summary();
        assert_eq!(completeness(&s), 100.0);
    }

    #[test]
    fn preview_rows_stay_within_observed_ranges() {
        let stats = descriptive_stats();
        let depth = stats.iter().find(|s| s.name == "depth").expect("depth");
        for row in sample_rows() {
            assert!(row.depth >= depth.min && row.depth <= depth.max);
        }
    }

    #[test]
    fn seventeen_preview_rows() {
        assert_eq!(sample_rows().len(), 17);
    }

    #[test]
    fn schema_serializes_for_export() {
        let json = serde_json::to_value(columns()).expect("serialize");
        assert_eq!(json.as_array().map(Vec::len), Some(7));
    }
}
