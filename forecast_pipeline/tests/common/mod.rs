#![allow(dead_code)]

use forecast_pipeline::{DataLoader, Dataset, PipelineConfig};

/// Ten-row linear ramp `price = 1..=10`
pub fn price_ramp() -> Dataset {
    Dataset::from_numeric_columns(vec![("price", (1..=10).map(|v| Some(v as f64)).collect())])
        .unwrap()
}

/// Small commodity table with a date column and two numeric columns
pub fn commodity_table() -> Dataset {
    let csv = "\
date,gold,silver
2024-01-01,2010.5,23.1
2024-01-02,2015.0,23.4
2024-01-03,2021.2,23.2
2024-01-04,2018.7,23.9
2024-01-05,2030.1,24.3
2024-01-06,2027.4,24.1
2024-01-07,2035.9,24.6
2024-01-08,2041.3,24.4
2024-01-09,2038.8,24.9
2024-01-10,2046.0,25.2
2024-01-11,2052.7,25.0
2024-01-12,2049.1,25.6
2024-01-13,2058.4,25.9
2024-01-14,2061.0,25.7
2024-01-15,2066.2,26.1
";
    DataLoader::from_bytes(csv.as_bytes(), &PipelineConfig::default()).unwrap()
}
