mod common;

use approx::assert_relative_eq;
use forecast_pipeline::models::{LinearRegression, RegressionModel, TrainedRegressionModel};
use forecast_pipeline::{
    train, Dataset, FeatureSelection, FeatureTable, ModelFrame, PipelineConfig, PipelineError,
    Severity,
};

fn ramp_frame(selection: &[&str]) -> ModelFrame {
    let table =
        FeatureTable::from_dataset(&common::price_ramp(), &PipelineConfig::default()).unwrap();
    ModelFrame::from_selection(&table, &FeatureSelection::new(selection.to_vec())).unwrap()
}

#[test]
fn test_frame_drops_incomplete_rows() {
    let frame = ramp_frame(&["price_ma5", "price_lag1", "price"]);

    assert_eq!(frame.len(), 6);
    assert_eq!(frame.predictors(), ["price_ma5", "price_lag1"].map(String::from));
    assert_eq!(frame.target(), "price");
    assert_eq!(frame.x()[0], vec![3.0, 4.0]);
    assert_eq!(frame.y()[0], 5.0);
    assert_eq!(frame.last_predictor_row(), Some(&[8.0, 9.0][..]));
}

#[test]
fn test_lag_model_learns_unit_step() {
    let frame = ramp_frame(&["price_lag1", "price"]);
    let model = LinearRegression::new().fit(&frame).unwrap();

    assert_relative_eq!(model.coefficients()[0], 1.0, epsilon = 1e-9);
    assert_relative_eq!(model.intercept(), 1.0, epsilon = 1e-9);
    assert_relative_eq!(model.predict_one(&[20.0]).unwrap(), 21.0, epsilon = 1e-9);
    assert_eq!(TrainedRegressionModel::name(&model), "Linear Regression");
}

#[test]
fn test_predict_checks_shape() {
    let frame = ramp_frame(&["price_lag1", "price"]);
    let model = LinearRegression::new().fit(&frame).unwrap();

    assert!(matches!(
        model.predict(&[vec![1.0, 2.0]]),
        Err(PipelineError::ShapeMismatch {
            expected: 1,
            actual: 2
        })
    ));
    assert_eq!(model.predict(&[vec![1.0], vec![2.0]]).unwrap().len(), 2);
}

#[test]
fn test_collinear_default_selection_still_fits() {
    let data = common::price_ramp();
    let config = PipelineConfig::default();
    let selection = FeatureTable::from_dataset(&data, &config)
        .unwrap()
        .default_selection();

    // price, price_ma5 and price_lag1 are all affine in each other on a ramp
    let model = train(&data, &selection, &config).unwrap();
    let frame = ramp_frame(&["price", "price_ma5", "price_lag1"]);

    assert_eq!(model.target(), "price_lag1");
    for (row, actual) in frame.x().iter().zip(frame.y()) {
        assert_relative_eq!(model.predict_one(row).unwrap(), *actual, epsilon = 1e-8);
    }
}

#[test]
fn test_train_on_ramp() {
    let model = train(
        &common::price_ramp(),
        &FeatureSelection::new(["price_lag1", "price"]),
        &PipelineConfig::default(),
    )
    .unwrap();

    assert_eq!(model.predictors(), ["price_lag1".to_string()]);
    assert_relative_eq!(model.coefficients()[0], 1.0, epsilon = 1e-9);
    assert_relative_eq!(model.intercept(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_train_needs_two_features() {
    let result = train(
        &common::price_ramp(),
        &FeatureSelection::new(["price"]),
        &PipelineConfig::default(),
    );

    match result {
        Err(err @ PipelineError::InsufficientFeatures { selected: 1 }) => {
            assert_eq!(err.severity(), Severity::Warning)
        }
        other => panic!("expected InsufficientFeatures, got {:?}", other),
    }
}

#[test]
fn test_train_rejects_unknown_feature() {
    let result = train(
        &common::price_ramp(),
        &FeatureSelection::new(["volume", "price"]),
        &PipelineConfig::default(),
    );

    assert!(matches!(result, Err(PipelineError::UnknownFeature(name)) if name == "volume"));
}

#[test]
fn test_train_without_complete_rows() {
    let data = Dataset::from_numeric_columns(vec![
        ("x", vec![Some(1.0), None, Some(3.0)]),
        ("y", vec![None, Some(2.0), None]),
    ])
    .unwrap();

    let result = train(
        &data,
        &FeatureSelection::new(["x", "y"]),
        &PipelineConfig::default(),
    );

    assert!(matches!(result, Err(PipelineError::InsufficientData(_))));
}

#[test]
fn test_price_next_to_volume_keeps_its_weight() {
    let volume: Vec<Option<f64>> = (0..40)
        .map(|i| Some(5.0e6 + 2.0e6 * (i as f64 * 0.9).sin()))
        .collect();
    let price: Vec<Option<f64>> = (0..40)
        .map(|i| Some(3.0 + 2.0 * (i % 7) as f64 / 6.0 + 0.01 * (i as f64 * 1.7).cos()))
        .collect();
    let settle: Vec<Option<f64>> = price.iter().map(|p| p.map(|p| 10.0 * p + 1.0)).collect();
    let data = Dataset::from_numeric_columns(vec![
        ("volume", volume),
        ("price", price),
        ("settle", settle),
    ])
    .unwrap();

    let model = train(
        &data,
        &FeatureSelection::new(["volume", "price", "settle"]),
        &PipelineConfig::default(),
    )
    .unwrap();

    assert_eq!(model.rank(), 2);
    assert_relative_eq!(model.coefficients()[1], 10.0, epsilon = 1e-6);
    assert_relative_eq!(model.intercept(), 1.0, epsilon = 1e-4);
    assert_relative_eq!(model.predict_one(&[4.0e6, 4.0]).unwrap(), 41.0, epsilon = 1e-4);
}
