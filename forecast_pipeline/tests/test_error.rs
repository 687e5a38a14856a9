use forecast_pipeline::{PipelineError, Severity};
use std::io;

#[test]
fn test_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    assert!(matches!(
        PipelineError::from(io_error),
        PipelineError::IoError(_)
    ));

    let math_error = series_math::MathError::InvalidInput("window".to_string());
    assert!(matches!(
        PipelineError::from(math_error),
        PipelineError::MathError(_)
    ));

    let json_error = serde_json::from_str::<u32>("oops").unwrap_err();
    assert!(matches!(
        PipelineError::from(json_error),
        PipelineError::ConfigError(_)
    ));
}

#[test]
fn test_csv_error_becomes_parse_error() {
    let mut reader = csv::ReaderBuilder::new().from_reader(&b"a,b\n1\n"[..]);
    let csv_error = reader.records().next().unwrap().unwrap_err();

    assert!(matches!(
        PipelineError::from(csv_error),
        PipelineError::ParseError(_)
    ));
}

#[test]
fn test_error_display() {
    let error = PipelineError::InsufficientFeatures { selected: 1 };
    assert_eq!(
        error.to_string(),
        "Please select at least one feature and a target (1 selected)"
    );

    let error = PipelineError::ShapeMismatch {
        expected: 2,
        actual: 3,
    };
    assert!(error.to_string().contains("expected 2"));

    let error = PipelineError::from(io::Error::new(
        io::ErrorKind::PermissionDenied,
        "permission denied",
    ));
    assert!(error.to_string().contains("IO error"));
    assert!(error.to_string().contains("permission denied"));
}

#[test]
fn test_severity() {
    assert_eq!(
        PipelineError::InsufficientFeatures { selected: 0 }.severity(),
        Severity::Warning
    );
    assert_eq!(
        PipelineError::ParseError("bad".to_string()).severity(),
        Severity::Error
    );
    assert_eq!(PipelineError::NoDataset.severity(), Severity::Error);
}
