use forecast_pipeline::data::{DataLoader, Value};
use forecast_pipeline::{PipelineConfig, PipelineError};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_data_loader_from_csv() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,open,close,exchange").unwrap();
    writeln!(file, "2023-01-01,100.0,103.0,COMEX").unwrap();
    writeln!(file, "2023-01-02,103.0,,COMEX").unwrap();
    writeln!(file, "2023-01-03,106.0,108.0,NA").unwrap();

    let data = DataLoader::from_csv(file.path(), &PipelineConfig::default()).unwrap();

    assert_eq!(data.len(), 3);
    assert!(!data.is_empty());
    assert_eq!(data.columns(), ["date", "open", "close", "exchange"].map(String::from));
    assert_eq!(data.numeric_columns(), vec!["open".to_string(), "close".to_string()]);
    assert_eq!(data.missing_count(), 2);
    assert_eq!(data.value(1, "close"), Some(&Value::Missing));
    assert_eq!(
        data.value(0, "date"),
        Some(&Value::Text("2023-01-01".to_string()))
    );
    assert_eq!(
        data.numeric_values("close").unwrap(),
        vec![Some(103.0), None, Some(108.0)]
    );
}

#[test]
fn test_row_order_is_preserved() {
    let csv = "x\n3\n1\n2\n";
    let data = DataLoader::from_bytes(csv.as_bytes(), &PipelineConfig::default()).unwrap();

    assert_eq!(
        data.numeric_values("x").unwrap(),
        vec![Some(3.0), Some(1.0), Some(2.0)]
    );
}

#[test]
fn test_custom_delimiter() {
    let config = PipelineConfig {
        delimiter: ';',
        ..PipelineConfig::default()
    };
    let data = DataLoader::from_bytes(b"a;b\n1;2\n3;4\n", &config).unwrap();

    assert_eq!(data.numeric_columns().len(), 2);
}

#[test]
fn test_header_only_table_is_empty() {
    let data = DataLoader::from_bytes(b"price,volume\n", &PipelineConfig::default()).unwrap();

    assert!(data.is_empty());
    assert_eq!(data.columns().len(), 2);
}

#[test]
fn test_data_loader_error_handling() {
    let config = PipelineConfig::default();

    // Non-existent file
    assert!(matches!(
        DataLoader::from_csv("nonexistent_file.csv", &config),
        Err(PipelineError::IoError(_))
    ));

    // Empty upload
    assert!(matches!(
        DataLoader::from_bytes(b"", &config),
        Err(PipelineError::ParseError(_))
    ));

    // Ragged rows
    assert!(matches!(
        DataLoader::from_bytes(b"a,b\n1,2\n3\n", &config),
        Err(PipelineError::ParseError(_))
    ));

    // Invalid UTF-8
    assert!(matches!(
        DataLoader::from_bytes(b"a,b\n1,\xff\xfe\n", &config),
        Err(PipelineError::ParseError(_))
    ));

    // Duplicate header
    assert!(matches!(
        DataLoader::from_bytes(b"a,a\n1,2\n", &config),
        Err(PipelineError::ParseError(_))
    ));
}

#[test]
fn test_mixed_column_is_not_numeric() {
    let data =
        DataLoader::from_bytes(b"price\n1\nn/a\nclosed\n", &PipelineConfig::default()).unwrap();

    assert!(data.numeric_columns().is_empty());
    assert!(matches!(
        data.numeric_values("price"),
        Err(PipelineError::NonNumericColumn(_))
    ));
    assert!(matches!(
        data.numeric_values("volume"),
        Err(PipelineError::UnknownColumn(_))
    ));
}

#[test]
fn test_blank_header_is_named_by_position() {
    let csv = ",price,\n0,10.5,a\n1,11.0,b\n";
    let data = DataLoader::from_bytes(csv.as_bytes(), &PipelineConfig::default()).unwrap();

    assert_eq!(
        data.columns(),
        ["Unnamed: 0", "price", "Unnamed: 2"].map(String::from)
    );
    assert_eq!(
        data.numeric_columns(),
        vec!["Unnamed: 0".to_string(), "price".to_string()]
    );
}
