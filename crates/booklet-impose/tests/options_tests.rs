use booklet_impose::*;

#[test]
fn test_default_options_are_valid() {
    let options = BookletOptions::default();
    assert!(options.validate(&SchemeTable::builtin()).is_ok());
}

#[test]
fn test_validation_reports_request_errors() {
    let table = SchemeTable::builtin();
    let mut options = BookletOptions::default();

    options.pages = 18;
    assert!(matches!(
        options.validate(&table),
        Err(ImposeError::NonDivisiblePages { .. })
    ));

    options.pages = 24;
    options.pages_per_sheet = 6;
    assert!(matches!(
        options.validate(&table),
        Err(ImposeError::UnsupportedLayout(6))
    ));

    options.pages_per_sheet = 8;
    options.signatures = 4;
    assert!(matches!(
        options.validate(&table),
        Err(ImposeError::InvalidSignatureCount {
            signatures: 4,
            sheets: 3
        })
    ));

    options.signatures = 3;
    assert!(options.validate(&table).is_ok());
}

#[test]
fn test_to_request_uses_table_scheme() {
    let table = SchemeTable::builtin();
    let options = BookletOptions {
        pages: 32,
        pages_per_sheet: 16,
        signatures: 2,
        fold_together: true,
        ..Default::default()
    };

    let request = options.to_request(&table).unwrap();
    assert_eq!(request.scheme, *table.get(16).unwrap());
    assert_eq!(request.sheets(), 2);
    assert!(request.fold_together);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = BookletOptions {
        pages: 64,
        pages_per_sheet: 8,
        signatures: 2,
        fold_together: true,
        paper_size: PaperSize::Letter,
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    // Save
    options.save(path).await.unwrap();

    // Load
    let loaded = BookletOptions::load(path).await.unwrap();
    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_options_fills_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), r#"{"pages": 40, "fold_together": true}"#).unwrap();

    let loaded = BookletOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.pages, 40);
    assert!(loaded.fold_together);
    assert_eq!(loaded.pages_per_sheet, 4);
    assert_eq!(loaded.signatures, 1);
    assert_eq!(loaded.paper_size, PaperSize::A4);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_malformed_options() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "{ not json").unwrap();

    match BookletOptions::load(temp_file.path()).await {
        Err(ImposeError::Config(msg)) => assert!(msg.contains("Failed to parse config")),
        _ => panic!("Expected Config error"),
    }
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_missing_file() {
    let result = BookletOptions::load("/nonexistent/booklet.json").await;
    assert!(matches!(result, Err(ImposeError::Io(_))));
}
