use booklet_impose::*;

#[test]
fn test_orientation_from_grid() {
    assert_eq!(Orientation::from_grid(1, 2), Orientation::Landscape);
    assert_eq!(Orientation::from_grid(2, 4), Orientation::Landscape);
    assert_eq!(Orientation::from_grid(2, 2), Orientation::Portrait);
    assert_eq!(Orientation::from_grid(1, 1), Orientation::Portrait);
    assert_eq!(Orientation::from_grid(3, 2), Orientation::Portrait);
}

#[test]
fn test_paper_size_names() {
    assert_eq!(PaperSize::A3.name(), "a3");
    assert_eq!(PaperSize::Letter.name(), "letter");
    assert_eq!(PaperSize::default(), PaperSize::A4);
}

#[test]
fn test_invalid_request_classification() {
    assert!(
        ImposeError::NonDivisiblePages {
            pages: 10,
            pages_per_sheet: 4
        }
        .is_invalid_request()
    );
    assert!(ImposeError::UnsupportedLayout(12).is_invalid_request());
    assert!(
        ImposeError::InvalidSignatureCount {
            signatures: 0,
            sheets: 4
        }
        .is_invalid_request()
    );
    assert!(!ImposeError::Config("bad".to_string()).is_invalid_request());
    assert!(!ImposeError::InvalidScheme("bad".to_string()).is_invalid_request());
}

#[test]
fn test_error_messages_name_the_numbers() {
    let err = ImposeError::NonDivisiblePages {
        pages: 10,
        pages_per_sheet: 4,
    };
    let msg = err.to_string();
    assert!(msg.contains("10 pages"));
    assert!(msg.contains("4 pages per sheet"));

    assert_eq!(
        ImposeError::UnsupportedLayout(12).to_string(),
        "No imposition scheme registered for 12 pages per sheet"
    );
}
