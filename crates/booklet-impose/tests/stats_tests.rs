use booklet_impose::*;

fn request(pages: usize, pages_per_sheet: usize, signatures: usize) -> BookletRequest {
    BookletRequest::new(pages, pages_per_sheet, signatures, false, &SchemeTable::builtin()).unwrap()
}

#[test]
fn test_stats_single_signature() {
    let stats = calculate_statistics(&request(16, 4, 1)).unwrap();

    assert_eq!(stats.pages, 16);
    assert_eq!(stats.pages_per_sheet, 4);
    assert_eq!(stats.sheets, 4);
    assert_eq!(stats.signatures, 1);
    assert_eq!(stats.sheets_per_signature, vec![4]);
    assert_eq!(stats.pages_per_signature, vec![16]);
    // 4 sheets * 2 faces
    assert_eq!(stats.printed_faces, 8);
}

#[test]
fn test_stats_uneven_signatures() {
    // 80 pages / 8 per sheet = 10 sheets over 4 signatures
    let stats = calculate_statistics(&request(80, 8, 4)).unwrap();

    assert_eq!(stats.sheets, 10);
    assert_eq!(stats.sheets_per_signature, vec![3, 3, 2, 2]);
    assert_eq!(stats.pages_per_signature, vec![24, 24, 16, 16]);
    assert_eq!(stats.printed_faces, 20);
}

#[test]
fn test_stats_match_built_booklet() {
    let req = request(96, 16, 4);
    let stats = calculate_statistics(&req).unwrap();
    let booklet = make_booklet(&req).unwrap();

    let sheets: Vec<usize> = booklet
        .signatures()
        .iter()
        .map(Signature::sheet_count)
        .collect();
    let pages: Vec<usize> = booklet
        .signatures()
        .iter()
        .map(Signature::page_count)
        .collect();

    assert_eq!(stats.sheets_per_signature, sheets);
    assert_eq!(stats.pages_per_signature, pages);
    assert_eq!(stats.sheets, booklet.sheet_count());
}

#[test]
fn test_stats_rejects_invalid_request() {
    let result = calculate_statistics(&request(12, 8, 1));
    assert!(matches!(result, Err(ImposeError::NonDivisiblePages { .. })));
}
