use crate::layout::{BookletRequest, sheet_distribution};
use crate::types::*;

/// Calculate statistics for the imposition without building it
pub fn calculate_statistics(request: &BookletRequest) -> Result<ImpositionStatistics> {
    request.validate()?;

    let sheets = request.sheets();
    let sheets_per_signature = sheet_distribution(sheets, request.signatures);
    let pages_per_signature = sheets_per_signature
        .iter()
        .map(|&n| n * request.pages_per_sheet)
        .collect();

    Ok(ImpositionStatistics {
        pages: request.pages,
        pages_per_sheet: request.pages_per_sheet,
        sheets,
        signatures: request.signatures,
        sheets_per_signature,
        pages_per_signature,
        printed_faces: sheets * 2,
    })
}
