//! Splitting a booklet's sheets across its signatures

use crate::types::*;

use super::{BookletRequest, SignatureRequest};

/// Sheet count of each signature when `sheets` are spread over `signatures`.
///
/// Counts differ by at most one; the surplus goes to the earliest signatures.
/// For example 10 sheets over 4 signatures gives `[3, 3, 2, 2]`.
pub fn sheet_distribution(sheets: usize, signatures: usize) -> Vec<usize> {
    if signatures == 0 {
        return Vec::new();
    }

    let q = sheets / signatures;
    let r = sheets % signatures;

    (0..signatures).map(|i| if i < r { q + 1 } else { q }).collect()
}

/// Partition a booklet request into per-signature requests.
///
/// Each signature's offset is the number of pages assigned to the signatures
/// before it.
pub fn distribute(request: &BookletRequest) -> Result<Vec<SignatureRequest>> {
    request.validate()?;

    let mut offset = 0;
    let requests: Vec<SignatureRequest> =
        sheet_distribution(request.sheets(), request.signatures)
            .into_iter()
            .map(|sheets| {
                let pages = sheets * request.pages_per_sheet;
                let sig = SignatureRequest {
                    pages,
                    pages_per_sheet: request.pages_per_sheet,
                    offset,
                    fold_together: request.fold_together,
                    scheme: request.scheme.clone(),
                };
                offset += pages;
                sig
            })
            .collect();

    log::debug!(
        "Distributed {} sheets over {} signatures: {:?}",
        request.sheets(),
        request.signatures,
        requests.iter().map(SignatureRequest::sheets).collect::<Vec<_>>()
    );

    Ok(requests)
}
