use crate::layout::{Booklet, BookletRequest, build_signature, distribute};
use crate::types::*;

/// Impose a whole booklet.
///
/// The request is validated first; a rejected request produces no partial
/// output. Signatures are returned in binding order.
pub fn make_booklet(request: &BookletRequest) -> Result<Booklet> {
    let signatures = distribute(request).inspect_err(|e| {
        log::warn!("Rejected booklet request: {}", e);
    })?;

    let signatures = signatures
        .iter()
        .map(build_signature)
        .collect::<Result<Vec<_>>>()?;
    let booklet = Booklet::new(signatures);

    log::debug!(
        "Imposed {} pages onto {} sheets in {} signatures",
        request.pages,
        booklet.sheet_count(),
        booklet.signature_count()
    );

    Ok(booklet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::SchemeTable;

    #[test]
    fn test_make_booklet_preserves_signature_order() {
        let request = BookletRequest::new(24, 4, 2, true, &SchemeTable::builtin()).unwrap();
        let booklet = make_booklet(&request).unwrap();

        assert_eq!(booklet.signature_count(), 2);
        let first_max = booklet.signatures()[0]
            .sheets()
            .iter()
            .flat_map(|s| s.pages())
            .max()
            .unwrap();
        let second_min = booklet.signatures()[1]
            .sheets()
            .iter()
            .flat_map(|s| s.pages())
            .min()
            .unwrap();
        assert_eq!(first_max, 12);
        assert_eq!(second_min, 13);
    }

    #[test]
    fn test_make_booklet_rejects_unsupported_scheme() {
        let mut request = BookletRequest::new(16, 4, 1, false, &SchemeTable::builtin()).unwrap();
        request.pages_per_sheet = 8;
        assert!(matches!(
            make_booklet(&request),
            Err(ImposeError::UnsupportedLayout(8))
        ));
    }
}
