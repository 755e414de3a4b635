//! Page placement within one signature
//!
//! Pages are laid down in groups of sheet positions taken from the scheme's
//! order. Each group is applied to every sheet of the signature before the
//! next group starts, and the sheet traversal direction flips between groups:
//!
//! ```text
//! folio, 4 sheets, groups [1, 2] and [3, 0]
//!
//!   group 0 (forward):  sheet 0 <- 1, 2   sheet 1 <- 3, 4   ...  sheet 3 <- 7, 8
//!   group 1 (backward): sheet 3 <- 9, 10  sheet 2 <- 11, 12 ...  sheet 0 <- 15, 16
//! ```
//!
//! Once the sheets are nested and folded, this zigzag keeps consecutive pages
//! on consecutive leaves.

use crate::chunk::chunk;
use crate::types::*;

use super::{Sheet, Signature, SignatureRequest};

/// Positions placed per sheet before moving to the next sheet.
///
/// Sheets folded together advance two positions at a time; sheets folded
/// separately take half a sheet at a time.
pub fn group_size(pages_per_sheet: usize, fold_together: bool) -> usize {
    if fold_together {
        2
    } else {
        (pages_per_sheet / 2).max(2)
    }
}

/// Sheet visited at step `step` of group `group` when there are `sheets` sheets.
///
/// Even groups walk the sheets forward, odd groups walk them backward.
pub fn sheet_for_step(group: usize, step: usize, sheets: usize) -> usize {
    if group % 2 == 0 {
        step
    } else {
        sheets - 1 - step
    }
}

/// Place consecutive page numbers, starting after `request.offset`, onto the
/// sheets of one signature.
///
/// Fails if the request's scheme does not fit its sheet size.
pub fn build_signature(request: &SignatureRequest) -> Result<Signature> {
    request.validate()?;

    let sheet_count = request.sheets();
    let mut sheets: Vec<Sheet> = (0..sheet_count)
        .map(|_| Sheet::empty(request.pages_per_sheet))
        .collect();

    let groups = chunk(
        request.scheme.order(),
        group_size(request.pages_per_sheet, request.fold_together),
    );

    let mut page = request.offset;

    for (j, group) in groups.iter().enumerate() {
        for i in 0..sheet_count {
            let sheet = &mut sheets[sheet_for_step(j, i, sheet_count)];
            for &position in group {
                page += 1;
                sheet.place(position, page);
            }
        }
    }

    log::debug!(
        "Built signature of {} sheets, pages {}..={}",
        sheet_count,
        request.offset + 1,
        page
    );

    Ok(Signature::new(sheets))
}
