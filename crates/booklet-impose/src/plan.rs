//! Binding planner
//!
//! Chooses a signature count for a binding style, given how many sheets the
//! binder can handle. Everything is derived from the `PlanRequest`; nothing is
//! remembered between calls.

use crate::layout::BookletRequest;
use crate::math::next_multiple;
use crate::scheme::SchemeTable;
use crate::types::*;

/// How the signatures are bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BindingStyle {
    /// Every sheet is its own signature, glued at the spine
    Perfect,
    /// A single signature, nested and stitched through the fold
    #[default]
    Saddle,
    /// Several multi-sheet signatures sewn together
    Mixed,
}

/// Physical limits of the binder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BindingLimits {
    /// Most paper layers that can be bound into one signature
    pub max_bindable_sheets: usize,
    /// Most paper layers that can be folded at once
    pub max_foldable_layers: usize,
}

impl Default for BindingLimits {
    fn default() -> Self {
        Self {
            max_bindable_sheets: 32,
            max_foldable_layers: 8,
        }
    }
}

/// Input to the planner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    /// Requested page count; rounded up to whole sheets
    pub pages: usize,
    pub pages_per_sheet: usize,
    pub fold_together: bool,
    pub style: BindingStyle,
    pub limits: BindingLimits,
    /// Keep this many sheets per signature (mixed binding only)
    pub locked_sheets_per_signature: Option<usize>,
    /// Keep this many signatures (mixed binding only)
    pub locked_signatures: Option<usize>,
}

impl PlanRequest {
    pub fn new(pages: usize, pages_per_sheet: usize, style: BindingStyle) -> Self {
        Self {
            pages,
            pages_per_sheet,
            fold_together: false,
            style,
            limits: BindingLimits::default(),
            locked_sheets_per_signature: None,
            locked_signatures: None,
        }
    }
}

/// Outcome of planning
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BindingPlan {
    /// Style actually used (2-up sheets can only be perfect bound)
    pub style: BindingStyle,
    /// Page count rounded up to whole sheets
    pub pages: usize,
    pub pages_per_sheet: usize,
    pub sheets: usize,
    pub signatures: usize,
    /// Target sheets per signature
    pub sheets_per_signature: usize,
    /// Largest signature the binder can handle
    pub max_sheets_per_signature: usize,
    pub fold_together: bool,
    /// More sheets per signature than the binder can handle
    pub overfull: bool,
}

impl BindingPlan {
    /// Booklet request carrying out this plan
    pub fn to_request(&self, table: &SchemeTable) -> Result<BookletRequest> {
        BookletRequest::new(
            self.pages,
            self.pages_per_sheet,
            self.signatures,
            self.fold_together,
            table,
        )
    }
}

/// Largest number of sheets one signature may hold.
///
/// Each sheet is `ceil(pages_per_sheet / 4)` layers thick once folded. Sheets
/// folded together are also capped at `max_foldable_layers / 2^folds`, where a
/// sheet of `n` pages takes `ceil(log2(n)) - 1` folds. Never less than one.
pub fn max_sheets_per_signature(
    pages_per_sheet: usize,
    fold_together: bool,
    limits: &BindingLimits,
) -> usize {
    let layers = pages_per_sheet.div_ceil(4).max(1);
    let mut max_sheets = limits.max_bindable_sheets / layers;

    if fold_together {
        // ceil(log2(n)) - 1
        let folds = pages_per_sheet
            .next_power_of_two()
            .trailing_zeros()
            .saturating_sub(1);
        let fold_limit = limits.max_foldable_layers.checked_shr(folds).unwrap_or(0);
        max_sheets = max_sheets.min(fold_limit);
    }

    max_sheets.max(1)
}

/// Choose signature and sheet counts for a binding style
pub fn plan_binding(request: &PlanRequest, table: &SchemeTable) -> Result<BindingPlan> {
    let pages_per_sheet = request.pages_per_sheet;
    if !table.contains(pages_per_sheet) {
        return Err(ImposeError::UnsupportedLayout(pages_per_sheet));
    }

    let pages = next_multiple(pages_per_sheet, request.pages.max(pages_per_sheet));
    let sheets = pages / pages_per_sheet;

    let style = if pages_per_sheet == 2 {
        BindingStyle::Perfect
    } else {
        request.style
    };

    let fold_together = request.fold_together && style != BindingStyle::Perfect;
    let max_sheets = max_sheets_per_signature(pages_per_sheet, fold_together, &request.limits);

    let (sheets_per_signature, signatures) = match style {
        BindingStyle::Perfect => (1, sheets),
        BindingStyle::Saddle => (max_sheets, 1),
        BindingStyle::Mixed => {
            let per_signature = request
                .locked_sheets_per_signature
                .unwrap_or(max_sheets.div_ceil(2))
                .clamp(1, max_sheets);
            let signatures = request
                .locked_signatures
                .unwrap_or(sheets.div_ceil(per_signature))
                .clamp(1, sheets);
            (per_signature, signatures)
        }
    };

    let overfull = signatures < sheets.div_ceil(sheets_per_signature);
    if overfull {
        log::warn!(
            "{} sheets in {} signatures exceeds {} sheets per signature",
            sheets,
            signatures,
            sheets_per_signature
        );
    }

    Ok(BindingPlan {
        style,
        pages,
        pages_per_sheet,
        sheets,
        signatures,
        sheets_per_signature,
        max_sheets_per_signature: max_sheets,
        fold_together,
        overfull,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits(max_bindable_sheets: usize, max_foldable_layers: usize) -> BindingLimits {
        BindingLimits {
            max_bindable_sheets,
            max_foldable_layers,
        }
    }

    #[test]
    fn test_max_sheets_by_layers() {
        let l = limits(16, 8);
        assert_eq!(max_sheets_per_signature(2, false, &l), 16);
        assert_eq!(max_sheets_per_signature(4, false, &l), 16);
        assert_eq!(max_sheets_per_signature(8, false, &l), 8);
        assert_eq!(max_sheets_per_signature(16, false, &l), 4);
    }

    #[test]
    fn test_max_sheets_folded_together() {
        let l = limits(16, 8);
        // folio: 8 / 2
        assert_eq!(max_sheets_per_signature(4, true, &l), 4);
        // quarto: 8 / 4
        assert_eq!(max_sheets_per_signature(8, true, &l), 2);
        // octavo: 8 / 8
        assert_eq!(max_sheets_per_signature(16, true, &l), 1);
        // 2-up takes no extra fold
        assert_eq!(max_sheets_per_signature(2, true, &l), 8);
    }

    #[test]
    fn test_default_limits() {
        let l = BindingLimits::default();
        assert_eq!(l.max_bindable_sheets, 32);
        assert_eq!(l.max_foldable_layers, 8);
        assert_eq!(PlanRequest::new(16, 4, BindingStyle::Saddle).limits, l);
    }

    #[test]
    fn test_max_sheets_never_zero() {
        assert_eq!(max_sheets_per_signature(16, true, &limits(1, 1)), 1);
    }

    #[test]
    fn test_perfect_binding_one_sheet_each() {
        let plan = plan_binding(
            &PlanRequest::new(30, 4, BindingStyle::Perfect),
            &SchemeTable::builtin(),
        )
        .unwrap();
        assert_eq!(plan.pages, 32);
        assert_eq!(plan.sheets, 8);
        assert_eq!(plan.signatures, 8);
        assert_eq!(plan.sheets_per_signature, 1);
        assert!(!plan.fold_together);
        assert!(!plan.overfull);
    }

    #[test]
    fn test_two_up_forces_perfect() {
        let mut request = PlanRequest::new(10, 2, BindingStyle::Saddle);
        request.fold_together = true;
        let plan = plan_binding(&request, &SchemeTable::builtin()).unwrap();
        assert_eq!(plan.style, BindingStyle::Perfect);
        assert_eq!(plan.signatures, 5);
        assert!(!plan.fold_together);
    }

    #[test]
    fn test_saddle_single_signature() {
        let plan = plan_binding(
            &PlanRequest::new(40, 4, BindingStyle::Saddle),
            &SchemeTable::builtin(),
        )
        .unwrap();
        assert_eq!(plan.signatures, 1);
        assert_eq!(plan.sheets, 10);
        assert!(!plan.overfull);

        let plan = plan_binding(
            &PlanRequest::new(200, 4, BindingStyle::Saddle),
            &SchemeTable::builtin(),
        )
        .unwrap();
        assert_eq!(plan.sheets, 50);
        assert!(plan.overfull);
    }

    #[test]
    fn test_mixed_defaults_to_half_capacity() {
        let plan = plan_binding(
            &PlanRequest::new(80, 4, BindingStyle::Mixed),
            &SchemeTable::builtin(),
        )
        .unwrap();
        // 20 sheets, max 32 per signature, target 16
        assert_eq!(plan.sheets, 20);
        assert_eq!(plan.max_sheets_per_signature, 32);
        assert_eq!(plan.sheets_per_signature, 16);
        assert_eq!(plan.signatures, 2);
        assert!(!plan.overfull);
    }

    #[test]
    fn test_mixed_respects_locks() {
        let mut request = PlanRequest::new(80, 4, BindingStyle::Mixed);
        request.locked_sheets_per_signature = Some(5);
        let plan = plan_binding(&request, &SchemeTable::builtin()).unwrap();
        assert_eq!(plan.sheets_per_signature, 5);
        assert_eq!(plan.signatures, 4);

        request.locked_signatures = Some(2);
        let plan = plan_binding(&request, &SchemeTable::builtin()).unwrap();
        assert_eq!(plan.signatures, 2);
        assert!(plan.overfull);

        request.locked_signatures = Some(100);
        let plan = plan_binding(&request, &SchemeTable::builtin()).unwrap();
        assert_eq!(plan.signatures, 20);
    }

    #[test]
    fn test_mixed_locked_sheets_capped_at_binder_limit() {
        let mut request = PlanRequest::new(80, 4, BindingStyle::Mixed);
        request.limits = limits(16, 8);
        request.locked_sheets_per_signature = Some(50);
        let plan = plan_binding(&request, &SchemeTable::builtin()).unwrap();

        assert_eq!(plan.max_sheets_per_signature, 16);
        assert_eq!(plan.sheets_per_signature, 16);
        assert_eq!(plan.signatures, 2);
        assert!(!plan.overfull);

        // Locking the signature count too low still reports the overflow
        request.locked_signatures = Some(1);
        let plan = plan_binding(&request, &SchemeTable::builtin()).unwrap();
        assert_eq!(plan.sheets_per_signature, 16);
        assert!(plan.overfull);
    }

    #[test]
    fn test_plan_rounds_small_page_counts_up() {
        let plan = plan_binding(
            &PlanRequest::new(0, 8, BindingStyle::Saddle),
            &SchemeTable::builtin(),
        )
        .unwrap();
        assert_eq!(plan.pages, 8);
        assert_eq!(plan.sheets, 1);
    }

    #[test]
    fn test_plan_rejects_unknown_layout() {
        assert!(matches!(
            plan_binding(
                &PlanRequest::new(24, 12, BindingStyle::Saddle),
                &SchemeTable::builtin()
            ),
            Err(ImposeError::UnsupportedLayout(12))
        ));
    }

    #[test]
    fn test_plan_to_request_is_valid() {
        let table = SchemeTable::builtin();
        for style in [BindingStyle::Perfect, BindingStyle::Saddle, BindingStyle::Mixed] {
            let plan = plan_binding(&PlanRequest::new(50, 8, style), &table).unwrap();
            let request = plan.to_request(&table).unwrap();
            assert!(request.validate().is_ok(), "{:?}", style);
        }
    }
}
