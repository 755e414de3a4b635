//! Projection of a sheet onto its two printed faces
//!
//! The first half of a sheet's positions is face 1, the second half face 2.
//! Each face is filled row-major. Rows alternate between leaf-down and
//! leaf-up; the leaf-down rows end up upside down once the sheet is folded,
//! with the bottom row always leaf-up.

use crate::scheme::{FaceLayout, SchemeTable};
use crate::types::*;

use super::{Booklet, Sheet};

/// Which way a printed row faces after folding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LeafDirection {
    /// Printed upright
    Up,
    /// Printed rotated 180°
    Down,
}

impl LeafDirection {
    /// Direction of row `row` on a face with `rows` rows
    pub fn for_row(row: usize, rows: usize) -> Self {
        if row % 2 == rows % 2 {
            LeafDirection::Down
        } else {
            LeafDirection::Up
        }
    }

    /// CSS class used by the HTML renderer
    pub fn class_name(self) -> &'static str {
        match self {
            LeafDirection::Up => "leaf-up",
            LeafDirection::Down => "leaf-down",
        }
    }

    pub fn is_down(self) -> bool {
        self == LeafDirection::Down
    }
}

/// One row of a printed face
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProjectedRow {
    pub direction: LeafDirection,
    /// Page numbers left to right (None = empty position)
    pub cells: Vec<Option<usize>>,
}

/// One printed face of a sheet
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProjectedFace {
    pub layout: FaceLayout,
    pub orientation: Orientation,
    /// Rows top to bottom
    pub rows: Vec<ProjectedRow>,
}

impl ProjectedFace {
    /// Page at (row, col), if the cell holds one
    pub fn cell(&self, row: usize, col: usize) -> Option<usize> {
        self.rows.get(row)?.cells.get(col).copied().flatten()
    }
}

/// Both faces of a sheet
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProjectedSheet {
    pub front: ProjectedFace,
    pub back: ProjectedFace,
}

impl ProjectedSheet {
    pub fn faces(&self) -> [&ProjectedFace; 2] {
        [&self.front, &self.back]
    }
}

/// Project `sheet` onto two faces of shape `layout`.
///
/// `sheet.len()` is expected to equal `layout.capacity()`; any missing
/// position projects as an empty cell.
pub fn project_sheet(sheet: &Sheet, layout: FaceLayout) -> ProjectedSheet {
    debug_assert_eq!(sheet.len(), layout.capacity());

    ProjectedSheet {
        front: project_face(sheet, layout, 0),
        back: project_face(sheet, layout, layout.cell_count()),
    }
}

fn project_face(sheet: &Sheet, layout: FaceLayout, offset: usize) -> ProjectedFace {
    let rows = (0..layout.rows)
        .map(|r| ProjectedRow {
            direction: LeafDirection::for_row(r, layout.rows),
            cells: (0..layout.cols)
                .map(|c| sheet.page_at(offset + c + r * layout.cols))
                .collect(),
        })
        .collect();

    ProjectedFace {
        layout,
        orientation: layout.orientation(),
        rows,
    }
}

/// Project every sheet of a booklet, grouped by signature.
///
/// The layout of each sheet is looked up by the sheet's length.
pub fn project_booklet(booklet: &Booklet, table: &SchemeTable) -> Result<Vec<Vec<ProjectedSheet>>> {
    let mut projected = Vec::with_capacity(booklet.signature_count());

    for sig in booklet.signatures() {
        let mut sheets = Vec::with_capacity(sig.sheet_count());
        for sheet in sig.sheets() {
            let layout = table.get(sheet.len())?.layout();
            sheets.push(project_sheet(sheet, layout));
        }
        projected.push(sheets);
    }

    Ok(projected)
}
