//! Imposition schemes and the table that holds them
//!
//! A scheme describes one sheet capacity: the face grid shape and the order in
//! which sheet positions receive pages. Positions are numbered row-major, face 1
//! first, then face 2:
//!
//! ```text
//! quarto (2 rows x 2 cols)
//!   face 1        face 2
//! +---+---+     +---+---+
//! | 0 | 1 |     | 4 | 5 |
//! +---+---+     +---+---+
//! | 2 | 3 |     | 6 | 7 |
//! +---+---+     +---+---+
//! ```
//!
//! `order[k]` is the position that receives the (k+1)-th page when the
//! signature is a single sheet.

use std::collections::BTreeMap;

use crate::types::*;

/// Shape of one printed face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FaceLayout {
    pub rows: usize,
    pub cols: usize,
}

impl FaceLayout {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of cells on one face
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Number of positions on a sheet (both faces)
    pub fn capacity(&self) -> usize {
        self.cell_count() * 2
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_grid(self.rows, self.cols)
    }
}

/// Placement order and face layout for one pages-per-sheet value
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawScheme")
)]
pub struct ImpositionScheme {
    pub(crate) order: Vec<usize>,
    pub(crate) layout: FaceLayout,
}

impl ImpositionScheme {
    /// Build a scheme, checking that `order` is a permutation of every
    /// position on a sheet of the given layout.
    pub fn new(order: Vec<usize>, layout: FaceLayout) -> Result<Self> {
        if layout.rows == 0 || layout.cols == 0 {
            return Err(ImposeError::InvalidScheme(format!(
                "layout {}x{} has no cells",
                layout.rows, layout.cols
            )));
        }

        let capacity = layout.capacity();
        if order.len() != capacity {
            return Err(ImposeError::InvalidScheme(format!(
                "order has {} positions but a {}x{} layout holds {}",
                order.len(),
                layout.rows,
                layout.cols,
                capacity
            )));
        }

        let mut seen = vec![false; capacity];
        for &position in &order {
            match seen.get_mut(position) {
                Some(slot) if !*slot => *slot = true,
                Some(_) => {
                    return Err(ImposeError::InvalidScheme(format!(
                        "position {} appears more than once",
                        position
                    )));
                }
                None => {
                    return Err(ImposeError::InvalidScheme(format!(
                        "position {} is outside 0..{}",
                        position, capacity
                    )));
                }
            }
        }

        Ok(Self { order, layout })
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn layout(&self) -> FaceLayout {
        self.layout
    }

    /// Pages carried by one sheet
    pub fn pages_per_sheet(&self) -> usize {
        self.order.len()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawScheme {
    order: Vec<usize>,
    layout: FaceLayout,
}

#[cfg(feature = "serde")]
impl TryFrom<RawScheme> for ImpositionScheme {
    type Error = ImposeError;

    fn try_from(raw: RawScheme) -> Result<Self> {
        ImpositionScheme::new(raw.order, raw.layout)
    }
}

// =============================================================================
// Scheme Table
// =============================================================================

/// Read-only lookup of schemes keyed by pages per sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeTable {
    schemes: BTreeMap<usize, ImpositionScheme>,
}

impl Default for SchemeTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SchemeTable {
    /// Table with no schemes registered
    pub fn empty() -> Self {
        Self {
            schemes: BTreeMap::new(),
        }
    }

    /// The standard 2-up, folio, quarto and octavo schemes
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for (order, rows, cols) in builtin_schemes() {
            // Built-in data is known to be consistent
            table.schemes.insert(
                order.len(),
                ImpositionScheme {
                    order,
                    layout: FaceLayout::new(rows, cols),
                },
            );
        }
        table
    }

    /// Register a scheme under its own capacity, replacing any previous one
    pub fn insert(&mut self, scheme: ImpositionScheme) -> Option<ImpositionScheme> {
        self.schemes.insert(scheme.pages_per_sheet(), scheme)
    }

    /// Look up the scheme for `pages_per_sheet`
    pub fn get(&self, pages_per_sheet: usize) -> Result<&ImpositionScheme> {
        self.schemes
            .get(&pages_per_sheet)
            .ok_or(ImposeError::UnsupportedLayout(pages_per_sheet))
    }

    pub fn contains(&self, pages_per_sheet: usize) -> bool {
        self.schemes.contains_key(&pages_per_sheet)
    }

    /// Registered pages-per-sheet values in ascending order
    pub fn pages_per_sheet_values(&self) -> Vec<usize> {
        self.schemes.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &ImpositionScheme)> {
        self.schemes.iter().map(|(&k, v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Parse a table from JSON, validating every entry.
    ///
    /// The expected shape is an object keyed by pages per sheet:
    /// `{"4": {"order": [1, 2, 3, 0], "layout": {"rows": 1, "cols": 2}}}`
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<usize, ImpositionScheme> = serde_json::from_str(json)
            .map_err(|e| ImposeError::InvalidScheme(format!("Failed to parse table: {}", e)))?;

        for (&key, scheme) in &raw {
            if key != scheme.pages_per_sheet() {
                return Err(ImposeError::InvalidScheme(format!(
                    "entry {} describes a sheet of {} pages",
                    key,
                    scheme.pages_per_sheet()
                )));
            }
        }

        Ok(Self { schemes: raw })
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.schemes)
            .map_err(|e| ImposeError::Config(format!("Failed to serialize table: {}", e)))
    }

    /// Load a table from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = tokio::fs::read_to_string(path).await?;
        let table = Self::from_json(&json)?;
        log::debug!(
            "Loaded scheme table with {} entries: {:?}",
            table.len(),
            table.pages_per_sheet_values()
        );
        Ok(table)
    }
}

/// (order, rows, cols) for each built-in scheme
fn builtin_schemes() -> Vec<(Vec<usize>, usize, usize)> {
    vec![
        // 2-up: one page per face
        (vec![0, 1], 1, 1),
        // Folio: face 1 [4, 1], face 2 [2, 3]
        (vec![1, 2, 3, 0], 1, 2),
        // Quarto: face 1 [5↓, 4↓ / 8, 1], face 2 [3↓, 6↓ / 2, 7]
        (vec![3, 6, 4, 1, 0, 5, 7, 2], 2, 2),
        // Octavo: face 1 [5↓, 12↓, 9↓, 8↓ / 4, 13, 16, 1],
        //         face 2 [7↓, 10↓, 11↓, 6↓ / 2, 15, 14, 3]
        (
            vec![7, 12, 15, 4, 0, 11, 8, 3, 2, 9, 10, 1, 5, 14, 13, 6],
            2,
            4,
        ),
    ]
}
