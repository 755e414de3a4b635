use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error(
        "Cannot make a booklet of {pages} pages with {pages_per_sheet} pages per sheet: \
         the number of pages is not divisible by the number of pages per sheet"
    )]
    NonDivisiblePages { pages: usize, pages_per_sheet: usize },
    #[error("No imposition scheme registered for {0} pages per sheet")]
    UnsupportedLayout(usize),
    #[error("Cannot split {sheets} sheets into {signatures} signatures")]
    InvalidSignatureCount { signatures: usize, sheets: usize },
    #[error("Invalid imposition scheme: {0}")]
    InvalidScheme(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

impl ImposeError {
    /// Whether the error rejects the request itself (as opposed to I/O or
    /// configuration failures around it).
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            ImposeError::NonDivisiblePages { .. }
                | ImposeError::UnsupportedLayout(_)
                | ImposeError::InvalidSignatureCount { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// Orientation of one printed face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: the face grid has at least as many rows as columns
    #[default]
    Portrait,
    /// Landscape: the face grid has more columns than rows
    Landscape,
}

impl Orientation {
    /// Orientation of a `rows x cols` face grid
    pub fn from_grid(rows: usize, cols: usize) -> Self {
        if cols > rows {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// Short tag used by the HTML renderer
    pub fn tag(self) -> &'static str {
        match self {
            Orientation::Portrait => "v",
            Orientation::Landscape => "h",
        }
    }
}

/// Paper sizes known to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

impl PaperSize {
    /// Lowercase name, used as the CSS size class
    pub fn name(self) -> &'static str {
        match self {
            PaperSize::A3 => "a3",
            PaperSize::A4 => "a4",
            PaperSize::A5 => "a5",
            PaperSize::Letter => "letter",
            PaperSize::Legal => "legal",
            PaperSize::Tabloid => "tabloid",
        }
    }
}

/// Statistics about the imposition
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ImpositionStatistics {
    /// Total number of logical pages
    pub pages: usize,
    /// Pages carried by one sheet (both faces)
    pub pages_per_sheet: usize,
    /// Total number of physical sheets
    pub sheets: usize,
    /// Number of signatures
    pub signatures: usize,
    /// Sheet count of each signature, in binding order
    pub sheets_per_signature: Vec<usize>,
    /// Page count of each signature, in binding order
    pub pages_per_signature: Vec<usize>,
    /// Printed faces (two per sheet)
    pub printed_faces: usize,
}
