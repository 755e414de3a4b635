//! Layout data types for imposition
//!
//! These are plain values produced top-down: a booklet owns its signatures,
//! a signature owns its sheets, a sheet owns its slots.

use crate::scheme::{ImpositionScheme, SchemeTable};
use crate::types::*;

/// One physical sheet: a slot per position, holding a 1-based page number.
///
/// A slot stays `None` only when no placement group covers its position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sheet {
    slots: Vec<Option<usize>>,
}

impl Sheet {
    /// A sheet with `capacity` empty slots
    pub(crate) fn empty(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub(crate) fn place(&mut self, position: usize, page: usize) {
        self.slots[position] = Some(page);
    }

    pub fn slots(&self) -> &[Option<usize>] {
        &self.slots
    }

    /// Page at `position`, if any
    pub fn page_at(&self, position: usize) -> Option<usize> {
        self.slots.get(position).copied().flatten()
    }

    /// Number of positions (both faces)
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Placed page numbers in position order
    pub fn pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().filter_map(|slot| *slot)
    }

    /// Whether every position received a page
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}

/// Sheets folded and collated as one unit, in collation order
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Signature {
    sheets: Vec<Sheet>,
}

impl Signature {
    pub(crate) fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Total placed pages across all sheets
    pub fn page_count(&self) -> usize {
        self.sheets.iter().map(|sheet| sheet.pages().count()).sum()
    }
}

/// Signatures in binding order
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Booklet {
    signatures: Vec<Signature>,
}

impl Booklet {
    pub(crate) fn new(signatures: Vec<Signature>) -> Self {
        Self { signatures }
    }

    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    pub fn signature_count(&self) -> usize {
        self.signatures.len()
    }

    pub fn sheet_count(&self) -> usize {
        self.signatures.iter().map(Signature::sheet_count).sum()
    }

    /// All sheets of the booklet in binding order
    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> + '_ {
        self.signatures.iter().flat_map(|sig| sig.sheets().iter())
    }
}

/// One signature's share of a booklet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureRequest {
    /// Pages in this signature
    pub pages: usize,
    pub pages_per_sheet: usize,
    /// Pages already placed by earlier signatures
    pub offset: usize,
    pub fold_together: bool,
    pub scheme: ImpositionScheme,
}

impl SignatureRequest {
    /// Sheets in this signature (only meaningful once validated)
    pub fn sheets(&self) -> usize {
        self.pages / self.pages_per_sheet
    }

    /// Check that the scheme fits sheets of `pages_per_sheet` positions
    pub fn validate(&self) -> Result<()> {
        if self.pages_per_sheet == 0 || self.scheme.layout().capacity() != self.pages_per_sheet {
            return Err(ImposeError::UnsupportedLayout(self.pages_per_sheet));
        }

        if self.pages % self.pages_per_sheet != 0 {
            return Err(ImposeError::NonDivisiblePages {
                pages: self.pages,
                pages_per_sheet: self.pages_per_sheet,
            });
        }

        if let Some(&position) = self
            .scheme
            .order()
            .iter()
            .find(|&&position| position >= self.pages_per_sheet)
        {
            return Err(ImposeError::InvalidScheme(format!(
                "position {} is outside 0..{}",
                position, self.pages_per_sheet
            )));
        }

        Ok(())
    }
}

/// A whole booklet to impose
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookletRequest {
    /// Total logical pages
    pub pages: usize,
    pub pages_per_sheet: usize,
    /// Number of signatures to split the sheets into
    pub signatures: usize,
    /// Nest the sheets of each signature inside one another before folding
    pub fold_together: bool,
    pub scheme: ImpositionScheme,
}

impl BookletRequest {
    /// Build a request, taking the scheme for `pages_per_sheet` from `table`
    pub fn new(
        pages: usize,
        pages_per_sheet: usize,
        signatures: usize,
        fold_together: bool,
        table: &SchemeTable,
    ) -> Result<Self> {
        let scheme = table.get(pages_per_sheet)?.clone();
        Ok(Self {
            pages,
            pages_per_sheet,
            signatures,
            fold_together,
            scheme,
        })
    }

    /// Total physical sheets (only meaningful once validated)
    pub fn sheets(&self) -> usize {
        self.pages / self.pages_per_sheet
    }

    /// Check the request before any computation
    pub fn validate(&self) -> Result<()> {
        if self.pages_per_sheet == 0 || self.scheme.pages_per_sheet() != self.pages_per_sheet {
            return Err(ImposeError::UnsupportedLayout(self.pages_per_sheet));
        }

        if self.pages % self.pages_per_sheet != 0 {
            return Err(ImposeError::NonDivisiblePages {
                pages: self.pages,
                pages_per_sheet: self.pages_per_sheet,
            });
        }

        let sheets = self.sheets();
        if self.signatures == 0 || self.signatures > sheets {
            return Err(ImposeError::InvalidSignatureCount {
                signatures: self.signatures,
                sheets,
            });
        }

        Ok(())
    }
}
