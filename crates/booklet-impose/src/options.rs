use crate::layout::BookletRequest;
use crate::scheme::SchemeTable;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Booklet configuration as entered by a user or read from a file
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookletOptions {
    /// Total logical pages
    pub pages: usize,

    // Sheet and signature configuration
    pub pages_per_sheet: usize,
    pub signatures: usize,
    pub fold_together: bool,

    // Rendering
    pub paper_size: PaperSize,
}

impl Default for BookletOptions {
    fn default() -> Self {
        Self {
            pages: 16,
            pages_per_sheet: 4,
            signatures: 1,
            fold_together: false,
            paper_size: PaperSize::A4,
        }
    }
}

impl BookletOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ImposeError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ImposeError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Booklet request for these options, using the scheme from `table`
    pub fn to_request(&self, table: &SchemeTable) -> Result<BookletRequest> {
        BookletRequest::new(
            self.pages,
            self.pages_per_sheet,
            self.signatures,
            self.fold_together,
            table,
        )
    }

    /// Validate the options against `table`
    pub fn validate(&self, table: &SchemeTable) -> Result<()> {
        self.to_request(table)?.validate()
    }
}
