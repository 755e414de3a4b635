//! Layout calculation modules for imposition
//!
//! This module handles the combinatorial side of imposition:
//! - Signature distribution (how many sheets each signature gets)
//! - Signature building (which page lands on which sheet position)
//! - Face projection (how positions map onto the printed grid)

mod distribute;
mod projection;
mod signature;
mod types;

pub use distribute::*;
pub use projection::*;
pub use signature::*;
pub use types::*;
