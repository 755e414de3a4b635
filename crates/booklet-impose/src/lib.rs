mod booklet;
pub mod chunk;
pub mod layout;
pub mod math;
mod options;
pub mod plan;
pub mod render;
pub mod scheme;
mod stats;
mod types;

pub use booklet::make_booklet;
pub use chunk::chunk;
pub use layout::{
    Booklet, BookletRequest, LeafDirection, ProjectedFace, ProjectedRow, ProjectedSheet, Sheet,
    Signature, SignatureRequest, build_signature, distribute, project_booklet, project_sheet,
};
pub use options::*;
pub use plan::{BindingLimits, BindingPlan, BindingStyle, PlanRequest, plan_binding};
pub use render::{render_html, render_text};
pub use scheme::{FaceLayout, ImpositionScheme, SchemeTable};
pub use stats::calculate_statistics;
pub use types::*;
