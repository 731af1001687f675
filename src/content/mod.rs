//! Hard-coded paper content rendered by the views.

mod citation;
mod results;
mod sections;

pub use citation::{ ARXIV_ID, BIBTEX, PAPER_TITLE };
pub use results::{
    application_results,
    baseline_results,
    decoupled_results,
    ApplicationRow,
    BaselineRow,
    DecoupledRow,
    Flag,
};
pub use sections::Section;
