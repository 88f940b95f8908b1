//! Record selection: the participant filter used by every analytic, and the `user:`/`since:`/
//! `until:` expression language for narrowing a chat before analysis.

pub mod apply;
pub mod ast;
pub mod parser;
pub mod participant;

pub use apply::{apply_filters, evaluate_filter};
pub use ast::{FieldFilter, FilterExpr, FilterField, FilterOperator, FilterValue};
pub use parser::parse_filter;
pub use participant::{OVERALL, ParticipantFilter};
