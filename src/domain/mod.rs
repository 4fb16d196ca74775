mod diagnostics;
mod entry;

pub use diagnostics::{Field, FieldFault, Notice};
pub use entry::{Entry, Record};
