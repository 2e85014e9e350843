mod education;
mod references;

pub use education::{EducationEntry, EducationLibrary};
pub use references::{ReferenceEntry, ReferenceTable};
