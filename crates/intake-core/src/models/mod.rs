pub mod decision;
pub mod document;
pub mod result;

pub use decision::Decision;
pub use document::{Document, DocumentSubmission};
pub use result::{ConsistencyReport, ProcessingResult};
