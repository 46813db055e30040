pub mod error;
pub mod field;
pub mod record;
pub mod validation;

pub use error::{RegformError, Result};
pub use field::{FieldId, FieldValue};
pub use record::{FormSnapshot, StoredRecord};
pub use validation::ValidationResult;
