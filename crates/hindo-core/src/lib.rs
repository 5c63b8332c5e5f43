pub mod error;
pub mod filter;
pub mod loader;
pub mod table;

pub use error::LoadError;
pub use filter::{FilterView, filter};
pub use loader::load;
pub use table::{VocabularyTable, WordRecord};
