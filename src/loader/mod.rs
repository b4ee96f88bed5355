mod load;
mod load_error;
mod source;

pub use load::{Documents, Loader};
pub use load_error::LoadError;
pub use source::{DocumentSource, FileSource, HttpSource};
