//! # Extraction
//!
//! The seam between the pipeline and whatever API supplies the books. Concrete
//! extractors live in their own crates (e.g., `booketl-google-books`) and only
//! need to implement the `Extractor` trait.

pub mod traits;

pub use traits::Extractor;
