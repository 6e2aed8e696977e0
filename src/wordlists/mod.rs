//! Word lists for Wordle solving
//!
//! The corpus provider: loads the answer and valid-guess vocabularies from a
//! word-list document, with an embedded fallback list compiled into the binary.

mod corpus;
mod embedded;
pub mod loader;

pub use corpus::{Corpus, CorpusLoadError, CorpusSource, EmbeddedSource, FileSource};
pub use embedded::{FALLBACK, FALLBACK_COUNT};
