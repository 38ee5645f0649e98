//! JSON-Lines Import/Export für XForm-Dokumente.
//!
//! Eine Transformation pro Zeile, kompaktes JSON, Leerzeilen werden ignoriert.

pub mod parser;
pub mod writer;

pub use parser::{parse_xforms_jsonl, read_xforms_jsonl};
pub use writer::{write_xforms_jsonl, write_xforms_jsonl_to};
