//! Settings file handling for the shell.
//!
//! The shell owns only the few keys it interprets at engine construction
//! time; the persistence format beyond that belongs to collaborators.

pub mod settings;
