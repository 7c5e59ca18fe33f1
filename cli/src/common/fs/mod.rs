//! # Supportbot Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! Filesystem helpers shared by the session store and the config commands.
//! Callers import from the submodule, e.g. `crate::common::fs::io::write_string_to_file`.
//!

/// Basic file I/O (`ensure_dir_exists`, `read_optional_to_string`, `write_string_to_file`).
pub mod io;
