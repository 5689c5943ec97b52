//! Path and URI string canonicalization for Javelin.
//!
//! Everything here is a pure, stateless string transform: `file:` URI
//! construction and recovery, POSIX-style joining, containment checks, and
//! the file-relevance predicate used to narrow a workspace down to the files
//! the analyzer cares about.

mod path;
mod relevance;

pub use path::{
    concat_path, join_path, parent_uri, path_starts_with, path_to_uri, uri_contains_or_equals,
    uri_to_path, vfs_path,
};
pub use relevance::{is_relevant_file, relevant_files};
