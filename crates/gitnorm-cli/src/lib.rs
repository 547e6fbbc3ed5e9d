//! Shared scaffolding for the `git-url-norm` and `print-vars-table` binaries.

pub mod cli;
