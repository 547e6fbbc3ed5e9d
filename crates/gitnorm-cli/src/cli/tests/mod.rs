//! CLI parse tests, one file per binary.

use super::{NormalizeArgs, TableArgs};
use clap::Parser;

pub(super) fn parse_normalize(args: &[&str]) -> NormalizeArgs {
    NormalizeArgs::try_parse_from(args).unwrap()
}

pub(super) fn parse_table(args: &[&str]) -> TableArgs {
    TableArgs::try_parse_from(args).unwrap()
}
