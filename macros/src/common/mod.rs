// Common utilities shared between internal and user-facing macros
//
// This module contains:
// - parse_utils: repr parsing and field list helpers

mod parse_utils;

pub use parse_utils::*;
