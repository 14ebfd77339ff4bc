//! Domain constants

/// Separator between keys of a rendered resolution path
pub const RESOLUTION_PATH_SEPARATOR: &str = " -> ";

/// Expected type reported when an argument is read without a type
pub const ANY_ARGUMENT_TYPE: &str = "<any>";
