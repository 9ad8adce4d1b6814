//! Key path helpers.

use std::fmt::Display;

use itertools::Itertools;

/// Separator between keys in a descendant path.
pub const PATH_SEPARATOR: char = '/';

/// Splits a descendant path into its key segments.
///
/// The split is literal: empty segments are kept, so `""` yields one empty
/// segment and `"a//b"` yields three.
pub fn split_key_path(path: &str) -> impl Iterator<Item = &str> {
    path.split(PATH_SEPARATOR)
}

/// Joins keys into a path accepted by [`split_key_path`].
pub fn join_key_path<I>(keys: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut separator = [0u8; 4];
    keys.into_iter().join(PATH_SEPARATOR.encode_utf8(&mut separator))
}
