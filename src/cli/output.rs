//! Colored terminal output for nodes, keys and paths
//!
//! `colored` honors NO_COLOR, CLICOLOR and CLICOLOR_FORCE.

use std::fmt::Display;

use colored::Colorize;
use itertools::Itertools;

use crate::util::path::PATH_SEPARATOR;

pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub fn warning(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "warning".yellow(), msg);
}

/// `key = contents`, key in cyan.
pub fn node(key: &str, contents: &(impl Display + ?Sized)) {
    println!("{} = {}", key.cyan(), contents);
}

/// Parents of a shared node, indented under it.
pub fn shared_by(parents: &[&str]) {
    println!("  {} {}", "shared by".dimmed(), parents.join(", "));
}

/// Root key heading a group of lines.
pub fn root(key: &str) {
    println!("{}", key.cyan().bold());
}

pub fn leaf(key: &str) {
    println!("  {}", key);
}

/// Key path with dimmed separators.
pub fn key_path(path: &str) {
    let separator = PATH_SEPARATOR.to_string().dimmed().to_string();
    println!("{}", path.split(PATH_SEPARATOR).join(&separator));
}

/// Unstyled line.
pub fn plain(msg: &(impl Display + ?Sized)) {
    println!("{}", msg);
}
