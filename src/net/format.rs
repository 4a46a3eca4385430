//! Format patterns: `x` stands for one hex digit, anything else must be one
//! of [`ALLOWED_SEPARATORS`].

use std::{
    collections::HashMap,
    sync::{Arc, OnceLock},
};

use dashmap::DashMap;
use log::debug;

use crate::error::{Error, Result};

pub const ALLOWED_SEPARATORS: [char; 4] = [':', '-', '.', ' '];

const GROUP_SIZES: [usize; 3] = [2, 4, 6];

static VALID_FORMATS: OnceLock<DashMap<usize, Arc<[String]>>> = OnceLock::new();
static ALIAS_FORMATS: OnceLock<DashMap<usize, Arc<HashMap<String, String>>>> = OnceLock::new();

fn is_placeholder(c: char) -> bool {
    c == 'x' || c == 'X'
}

fn chunks(nibbles: usize, size: usize, sep: char) -> String {
    vec!["x".repeat(size); nibbles / size].join(&sep.to_string())
}

fn build_valid_formats(length: usize) -> Vec<String> {
    let nibbles = length / 4;
    let mut formats: Vec<String> = Vec::new();

    for sep in ALLOWED_SEPARATORS {
        for size in GROUP_SIZES {
            if nibbles % size == 0 {
                let pattern = chunks(nibbles, size, sep);
                if !formats.contains(&pattern) {
                    formats.push(pattern);
                }
            }
        }
    }

    let raw = "x".repeat(nibbles);
    if !formats.contains(&raw) {
        formats.push(raw);
    }
    formats
}

/// Every pattern an address of `length` bits can be rendered with.
///
/// Computed once per length; the order is stable: separators in
/// [`ALLOWED_SEPARATORS`] order, group sizes 2, 4, 6, then plain hex.
pub fn valid_formats(length: usize) -> Arc<[String]> {
    let cache = VALID_FORMATS.get_or_init(DashMap::new);
    if let Some(formats) = cache.get(&length) {
        return Arc::clone(formats.value());
    }

    debug!("Building format table for {} bit addresses", length);
    let formats: Arc<[String]> = build_valid_formats(length).into();
    cache.insert(length, Arc::clone(&formats));
    formats
}

fn build_alias_formats(length: usize) -> HashMap<String, String> {
    let formats = valid_formats(length);
    let nibbles = length / 4;
    let mut aliases = HashMap::new();

    if nibbles % 2 == 0 {
        aliases.insert("canonical".to_string(), chunks(nibbles, 2, ':'));
        aliases.insert("dashed".to_string(), chunks(nibbles, 2, '-'));
    }

    for f in formats.iter() {
        if nibbles == 12 && f.contains('.') && f.split('.').count() == 3 {
            aliases.insert("dotted".to_string(), f.clone());
        }
        if !f.contains(ALLOWED_SEPARATORS) {
            aliases.insert("plain".to_string(), f.clone());
        }
    }

    for f in formats.iter() {
        aliases.insert(f.clone(), f.clone());
    }
    aliases
}

/// Short names (`canonical`, `dashed`, `dotted`, `plain`) and every valid
/// pattern mapped to a concrete pattern for `length` bits.
pub fn alias_formats(length: usize) -> Arc<HashMap<String, String>> {
    let cache = ALIAS_FORMATS.get_or_init(DashMap::new);
    if let Some(aliases) = cache.get(&length) {
        return Arc::clone(aliases.value());
    }

    let aliases = Arc::new(build_alias_formats(length));
    cache.insert(length, Arc::clone(&aliases));
    aliases
}

/// Substitutes `hex` into `pattern` left to right.
pub fn apply_pattern(hex: &str, pattern: &str) -> Result<String> {
    let wanted = pattern.chars().filter(|&c| is_placeholder(c)).count();
    if wanted != hex.len() {
        return Err(Error::FormatMismatch {
            pattern: wanted,
            address: hex.len(),
        });
    }

    let mut digits = hex.chars();
    let mut out = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if is_placeholder(c) {
            // Counts were checked above.
            if let Some(d) = digits.next() {
                out.push(d);
            }
        } else if ALLOWED_SEPARATORS.contains(&c) {
            out.push(c);
        } else {
            return Err(Error::InvalidFormatCharacter(c));
        }
    }
    Ok(out)
}

/// Resolves `pattern_or_alias` for `length` bits and renders `hex` with it.
pub fn render(hex: &str, length: usize, pattern_or_alias: &str) -> Result<String> {
    let aliases = alias_formats(length);
    let pattern = aliases
        .get(pattern_or_alias)
        .map(String::as_str)
        .unwrap_or(pattern_or_alias);
    apply_pattern(hex, pattern)
}
