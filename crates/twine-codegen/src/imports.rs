//! Import reference parsing.
//!
//! Extern declarations name Go types and functions with a path-qualified
//! reference of the shape `[*]?path[/path]*.TypeOrFunc`, or a bare
//! `TypeOrFunc` for builtins. The dot separates the package path from the
//! imported name; the last `/`-delimited path segment is the Go package
//! name and the basis of the emitted alias.

use crate::error::EmitError;

/// Prefix of every emitted package alias. The generated namespace cannot
/// collide with user identifiers, which never start with `__`.
pub const GO_ALIAS_PREFIX: &str = "__go_";

/// True if the reference carries a package path (contains a `.`).
pub fn has_import_path(import: &str) -> bool {
    import.contains('.')
}

/// The package path: everything before the first `.`. A bare reference is
/// returned whole.
pub fn import_path(import: &str) -> &str {
    match import.split_once('.') {
        Some((path, _)) => path,
        None => import,
    }
}

/// The bare imported type or function: everything after the final `.`.
///
/// A reference without a dot is already bare. A dot with nothing after it
/// is malformed and fatal.
pub fn type_from_import(import: &str) -> Result<&str, EmitError> {
    match import.rsplit_once('.') {
        None => Ok(import),
        Some((_, bare)) if !bare.is_empty() => Ok(bare),
        Some(_) => Err(EmitError::MalformedImport(import.to_string())),
    }
}

/// The final `/`-delimited segment of a package path.
pub fn strip_import_path(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some((_, last)) => last,
        None => path,
    }
}

/// The alias declared for a package path: `__go_<last segment>`.
pub fn alias_for_path(path: &str) -> String {
    format!("{GO_ALIAS_PREFIX}{}", strip_import_path(path))
}
