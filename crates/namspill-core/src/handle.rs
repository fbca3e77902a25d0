//! Namespace handle parsing.
//!
//! Reading an `ns/<type>` link of a task yields a text like
//! `net:[4026531840]`: the namespace type, a colon, and the namespace's
//! inode number in square brackets.

use namspill_common::error::{NamspillError, Result};

/// Splits a namespace handle into its type and namespace ID.
///
/// Only the exact shape `<type>:[<decimal>]` is accepted; anything else is
/// an error rather than a best-effort parse.
///
/// # Errors
///
/// Returns `NamspillError::MalformedHandle` if `handle` deviates from the
/// expected shape or the ID does not fit into 64 bits.
pub fn parse_namespace_handle(handle: &str) -> Result<(&str, u64)> {
    let malformed = || NamspillError::MalformedHandle {
        handle: handle.to_owned(),
    };
    let (typ, id) = handle.split_once(':').ok_or_else(malformed)?;
    if typ.is_empty() || id.contains(':') {
        return Err(malformed());
    }
    let digits = id
        .strip_prefix('[')
        .and_then(|id| id.strip_suffix(']'))
        .ok_or_else(malformed)?;
    // u64::from_str also takes a leading '+'.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let nsid = digits.parse::<u64>().map_err(|_| malformed())?;
    Ok((typ, nsid))
}
