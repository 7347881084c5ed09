use nix::unistd::gethostname;

use crate::core::error::{BenchError, Result};
use crate::core::types::HOST_NAME_MAX;

/// Short host name, at most `HOST_NAME_MAX` bytes and free of `,`
pub fn hostname() -> Result<String> {
    let raw = gethostname().map_err(BenchError::Hostname)?;
    Ok(sanitize_host(raw.to_string_lossy().into_owned()))
}

/// Replaces the result-line field separator and applies the length cap
pub fn sanitize_host(name: String) -> String {
    truncate_host(name.replace(',', "_"))
}

/// Caps `name` at `HOST_NAME_MAX` bytes without splitting a character
pub fn truncate_host(mut name: String) -> String {
    if name.len() > HOST_NAME_MAX {
        let mut end = HOST_NAME_MAX;
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        name.truncate(end);
    }
    name
}
