/// Parse a size budget in kilobytes.
///
/// # Errors
///
/// Returns an error message for non-numeric input, zero, or values that
/// would overflow when converted to bytes.
pub fn parse_size_kb(s: &str) -> Result<u64, String> {
    let kb: u64 = s
        .trim()
        .parse()
        .map_err(|_| format!("Size limit must be a whole number of kilobytes: '{}'", s))?;

    if kb == 0 {
        return Err("Size limit must be greater than zero".to_string());
    }

    if kb.checked_mul(1024).is_none() {
        return Err(format!("Size limit is too large: '{}'", s));
    }

    Ok(kb)
}

/// Parse an artifact suffix such as `.js` or `.mjs`.
///
/// A missing leading dot is added, so `js` is accepted as `.js`.
pub fn parse_suffix(s: &str) -> Result<String, String> {
    let trimmed = s.trim();

    if trimmed.is_empty() || trimmed == "." {
        return Err("Suffix cannot be empty".to_string());
    }

    if trimmed.chars().any(|c| c.is_whitespace() || c == '/' || c == '\\') {
        return Err(format!(
            "Suffix cannot contain whitespace or path separators: '{}'",
            s
        ));
    }

    if trimmed.starts_with('.') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!(".{}", trimmed))
    }
}
