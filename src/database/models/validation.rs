use std::sync::LazyLock;

use regex::Regex;

use crate::error::AppError;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex color pattern is valid"));

pub const DEFAULT_TEAM_COLOR: &str = "#3B82F6";

/// Trims and checks a required text field against its column width.
pub fn required_text(field: &str, value: &str, max_len: usize) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::required(field));
    }
    check_len(field, value, max_len)?;
    Ok(value.to_string())
}

/// Optional text: blank collapses to `None`.
pub fn optional_text(
    field: &str,
    value: Option<&str>,
    max_len: usize,
) -> Result<Option<String>, AppError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => {
            check_len(field, v, max_len)?;
            Ok(Some(v.to_string()))
        }
        None => Ok(None),
    }
}

/// Patch form of [`optional_text`]: absent stays `None`, blank becomes
/// `Some(None)` and clears the column.
pub fn clearable_text(
    field: &str,
    value: Option<&str>,
    max_len: usize,
) -> Result<Option<Option<String>>, AppError> {
    value
        .map(|v| optional_text(field, Some(v), max_len))
        .transpose()
}

pub fn color(value: &str) -> Result<String, AppError> {
    let value = value.trim();
    if !HEX_COLOR.is_match(value) {
        return Err(AppError::BadRequest(format!(
            "color must look like #RRGGBB, got '{}'",
            value
        )));
    }
    Ok(value.to_uppercase())
}

fn check_len(field: &str, value: &str, max_len: usize) -> Result<(), AppError> {
    if value.chars().count() > max_len {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} characters",
            field, max_len
        )));
    }
    Ok(())
}
