use std::path::{Path, PathBuf};

use byte_unit::Byte;
use dirs_next as dirs;

use crate::error::AppError;

/// Parse a size typed by a user: a plain (possibly negative or fractional)
/// number of bytes, or a value with a unit such as `1.5 MiB` or `10GB`.
pub fn parse_size(input: &str) -> Result<f64, AppError> {
    let trimmed = input.trim();
    if let Ok(bytes) = trimmed.parse::<f64>() {
        return Ok(bytes);
    }

    let byte =
        Byte::parse_str(trimmed, true).map_err(|_| AppError::InvalidSize(input.to_string()))?;
    Ok(byte.as_u128() as f64)
}

/// Replace the home directory prefix with `~` to make output easier to read.
pub fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        let mut display = PathBuf::from("~");
        display.push(stripped);
        return display.display().to_string();
    }

    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers_pass_through() {
        assert_eq!(parse_size("1536").unwrap(), 1536.0);
        assert_eq!(parse_size(" -2048 ").unwrap(), -2048.0);
        assert_eq!(parse_size("0.5").unwrap(), 0.5);
    }

    #[test]
    fn unit_strings_are_parsed() {
        assert_eq!(parse_size("1 KiB").unwrap(), 1024.0);
        assert_eq!(parse_size("1.5MiB").unwrap(), 1_572_864.0);
        assert_eq!(parse_size("2 KB").unwrap(), 2000.0);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(parse_size("lots"), Err(AppError::InvalidSize(_))));
    }
}
