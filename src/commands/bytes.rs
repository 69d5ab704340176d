use std::io::{self, Write};

use tracing::debug;

use crate::config::{Config, Overflow};
use crate::error::AppError;
use crate::format::{format_bytes, try_format_bytes};
use crate::utils::parse_size;

pub struct BytesOptions {
    pub sizes: Vec<String>,
    pub decimals: Option<i32>,
    pub strict: bool,
}

/// Format every size and print one line per input.
pub fn execute_bytes(options: BytesOptions) -> Result<Vec<String>, AppError> {
    let config = Config::load()?;
    let decimals = options.decimals.unwrap_or(config.decimals);
    let strict = options.strict || config.overflow == Overflow::Error;
    debug!(decimals, strict, count = options.sizes.len(), "formatting sizes");

    let mut lines = Vec::with_capacity(options.sizes.len());
    for size in &options.sizes {
        let bytes = parse_size(size)?;
        let line =
            if strict { try_format_bytes(bytes, decimals)? } else { format_bytes(bytes, decimals) };
        debug!(input = %size, bytes, formatted = %line);
        lines.push(line);
    }

    let mut stdout = io::stdout().lock();
    for line in &lines {
        writeln!(stdout, "{line}")?;
    }
    Ok(lines)
}
