use tracing::debug;

use crate::classes::{compose_with, join, merge_with};
use crate::config::Config;
use crate::error::AppError;
use crate::model::ClassValue;

pub struct CnOptions {
    pub classes: Vec<String>,
    pub json: bool,
}

/// Join and merge the given classes, then print the result.
pub fn execute_cn(options: CnOptions) -> Result<String, AppError> {
    let config = Config::load()?;
    let merge_options = config.merge_options();

    let merged = if options.json {
        let inputs = options
            .classes
            .iter()
            .map(|raw| serde_json::from_str(raw).map(|value| ClassValue::from_json(&value)))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(joined = %join(&inputs), "parsed class values");
        compose_with(&inputs, &merge_options)
    } else {
        merge_with(&options.classes.join(" "), &merge_options)
    };

    println!("{merged}");
    Ok(merged)
}
