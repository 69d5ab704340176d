//! Class-name composition for UI markup.
//!
//! [`compose`] is `merge(join(inputs))`: [`join`] flattens conditional inputs
//! into one class string and [`merge`] drops utilities overridden later on.

use crate::model::ClassValue;

pub mod groups;
pub mod merge;

pub use merge::{MergeOptions, merge, merge_with};

/// Join class values into one space-separated string, skipping falsy values
/// and keeping map keys whose flag is set.
pub fn join(inputs: &[ClassValue]) -> String {
    let mut joined = String::new();
    for input in inputs {
        push_value(&mut joined, input);
    }
    joined
}

fn push_value(joined: &mut String, value: &ClassValue) {
    if value.is_falsy() {
        return;
    }

    match value {
        ClassValue::Str(class) => push_class(joined, class),
        ClassValue::Num(number) => push_class(joined, &number.to_string()),
        ClassValue::List(items) => {
            for item in items {
                push_value(joined, item);
            }
        }
        ClassValue::Map(entries) => {
            for (class, enabled) in entries {
                if *enabled {
                    push_class(joined, class);
                }
            }
        }
        ClassValue::Skip => {}
    }
}

fn push_class(joined: &mut String, class: &str) {
    if class.is_empty() {
        return;
    }
    if !joined.is_empty() {
        joined.push(' ');
    }
    joined.push_str(class);
}

/// Join and merge class values with the default merge options.
pub fn compose(inputs: &[ClassValue]) -> String {
    merge(&join(inputs))
}

pub fn compose_with(inputs: &[ClassValue], options: &MergeOptions) -> String {
    merge_with(&join(inputs), options)
}

/// Compose class names from any mix of values convertible into
/// [`ClassValue`](crate::model::ClassValue).
///
/// ```
/// use cnfmt::cn;
///
/// let active = true;
/// assert_eq!(cn!("px-2 py-1", ("px-4", active), None::<&str>), "py-1 px-4");
/// ```
#[macro_export]
macro_rules! cn {
    ($($input:expr),* $(,)?) => {
        $crate::classes::compose(&[$($crate::model::ClassValue::from($input)),*])
    };
}
