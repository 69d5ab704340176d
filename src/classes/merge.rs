use std::borrow::Cow;
use std::collections::HashSet;

use tracing::trace;

use super::groups::{class_group, conflicting_groups};

/// How utility classes are spelled in the stylesheet being targeted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    /// Prefix every utility carries (`tw-` in `hover:tw-p-2`). Empty for none.
    pub prefix: String,
    /// Separator between variants and the utility.
    pub separator: String,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self { prefix: String::new(), separator: ":".to_string() }
    }
}

/// Resolve conflicting utility classes in a space-separated class string.
pub fn merge(classes: &str) -> String {
    merge_with(classes, &MergeOptions::default())
}

/// Resolve conflicts so that, for each style property and variant set, only
/// the last class survives. Classes that are not utilities are kept, minus
/// exact duplicates.
pub fn merge_with(classes: &str, options: &MergeOptions) -> String {
    let mut seen: HashSet<String> = HashSet::new();
    let mut kept: Vec<&str> = Vec::new();

    for class in classes.split_whitespace().rev() {
        let parsed = ParsedClass::parse(class, &options.separator);

        let Some((group, has_postfix)) = parsed.group(&options.prefix) else {
            if seen.insert(format!(" {class}")) {
                kept.push(class);
            } else {
                trace!(class, "dropping duplicate class");
            }
            continue;
        };

        let modifier_id = parsed.modifier_id();
        if !seen.insert(format!("{modifier_id}{group}")) {
            trace!(class, %group, "dropping superseded class");
            continue;
        }
        if let Cow::Borrowed(group) = group {
            for conflict in conflicting_groups(group, has_postfix) {
                seen.insert(format!("{modifier_id}{conflict}"));
            }
        }
        kept.push(class);
    }

    kept.reverse();
    kept.join(" ")
}

/// A class split into its variants, important marker and utility.
#[derive(Debug, PartialEq, Eq)]
struct ParsedClass<'a> {
    variants: Vec<&'a str>,
    important: bool,
    /// Utility without the important marker, postfix modifier included.
    base: &'a str,
    /// Byte offset of a top-level `/` inside `base`.
    postfix_at: Option<usize>,
}

impl<'a> ParsedClass<'a> {
    fn parse(class: &'a str, separator: &str) -> Self {
        let bytes = class.as_bytes();
        let mut variants = Vec::new();
        let mut brackets = 0usize;
        let mut parens = 0usize;
        let mut start = 0;
        let mut postfix_at = None;

        let mut index = 0;
        while index < bytes.len() {
            if brackets == 0 && parens == 0 {
                if !separator.is_empty() && bytes[index..].starts_with(separator.as_bytes()) {
                    variants.push(&class[start..index]);
                    index += separator.len();
                    start = index;
                    postfix_at = None;
                    continue;
                }
                if bytes[index] == b'/' {
                    postfix_at = Some(index - start);
                }
            }
            match bytes[index] {
                b'[' => brackets += 1,
                b']' => brackets = brackets.saturating_sub(1),
                b'(' => parens += 1,
                b')' => parens = parens.saturating_sub(1),
                _ => {}
            }
            index += 1;
        }

        let mut base = &class[start..];
        let mut important = false;
        if let Some(stripped) = base.strip_prefix('!') {
            base = stripped;
            important = true;
            postfix_at = postfix_at.and_then(|at| at.checked_sub(1));
        } else if let Some(stripped) = base.strip_suffix('!') {
            base = stripped;
            important = true;
        }
        let postfix_at = postfix_at.filter(|at| *at > 0 && *at + 1 < base.len());

        Self { variants, important, base, postfix_at }
    }

    /// Variants in canonical order plus the important marker. Regular
    /// variants commute, so they are sorted; arbitrary variants (`[&>*]`)
    /// depend on position and stay where they are.
    fn modifier_id(&self) -> String {
        let mut ordered: Vec<&str> = Vec::with_capacity(self.variants.len());
        let mut run: Vec<&str> = Vec::new();
        for variant in self.variants.iter().copied() {
            if variant.starts_with('[') {
                run.sort_unstable();
                ordered.append(&mut run);
                ordered.push(variant);
            } else {
                run.push(variant);
            }
        }
        run.sort_unstable();
        ordered.append(&mut run);

        let mut id = ordered.join(":");
        id.push(if self.important { '!' } else { '|' });
        id
    }

    /// Conflict group of the utility and whether it matched without its
    /// postfix modifier.
    fn group(&self, prefix: &str) -> Option<(Cow<'static, str>, bool)> {
        if let Some(property) = arbitrary_property(self.base) {
            return Some((Cow::Owned(format!("[{property}]")), false));
        }

        if let Some(at) = self.postfix_at
            && let Some(stem) = utility(&self.base[..at], prefix)
            && let Some(group) = class_group(stem)
        {
            return Some((Cow::Borrowed(group), true));
        }

        let base = utility(self.base, prefix)?;
        class_group(base).map(|group| (Cow::Borrowed(group), false))
    }
}

/// Strip the negative sign and the configured prefix.
fn utility<'a>(base: &'a str, prefix: &str) -> Option<&'a str> {
    let unsigned = match base.strip_prefix('-') {
        Some(rest) if !rest.is_empty() => rest,
        _ => base,
    };
    if prefix.is_empty() { Some(unsigned) } else { unsigned.strip_prefix(prefix) }
}

/// Property name of an arbitrary property class like `[mask-type:luminance]`.
fn arbitrary_property(base: &str) -> Option<&str> {
    let inner = base.strip_prefix('[')?.strip_suffix(']')?;
    let (property, value) = inner.split_once(':')?;
    (!property.is_empty() && !value.is_empty()).then_some(property)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_conflicting_utility_wins() {
        assert_eq!(merge("p-2 p-4"), "p-4");
        assert_eq!(merge("text-sm text-lg font-bold"), "text-lg font-bold");
        assert_eq!(merge("bg-red-500 text-white bg-primary"), "text-white bg-primary");
    }

    #[test]
    fn shorthand_removes_earlier_longhands_only() {
        assert_eq!(merge("px-2 pt-1 p-4"), "p-4");
        assert_eq!(merge("p-4 px-2"), "p-4 px-2");
        assert_eq!(merge("rounded-tl-md rounded-lg"), "rounded-lg");
        assert_eq!(merge("border-t-2 border"), "border");
    }

    #[test]
    fn variants_scope_conflicts() {
        assert_eq!(merge("p-2 hover:p-4"), "p-2 hover:p-4");
        assert_eq!(merge("hover:focus:p-2 focus:hover:p-4"), "focus:hover:p-4");
        assert_eq!(merge("[&>*]:hover:p-2 hover:[&>*]:p-4"), "[&>*]:hover:p-2 hover:[&>*]:p-4");
    }

    #[test]
    fn important_is_its_own_scope() {
        assert_eq!(merge("!p-2 p-4"), "!p-2 p-4");
        assert_eq!(merge("!p-2 !p-4"), "!p-4");
        assert_eq!(merge("p-2! !p-4"), "!p-4");
    }

    #[test]
    fn negative_values_share_the_group() {
        assert_eq!(merge("-mt-2 mt-4"), "mt-4");
        assert_eq!(merge("z-10 -z-10"), "-z-10");
    }

    #[test]
    fn postfix_modifiers() {
        assert_eq!(merge("bg-primary hover:bg-primary/90 bg-card"), "hover:bg-primary/90 bg-card");
        assert_eq!(merge("leading-7 text-sm/6"), "text-sm/6");
        assert_eq!(merge("leading-7 text-sm"), "leading-7 text-sm");
        assert_eq!(merge("w-1/2 w-full"), "w-full");
    }

    #[test]
    fn arbitrary_values_and_properties() {
        assert_eq!(merge("w-[10px] w-[calc(100%-2rem)]"), "w-[calc(100%-2rem)]");
        assert_eq!(merge("[mask-type:luminance] [mask-type:alpha]"), "[mask-type:alpha]");
        assert_eq!(merge("[mask-type:luminance] [color:red]"), "[mask-type:luminance] [color:red]");
    }

    #[test]
    fn unrelated_families_sharing_a_prefix_survive() {
        assert_eq!(merge("border-spacing-2 border-red-500"), "border-spacing-2 border-red-500");
        assert_eq!(merge("border-spacing-2 border-spacing-4"), "border-spacing-4");
        assert_eq!(merge("border-spacing-x-2 border-spacing-1"), "border-spacing-1");
        assert_eq!(merge("touch-pan-x touch-pan-y"), "touch-pan-x touch-pan-y");
        assert_eq!(merge("touch-pan-x touch-pan-left"), "touch-pan-left");
        assert_eq!(merge("touch-pan-x touch-pan-y touch-auto"), "touch-auto");
        assert_eq!(merge("touch-none touch-pan-x"), "touch-pan-x");
    }

    #[test]
    fn filters_and_backdrop_filters() {
        assert_eq!(merge("blur-sm blur-lg"), "blur-lg");
        assert_eq!(merge("blur blur-md"), "blur-md");
        assert_eq!(merge("drop-shadow-sm drop-shadow-lg"), "drop-shadow-lg");
        assert_eq!(merge("brightness-50 brightness-75"), "brightness-75");
        assert_eq!(merge("backdrop-blur-sm backdrop-blur-md"), "backdrop-blur-md");
        assert_eq!(merge("blur-sm backdrop-blur-sm"), "blur-sm backdrop-blur-sm");
        assert_eq!(merge("blur-sm grayscale filter-none"), "filter-none");
        assert_eq!(
            merge("backdrop-blur-sm blur-sm backdrop-filter-none"),
            "blur-sm backdrop-filter-none"
        );
    }

    #[test]
    fn scroll_spacing() {
        assert_eq!(merge("scroll-mt-4 scroll-mt-8"), "scroll-mt-8");
        assert_eq!(merge("scroll-px-2 scroll-pl-4 scroll-p-1"), "scroll-p-1");
        assert_eq!(merge("scroll-mt-4 mt-8"), "scroll-mt-4 mt-8");
        assert_eq!(merge("scroll-auto scroll-smooth"), "scroll-smooth");
    }

    #[test]
    fn snap_utilities() {
        assert_eq!(merge("snap-start snap-center"), "snap-center");
        assert_eq!(merge("snap-x snap-mandatory snap-y"), "snap-mandatory snap-y");
        assert_eq!(merge("snap-normal snap-always"), "snap-always");
    }

    #[test]
    fn table_layout_is_not_display() {
        assert_eq!(merge("table-auto table-fixed"), "table-fixed");
        assert_eq!(merge("table table-fixed"), "table table-fixed");
    }

    #[test]
    fn unknown_classes_are_deduplicated() {
        assert_eq!(merge("card card-header card"), "card-header card");
        assert_eq!(merge("  a \n b\t"), "a b");
        assert_eq!(merge(""), "");
    }

    #[test]
    fn prefix_and_separator_options() {
        let options = MergeOptions { prefix: "tw-".into(), separator: "__".into() };
        assert_eq!(merge_with("hover__tw-p-2 hover__tw-p-4", &options), "hover__tw-p-4");
        assert_eq!(merge_with("p-2 p-4", &options), "p-2 p-4");
    }

    #[test]
    fn parse_splits_variants_outside_brackets() {
        let parsed = ParsedClass::parse("md:[&:hover]:!bg-[url(a:b)]/50", ":");
        assert_eq!(parsed.variants, vec!["md", "[&:hover]"]);
        assert!(parsed.important);
        assert_eq!(parsed.base, "bg-[url(a:b)]/50");
        assert_eq!(parsed.postfix_at, Some(13));
    }
}
