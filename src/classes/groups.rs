//! Utility class families and the style property each one targets.
//!
//! A utility such as `border-t-2` is looked up by trying the longest dashed
//! prefix first (`border-t-2`, then `border-t`, then `border`) and letting the
//! matching family decide from the remaining value which group it belongs to.

/// Spacing and sizing families. The group id is the family prefix itself and
/// the value has to look like a size (`4`, `px`, `full`, `7xl`, `[3px]`).
const SPACING_GROUPS: &[&str] = &[
    "p", "px", "py", "ps", "pe", "pt", "pr", "pb", "pl",
    "m", "mx", "my", "ms", "me", "mt", "mr", "mb", "ml",
    "space-x", "space-y", "gap", "gap-x", "gap-y",
    "w", "min-w", "max-w", "h", "min-h", "max-h", "size",
    "inset", "inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left",
    "basis", "indent", "translate-x", "translate-y",
    "border-spacing", "border-spacing-x", "border-spacing-y",
    "scroll-m", "scroll-mx", "scroll-my", "scroll-ms", "scroll-me",
    "scroll-mt", "scroll-mr", "scroll-mb", "scroll-ml",
    "scroll-p", "scroll-px", "scroll-py", "scroll-ps", "scroll-pe",
    "scroll-pt", "scroll-pr", "scroll-pb", "scroll-pl",
];

/// Families whose every value targets the same property. The group id is the
/// family prefix itself.
const SCALE_GROUPS: &[&str] = &[
    "z", "order", "aspect", "columns", "float", "clear",
    "overflow", "overflow-x", "overflow-y",
    "grid-cols", "grid-rows", "grid-flow", "auto-cols", "auto-rows",
    "col", "col-start", "col-end", "row", "row-start", "row-end",
    "justify", "justify-items", "justify-self", "items", "self",
    "place-content", "place-items", "place-self",
    "leading", "tracking", "align", "whitespace", "line-clamp",
    "underline-offset", "list-image", "box-decoration",
    "break-after", "break-before", "break-inside",
    "opacity", "bg-opacity", "text-opacity", "border-opacity", "divide-opacity",
    "ring-opacity", "mix-blend", "bg-blend",
    "duration", "delay", "ease", "animate",
    "scale", "scale-x", "scale-y", "rotate", "skew-x", "skew-y", "origin",
    "cursor", "select", "pointer-events", "will-change", "accent", "caret",
    "appearance", "fill", "outline-offset",
    "brightness", "contrast", "hue-rotate", "saturate",
    "backdrop-brightness", "backdrop-contrast", "backdrop-hue-rotate", "backdrop-opacity",
    "backdrop-saturate",
];

/// Families that may also appear without a value (`rounded`, `grow`).
const BARE_GROUPS: &[&str] = &[
    "rounded", "rounded-s", "rounded-e", "rounded-t", "rounded-r", "rounded-b", "rounded-l",
    "rounded-ss", "rounded-se", "rounded-ee", "rounded-es",
    "rounded-tl", "rounded-tr", "rounded-br", "rounded-bl",
    "grow", "shrink", "transition", "resize",
    "blur", "drop-shadow", "grayscale", "invert", "sepia",
    "backdrop-blur", "backdrop-grayscale", "backdrop-invert", "backdrop-sepia",
];

const FILTERS: &[&str] = &[
    "blur", "brightness", "contrast", "drop-shadow", "grayscale", "hue-rotate", "invert",
    "saturate", "sepia",
];

const BACKDROP_FILTERS: &[&str] = &[
    "backdrop-blur", "backdrop-brightness", "backdrop-contrast", "backdrop-grayscale",
    "backdrop-hue-rotate", "backdrop-invert", "backdrop-opacity", "backdrop-saturate",
    "backdrop-sepia",
];

const DISPLAY: &[&str] = &[
    "block", "inline-block", "inline", "flex", "inline-flex", "table", "inline-table",
    "table-caption", "table-cell", "table-column", "table-column-group", "table-footer-group",
    "table-header-group", "table-row-group", "table-row", "flow-root", "grid", "inline-grid",
    "contents", "list-item", "hidden",
];

/// Border sides as `(family, width group, color group)`.
const BORDER_SIDES: &[(&str, &str, &str)] = &[
    ("border", "border-w", "border-color"),
    ("border-x", "border-w-x", "border-color-x"),
    ("border-y", "border-w-y", "border-color-y"),
    ("border-s", "border-w-s", "border-color-s"),
    ("border-e", "border-w-e", "border-color-e"),
    ("border-t", "border-w-t", "border-color-t"),
    ("border-r", "border-w-r", "border-color-r"),
    ("border-b", "border-w-b", "border-color-b"),
    ("border-l", "border-w-l", "border-color-l"),
];

const LINE_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];

const LENGTH_UNITS: &[&str] = &[
    "px", "rem", "em", "%", "vh", "vw", "vmin", "vmax", "dvh", "dvw", "svh", "svw", "lvh",
    "lvw", "ch", "ex", "lh", "rlh", "pt", "pc", "in", "cm", "mm", "cqw", "cqh",
];

/// Group id for a utility without variants, important marker, negative sign or
/// prefix. Returns `None` for classes that are not recognised utilities.
pub fn class_group(utility: &str) -> Option<&'static str> {
    if utility.is_empty() {
        return None;
    }

    let mut end = utility.len();
    loop {
        let family = &utility[..end];
        let value = utility.get(end + 1..).unwrap_or("");
        if let Some(group) = lookup(family, value) {
            return Some(group);
        }
        match family.rfind('-') {
            Some(dash) if dash > 0 => end = dash,
            _ => return None,
        }
    }
}

/// Groups that an occurrence of `group` overrides when it appears later.
pub fn conflicting_groups(group: &str, has_postfix: bool) -> &'static [&'static str] {
    if has_postfix && group == "font-size" {
        return &["leading"];
    }

    match group {
        "p" => &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"],
        "px" => &["pr", "pl"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"],
        "mx" => &["mr", "ml"],
        "my" => &["mt", "mb"],
        "scroll-p" => &[
            "scroll-px", "scroll-py", "scroll-ps", "scroll-pe",
            "scroll-pt", "scroll-pr", "scroll-pb", "scroll-pl",
        ],
        "scroll-px" => &["scroll-pr", "scroll-pl"],
        "scroll-py" => &["scroll-pt", "scroll-pb"],
        "scroll-m" => &[
            "scroll-mx", "scroll-my", "scroll-ms", "scroll-me",
            "scroll-mt", "scroll-mr", "scroll-mb", "scroll-ml",
        ],
        "scroll-mx" => &["scroll-mr", "scroll-ml"],
        "scroll-my" => &["scroll-mt", "scroll-mb"],
        "border-spacing" => &["border-spacing-x", "border-spacing-y"],
        "touch" => &["touch-x", "touch-y", "touch-pz"],
        "touch-x" | "touch-y" | "touch-pz" => &["touch"],
        "filter" => FILTERS,
        "backdrop-filter" => BACKDROP_FILTERS,
        "inset" => &["inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "size" => &["w", "h"],
        "gap" => &["gap-x", "gap-y"],
        "overflow" => &["overflow-x", "overflow-y"],
        "scale" => &["scale-x", "scale-y"],
        "line-clamp" => &["display", "overflow"],
        "rounded" => &[
            "rounded-s", "rounded-e", "rounded-t", "rounded-r", "rounded-b", "rounded-l",
            "rounded-ss", "rounded-se", "rounded-ee", "rounded-es",
            "rounded-tl", "rounded-tr", "rounded-br", "rounded-bl",
        ],
        "rounded-s" => &["rounded-ss", "rounded-es"],
        "rounded-e" => &["rounded-se", "rounded-ee"],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "border-w" => &[
            "border-w-x", "border-w-y", "border-w-s", "border-w-e",
            "border-w-t", "border-w-r", "border-w-b", "border-w-l",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        "border-color" => &[
            "border-color-x", "border-color-y", "border-color-s", "border-color-e",
            "border-color-t", "border-color-r", "border-color-b", "border-color-l",
        ],
        "border-color-x" => &["border-color-r", "border-color-l"],
        "border-color-y" => &["border-color-t", "border-color-b"],
        _ => &[],
    }
}

fn lookup(family: &str, value: &str) -> Option<&'static str> {
    if value.is_empty()
        && let Some(group) = standalone(family)
    {
        return Some(group);
    }

    if let Some(group) = named(SPACING_GROUPS, family) {
        return is_size(value).then_some(group);
    }
    if let Some(group) = named(SCALE_GROUPS, family) {
        return (!value.is_empty()).then_some(group);
    }
    if let Some(group) = named(BARE_GROUPS, family) {
        return Some(group);
    }
    if let Some(&(_, width, color)) = BORDER_SIDES.iter().find(|(side, _, _)| *side == family) {
        return Some(border(value, width, color));
    }

    let group = match family {
        "flex" => match value {
            "row" | "row-reverse" | "col" | "col-reverse" => "flex-direction",
            "wrap" | "wrap-reverse" | "nowrap" => "flex-wrap",
            _ => "flex",
        },
        "content" => match value {
            "normal" | "center" | "start" | "end" | "between" | "around" | "evenly"
            | "baseline" | "stretch" => "align-content",
            _ => "content",
        },
        "font" => {
            if is_font_weight(value) {
                "font-weight"
            } else {
                "font-family"
            }
        }
        "text" => match value {
            "left" | "center" | "right" | "justify" | "start" | "end" => "text-alignment",
            "ellipsis" | "clip" => "text-overflow",
            "wrap" | "nowrap" | "balance" | "pretty" => "text-wrap",
            _ if value == "base" || is_tshirt(value) || is_arbitrary_length(value) => "font-size",
            _ => "text-color",
        },
        "decoration" => match value {
            "solid" | "double" | "dotted" | "dashed" | "wavy" => "decoration-style",
            "auto" | "from-font" => "decoration-thickness",
            _ if is_number(value) || is_arbitrary_length(value) => "decoration-thickness",
            _ => "decoration-color",
        },
        "bg" => background(value),
        "from" => gradient_stop(value, "gradient-from-pos", "gradient-from"),
        "via" => gradient_stop(value, "gradient-via-pos", "gradient-via"),
        "to" => gradient_stop(value, "gradient-to-pos", "gradient-to"),
        "divide-x" | "divide-y" if is_width(value) => {
            if family == "divide-x" {
                "divide-x"
            } else {
                "divide-y"
            }
        }
        "divide" => {
            if LINE_STYLES.contains(&value) {
                "divide-style"
            } else {
                "divide-color"
            }
        }
        "outline" => match value {
            "" | "none" | "dashed" | "dotted" | "double" | "solid" => "outline-style",
            _ if is_number(value) || is_arbitrary_length(value) => "outline-w",
            _ => "outline-color",
        },
        "ring" => {
            if is_width(value) {
                "ring-w"
            } else {
                "ring-color"
            }
        }
        "ring-offset" => {
            if is_number(value) || is_arbitrary_length(value) {
                "ring-offset-w"
            } else {
                "ring-offset-color"
            }
        }
        "shadow" => match value {
            "" | "inner" | "none" => "shadow",
            _ if is_tshirt(value) || is_arbitrary_shadow(value) => "shadow",
            _ => "shadow-color",
        },
        "stroke" => {
            if is_number(value) || is_arbitrary_length(value) {
                "stroke-w"
            } else {
                "stroke"
            }
        }
        "object" => match value {
            "contain" | "cover" | "fill" | "none" | "scale-down" => "object-fit",
            _ => "object-position",
        },
        "box" => match value {
            "border" | "content" => "box-sizing",
            _ => return None,
        },
        "list" => match value {
            "inside" | "outside" => "list-style-position",
            _ => "list-style-type",
        },
        "break" => match value {
            "normal" | "words" | "all" | "keep" => "word-break",
            _ => return None,
        },
        "transform" => match value {
            "" | "gpu" | "cpu" | "none" => "transform",
            _ => return None,
        },
        "filter" | "backdrop-filter" => match value {
            "" | "none" if family == "filter" => "filter",
            "" | "none" => "backdrop-filter",
            _ => return None,
        },
        "touch" => match value {
            "pan-x" | "pan-left" | "pan-right" => "touch-x",
            "pan-y" | "pan-up" | "pan-down" => "touch-y",
            "pinch-zoom" => "touch-pz",
            _ => "touch",
        },
        "snap" => match value {
            "none" | "x" | "y" | "both" => "snap-type",
            "mandatory" | "proximity" => "snap-strictness",
            "start" | "end" | "center" | "align-none" => "snap-align",
            "normal" | "always" => "snap-stop",
            _ => return None,
        },
        "table" => match value {
            "auto" | "fixed" => "table-layout",
            _ => return None,
        },
        _ => return None,
    };

    // Every family above needs a value except the ones that matched on "".
    let bare = matches!(
        group,
        "outline-style"
            | "shadow"
            | "transform"
            | "filter"
            | "backdrop-filter"
            | "ring-w"
            | "divide-x"
            | "divide-y"
    );
    if value.is_empty() && !bare {
        return None;
    }
    Some(group)
}

fn standalone(class: &str) -> Option<&'static str> {
    if let Some(group) = DISPLAY.contains(&class).then_some("display") {
        return Some(group);
    }

    let group = match class {
        "static" | "fixed" | "absolute" | "relative" | "sticky" => "position",
        "visible" | "invisible" | "collapse" => "visibility",
        "italic" | "not-italic" => "font-style",
        "antialiased" | "subpixel-antialiased" => "font-smoothing",
        "uppercase" | "lowercase" | "capitalize" | "normal-case" => "text-transform",
        "underline" | "overline" | "line-through" | "no-underline" => "text-decoration",
        "truncate" => "text-overflow",
        "isolate" | "isolation-auto" => "isolation",
        "sr-only" | "not-sr-only" => "sr",
        "container" => "container",
        "space-x-reverse" => "space-x-reverse",
        "space-y-reverse" => "space-y-reverse",
        "divide-x-reverse" => "divide-x-reverse",
        "divide-y-reverse" => "divide-y-reverse",
        "ring-inset" => "ring-w-inset",
        "scroll-auto" | "scroll-smooth" => "scroll-behavior",
        _ => return None,
    };
    Some(group)
}

fn named(table: &'static [&'static str], family: &str) -> Option<&'static str> {
    table.iter().find(|group| **group == family).copied()
}

fn border(value: &str, width: &'static str, color: &'static str) -> &'static str {
    if is_width(value) {
        return width;
    }
    match value {
        "collapse" | "separate" if width == "border-w" => "border-collapse",
        _ if width == "border-w" && LINE_STYLES.contains(&value) => "border-style",
        _ => color,
    }
}

fn background(value: &str) -> &'static str {
    match value {
        "fixed" | "local" | "scroll" => "bg-attachment",
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            "bg-repeat"
        }
        "auto" | "cover" | "contain" => "bg-size",
        "bottom" | "center" | "left" | "left-bottom" | "left-top" | "right" | "right-bottom"
        | "right-top" | "top" => "bg-position",
        "none" => "bg-image",
        _ if value.starts_with("clip-") => "bg-clip",
        _ if value.starts_with("origin-") => "bg-origin",
        _ if value.starts_with("gradient-to-") => "bg-image",
        _ if is_arbitrary_image(value) => "bg-image",
        _ if arbitrary_label(value) == Some("position") => "bg-position",
        _ if matches!(arbitrary_label(value), Some("length" | "size")) => "bg-size",
        _ => "bg-color",
    }
}

fn gradient_stop(value: &str, position: &'static str, color: &'static str) -> &'static str {
    if is_percent(value) || is_arbitrary_length(value) {
        position
    } else {
        color
    }
}

fn is_size(value: &str) -> bool {
    matches!(
        value,
        "px" | "auto" | "full" | "screen" | "min" | "max" | "fit" | "none" | "prose" | "svh"
            | "lvh" | "dvh" | "svw" | "lvw" | "dvw"
    ) || is_number(value)
        || is_tshirt(value)
        || arbitrary_inner(value).is_some()
        || value.starts_with("screen-")
}

/// Bare, numeric or arbitrary length: `border`, `border-2`, `border-[3px]`.
fn is_width(value: &str) -> bool {
    value.is_empty() || is_number(value) || is_arbitrary_length(value)
}

fn is_font_weight(value: &str) -> bool {
    matches!(
        value,
        "thin" | "extralight" | "light" | "normal" | "medium" | "semibold" | "bold"
            | "extrabold" | "black"
    ) || is_number(value)
        || arbitrary_inner(value).is_some_and(|inner| {
            inner.parse::<f64>().is_ok() || inner.starts_with("number:")
        })
}

fn is_number(value: &str) -> bool {
    !value.is_empty() && value.parse::<f64>().is_ok_and(f64::is_finite)
}

fn is_percent(value: &str) -> bool {
    value.strip_suffix('%').is_some_and(is_number)
}

/// `xs`, `sm`, `md`, `lg`, `xl` with an optional numeric multiplier (`2xl`, `2.5xl`).
fn is_tshirt(value: &str) -> bool {
    ["xs", "sm", "md", "lg", "xl"].iter().any(|size| {
        value
            .strip_suffix(size)
            .is_some_and(|scale| scale.is_empty() || is_number(scale))
    })
}

fn arbitrary_inner(value: &str) -> Option<&str> {
    value.strip_prefix('[')?.strip_suffix(']').filter(|inner| !inner.is_empty())
}

/// Type hint on an arbitrary value, like `length` in `[length:var(--w)]`.
fn arbitrary_label(value: &str) -> Option<&str> {
    let inner = arbitrary_inner(value)?;
    let (label, _) = inner.split_once(':')?;
    label.bytes().all(|b| b.is_ascii_lowercase() || b == b'-').then_some(label)
}

fn is_arbitrary_length(value: &str) -> bool {
    let Some(inner) = arbitrary_inner(value) else {
        return false;
    };
    if let Some(label) = arbitrary_label(value) {
        return label == "length";
    }
    inner == "0"
        || is_length(inner)
        || ["calc(", "min(", "max(", "clamp("].iter().any(|func| inner.starts_with(func))
}

fn is_length(token: &str) -> bool {
    let token = token.strip_prefix('-').unwrap_or(token);
    LENGTH_UNITS
        .iter()
        .any(|unit| token.strip_suffix(unit).is_some_and(is_number))
}

fn is_arbitrary_shadow(value: &str) -> bool {
    let Some(inner) = arbitrary_inner(value) else {
        return false;
    };
    if let Some(label) = arbitrary_label(value) {
        return label == "shadow";
    }
    let inner = inner.strip_prefix("inset_").unwrap_or(inner);
    let mut offsets = inner.split('_');
    let is_offset = |token: Option<&str>| token.is_some_and(|t| t == "0" || is_length(t));
    is_offset(offsets.next()) && is_offset(offsets.next())
}

fn is_arbitrary_image(value: &str) -> bool {
    let Some(inner) = arbitrary_inner(value) else {
        return false;
    };
    matches!(arbitrary_label(value), Some("image" | "url"))
        || inner.starts_with("url(")
        || inner.contains("gradient(")
}
