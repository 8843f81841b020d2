/// Merge class tokens into one class string. A later class replaces an earlier
/// one from the same utility family (`px-2` then `px-4`); unknown classes only
/// deduplicate.
pub fn cn<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut merged: Vec<(String, String)> = Vec::new();

    for token in tokens {
        for class in token.as_ref().split_whitespace() {
            let group = conflict_group(class);
            merged.retain(|(existing, _)| *existing != group);
            merged.push((group, class.to_string()));
        }
    }

    merged
        .into_iter()
        .map(|(_, class)| class)
        .collect::<Vec<_>>()
        .join(" ")
}

const DISPLAY: &[&str] = &[
    "block", "inline-block", "inline", "flex", "inline-flex", "grid", "inline-grid",
    "table", "contents", "hidden",
];

const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];

const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];

const FONT_WEIGHTS: &[&str] = &[
    "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold",
    "black",
];

// `text-*` utilities that are neither a size, an alignment nor a colour.
const TEXT_OVERFLOW: &[&str] = &["ellipsis", "clip"];
const TEXT_WRAP: &[&str] = &["wrap", "nowrap", "balance", "pretty"];

const SHADOW_SIZES: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];

const ROUNDED_SIZES: &[&str] = &["none", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];

const BORDER_WIDTHS: &[&str] = &["0", "2", "4", "8"];

// More specific prefixes come first: `gap-x-` must win over `gap-`.
const PREFIX_GROUPS: &[(&str, &str)] = &[
    ("min-w-", "min-w"),
    ("min-h-", "min-h"),
    ("max-w-", "max-w"),
    ("max-h-", "max-h"),
    ("w-", "w"),
    ("h-", "h"),
    ("size-", "size"),
    ("px-", "px"),
    ("py-", "py"),
    ("pt-", "pt"),
    ("pr-", "pr"),
    ("pb-", "pb"),
    ("pl-", "pl"),
    ("p-", "p"),
    ("mx-", "mx"),
    ("my-", "my"),
    ("mt-", "mt"),
    ("mr-", "mr"),
    ("mb-", "mb"),
    ("ml-", "ml"),
    ("m-", "m"),
    ("gap-x-", "gap-x"),
    ("gap-y-", "gap-y"),
    ("gap-", "gap"),
    ("bg-", "bg"),
    ("opacity-", "opacity"),
    ("ring-offset-", "ring-offset"),
    ("z-", "z"),
    ("leading-", "leading"),
    ("tracking-", "tracking"),
    ("justify-", "justify"),
    ("items-", "items"),
    ("duration-", "duration"),
    ("cursor-", "cursor"),
];

fn conflict_group(class: &str) -> String {
    let (variants, utility) = match class.rfind(':') {
        Some(idx) => class.split_at(idx + 1),
        None => ("", class),
    };
    let utility = utility.trim_start_matches('!');
    let bare = utility.strip_prefix('-').unwrap_or(utility);

    match utility_family(bare) {
        Some(family) => format!("{variants}{family}"),
        None => format!("{variants}{utility}"),
    }
}

fn utility_family(utility: &str) -> Option<&'static str> {
    if DISPLAY.contains(&utility) {
        return Some("display");
    }
    if POSITION.contains(&utility) {
        return Some("position");
    }
    if utility == "rounded" {
        return Some("rounded");
    }
    if utility == "shadow" {
        return Some("shadow");
    }
    if utility == "border" {
        return Some("border-w");
    }
    if let Some(rest) = utility.strip_prefix("rounded-") {
        return ROUNDED_SIZES.contains(&rest).then_some("rounded");
    }
    if let Some(rest) = utility.strip_prefix("shadow-") {
        return Some(if SHADOW_SIZES.contains(&rest) {
            "shadow"
        } else {
            "shadow-color"
        });
    }
    if let Some(rest) = utility.strip_prefix("text-") {
        return Some(if TEXT_SIZES.contains(&rest) {
            "text-size"
        } else if TEXT_ALIGN.contains(&rest) {
            "text-align"
        } else if TEXT_OVERFLOW.contains(&rest) {
            "text-overflow"
        } else if TEXT_WRAP.contains(&rest) {
            "text-wrap"
        } else {
            "text-color"
        });
    }
    if let Some(rest) = utility.strip_prefix("font-") {
        return Some(if FONT_WEIGHTS.contains(&rest) {
            "font-weight"
        } else {
            "font-family"
        });
    }
    if let Some(rest) = utility.strip_prefix("border-") {
        if BORDER_WIDTHS.contains(&rest) {
            return Some("border-w");
        }
        // Side specific borders (`border-t-2`) are left alone.
        if rest.len() > 1 && rest.as_bytes()[1] == b'-' {
            return None;
        }
        return Some("border-color");
    }

    PREFIX_GROUPS
        .iter()
        .find(|(prefix, _)| utility.starts_with(prefix))
        .map(|(_, family)| *family)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_tokens_in_order() {
        assert_eq!(cn(["flex items-center", "gap-2"]), "flex items-center gap-2");
    }

    #[test]
    fn test_skips_empty_tokens() {
        assert_eq!(cn(["", "  ", "rounded-md", ""]), "rounded-md");
    }

    #[test]
    fn test_deduplicates_unknown_classes() {
        assert_eq!(cn(["progress-track", "progress-track"]), "progress-track");
    }

    #[test]
    fn test_later_conflicting_class_wins() {
        assert_eq!(cn(["px-2 py-1", "px-4"]), "py-1 px-4");
        assert_eq!(cn(["bg-gray-200 h-4", "bg-blue-500"]), "h-4 bg-blue-500");
        assert_eq!(cn(["rounded-md", "rounded-full"]), "rounded-full");
        assert_eq!(cn(["rounded", "rounded-lg"]), "rounded-lg");
        assert_eq!(cn(["flex", "hidden"]), "hidden");
    }

    #[test]
    fn test_text_size_and_color_do_not_conflict() {
        assert_eq!(cn(["text-sm text-white", "text-lg"]), "text-white text-lg");
        assert_eq!(cn(["text-sm text-white", "text-black"]), "text-sm text-black");
    }

    #[test]
    fn test_text_layout_utilities_are_not_colors() {
        assert_eq!(cn(["text-white", "text-ellipsis"]), "text-white text-ellipsis");
        assert_eq!(cn(["text-white text-wrap", "text-nowrap"]), "text-white text-nowrap");
        assert_eq!(cn(["text-ellipsis", "text-clip"]), "text-clip");
    }

    #[test]
    fn test_shadow_size_and_color_do_not_conflict() {
        assert_eq!(cn(["shadow-lg", "shadow-red-500"]), "shadow-lg shadow-red-500");
        assert_eq!(cn(["shadow shadow-red-500", "shadow-md"]), "shadow-red-500 shadow-md");
        assert_eq!(cn(["shadow-red-500", "shadow-blue-500/50"]), "shadow-blue-500/50");
    }

    #[test]
    fn test_font_weight_and_family_do_not_conflict() {
        assert_eq!(cn(["font-mono font-medium", "font-bold"]), "font-mono font-bold");
    }

    #[test]
    fn test_variants_are_separate_groups() {
        assert_eq!(
            cn(["bg-primary hover:bg-primary/90", "bg-red-500"]),
            "hover:bg-primary/90 bg-red-500"
        );
        assert_eq!(
            cn(["hover:bg-primary/90", "hover:bg-red-600"]),
            "hover:bg-red-600"
        );
    }

    #[test]
    fn test_gap_axis_prefixes_are_distinct() {
        assert_eq!(cn(["gap-x-2 gap-2", "gap-4"]), "gap-x-2 gap-4");
    }

    #[test]
    fn test_border_width_and_color() {
        assert_eq!(cn(["border border-input", "border-2"]), "border-input border-2");
        assert_eq!(cn(["border-input", "border-red-500"]), "border-red-500");
        assert_eq!(cn(["border-t-2", "border-b-2"]), "border-t-2 border-b-2");
    }

    #[test]
    fn test_negative_and_important_modifiers() {
        assert_eq!(cn(["-mt-2", "mt-4"]), "mt-4");
        assert_eq!(cn(["w-full", "!w-1/2"]), "!w-1/2");
    }
}
