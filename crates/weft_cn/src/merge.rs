//! Utility-class merging
//!
//! [`cn`] joins class groups in precedence order (base, variant, caller
//! override) and resolves conflicts between utility classes that target the
//! same CSS concern: the last-occurring token wins. Tokens the classifier
//! does not recognize pass through untouched; visual degradation beats a
//! hard failure in a presentation layer.
//!
//! # Example
//!
//! ```
//! use weft_cn::cn;
//!
//! assert_eq!(cn(["px-4 py-2 text-red-500", "text-blue-500"]), "px-4 py-2 text-blue-500");
//! assert_eq!(cn(["hover:bg-muted", "bg-primary"]), "hover:bg-muted bg-primary");
//! ```

use rustc_hash::FxHashMap;

use crate::class_list::ClassList;

/// A conflict group: utilities in the same group style the same concern
type Group = &'static str;

/// Merge class groups, last-conflicting-token wins.
///
/// Idempotent and pure: `cn([merged])` returns `merged` unchanged.
pub fn cn<'a>(groups: impl IntoIterator<Item = &'a str>) -> String {
    merge_list(&ClassList::from_groups(groups)).to_string()
}

/// Merge an already-assembled class list
pub fn merge_list(list: &ClassList) -> ClassList {
    // Index of the surviving occurrence per exact token and per
    // (modifier context, conflict group) key. Tombstoned slots stay in
    // `kept` so surviving tokens keep their input order.
    let mut kept: Vec<Option<&str>> = Vec::with_capacity(list.len());
    let mut by_exact: FxHashMap<&str, usize> = FxHashMap::default();
    let mut by_conflict: FxHashMap<(String, Group), usize> = FxHashMap::default();

    for token in list.tokens() {
        if let Some(&idx) = by_exact.get(token) {
            kept[idx] = None;
        }

        let (context, base) = split_modifiers(token);
        if let Some(group) = classify(base) {
            if let Some(idx) = by_conflict.remove(&(context.clone(), group)) {
                kept[idx] = None;
            }
            for rival in extra_conflicts(group) {
                if let Some(idx) = by_conflict.remove(&(context.clone(), *rival)) {
                    kept[idx] = None;
                }
            }
            by_conflict.insert((context, group), kept.len());
        }

        by_exact.insert(token, kept.len());
        kept.push(Some(token));
    }

    let mut merged = ClassList::new();
    for token in kept.into_iter().flatten() {
        merged.push_token(token);
    }
    merged
}

/// Split `hover:focus:px-2` into a canonical modifier context and the base
/// utility. Modifiers are sorted so declaration order never affects
/// conflict detection. Brackets guard arbitrary values that contain `:`.
fn split_modifiers(token: &str) -> (String, &str) {
    let mut depth = 0usize;
    let mut last_colon = None;
    for (i, c) in token.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => last_colon = Some(i),
            _ => {}
        }
    }

    match last_colon {
        None => (String::new(), token),
        Some(i) => {
            let mut modifiers: Vec<&str> = token[..i].split(':').collect();
            modifiers.sort_unstable();
            (modifiers.join(":"), &token[i + 1..])
        }
    }
}

/// Additional groups a utility of `group` removes, beyond its own group.
///
/// Shorthands clear their axis and side variants (`p-4` clears an earlier
/// `px-2`), while a side variant never clears an earlier shorthand (`px-2`
/// after `p-4` keeps both, CSS source order breaks the tie in the caller's
/// favor).
fn extra_conflicts(group: Group) -> &'static [Group] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl"],
        "px" => &["pl", "pr"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml"],
        "mx" => &["ml", "mr"],
        "my" => &["mt", "mb"],
        "size" => &["w", "h"],
        "gap" => &["gap-x", "gap-y"],
        "inset" => &["inset-x", "inset-y", "top", "right", "bottom", "left"],
        "inset-x" => &["left", "right"],
        "inset-y" => &["top", "bottom"],
        "overflow" => &["overflow-x", "overflow-y"],
        _ => &[],
    }
}

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl",
];

const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

const TEXT_ALIGNS: &[&str] = &["left", "center", "right", "justify", "start", "end"];

/// Map a base utility (modifiers stripped) to its conflict group.
///
/// Returns `None` for tokens outside the supported vocabulary; those pass
/// through the merge untouched.
fn classify(base: &str) -> Option<Group> {
    // Negative-value utilities (-m-2, -top-1) classify like their
    // positive counterparts
    let base = base.strip_prefix('-').unwrap_or(base);

    // Exact-match families first
    let exact = match base {
        "block" | "inline" | "inline-block" | "flex" | "inline-flex" | "grid"
        | "inline-grid" | "contents" | "hidden" => Some("display"),
        "static" | "fixed" | "absolute" | "relative" | "sticky" => Some("position"),
        "flex-row" | "flex-row-reverse" | "flex-col" | "flex-col-reverse" => Some("flex-dir"),
        "flex-wrap" | "flex-wrap-reverse" | "flex-nowrap" => Some("flex-wrap"),
        "flex-1" | "flex-auto" | "flex-initial" | "flex-none" => Some("flex"),
        "grow" | "grow-0" => Some("grow"),
        "shrink" | "shrink-0" => Some("shrink"),
        "underline" | "overline" | "line-through" | "no-underline" => Some("decoration"),
        "truncate" => Some("text-overflow"),
        "border" => Some("border-w"),
        "rounded" => Some("rounded"),
        "shadow" | "shadow-none" => Some("shadow"),
        "ring" | "ring-inset" => Some("ring-w"),
        "outline" | "outline-none" => Some("outline"),
        "transition" | "transition-none" => Some("transition"),
        _ => None,
    };
    if exact.is_some() {
        return exact;
    }

    // text-* splits into size, alignment, wrapping, and color
    if let Some(rest) = base.strip_prefix("text-") {
        if FONT_SIZES.contains(&rest) {
            return Some("font-size");
        }
        if TEXT_ALIGNS.contains(&rest) {
            return Some("text-align");
        }
        if matches!(rest, "wrap" | "nowrap" | "balance" | "pretty") {
            return Some("text-wrap");
        }
        if matches!(rest, "ellipsis" | "clip") {
            return Some("text-overflow");
        }
        // Arbitrary values: a leading digit reads as a length (font size)
        if let Some(arbitrary) = rest.strip_prefix('[') {
            if arbitrary.starts_with(|c: char| c.is_ascii_digit()) {
                return Some("font-size");
            }
        }
        return Some("text-color");
    }

    // font-* splits into weight and family
    if let Some(rest) = base.strip_prefix("font-") {
        if FONT_WEIGHTS.contains(&rest) {
            return Some("font-weight");
        }
        return Some("font-family");
    }

    // border width vs color: numeric or side-numeric reads as width
    if let Some(rest) = base.strip_prefix("border-") {
        if rest.chars().all(|c| c.is_ascii_digit()) {
            return Some("border-w");
        }
        if let Some((side, amount)) = rest.split_once('-') {
            if matches!(side, "t" | "r" | "b" | "l" | "x" | "y")
                && amount.chars().all(|c| c.is_ascii_digit())
            {
                return Some("border-w");
            }
        }
        if matches!(rest, "t" | "r" | "b" | "l" | "x" | "y") {
            return Some("border-w");
        }
        return Some("border-color");
    }

    // ring width vs offset vs color
    if let Some(rest) = base.strip_prefix("ring-") {
        if rest.chars().all(|c| c.is_ascii_digit()) {
            return Some("ring-w");
        }
        if rest.starts_with("offset-") {
            return Some("ring-offset");
        }
        return Some("ring-color");
    }

    // Prefix families; longest prefixes first so gap-x- beats gap-
    const PREFIXES: &[(&str, Group)] = &[
        ("items-", "items"),
        ("justify-", "justify"),
        ("self-", "self"),
        ("content-", "content"),
        ("gap-x-", "gap-x"),
        ("gap-y-", "gap-y"),
        ("gap-", "gap"),
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
        ("min-w-", "min-w"),
        ("max-w-", "max-w"),
        ("min-h-", "min-h"),
        ("max-h-", "max-h"),
        ("w-", "w"),
        ("h-", "h"),
        ("size-", "size"),
        ("bg-", "bg"),
        ("rounded-", "rounded"),
        ("shadow-", "shadow"),
        ("outline-", "outline"),
        ("opacity-", "opacity"),
        ("cursor-", "cursor"),
        ("pointer-events-", "pointer-events"),
        ("select-", "select"),
        ("overflow-x-", "overflow-x"),
        ("overflow-y-", "overflow-y"),
        ("overflow-", "overflow"),
        ("z-", "z"),
        ("transition-", "transition"),
        ("duration-", "duration"),
        ("ease-", "ease"),
        ("delay-", "delay"),
        ("leading-", "leading"),
        ("tracking-", "tracking"),
        ("whitespace-", "whitespace"),
        ("underline-offset-", "underline-offset"),
        ("align-", "align"),
        ("inset-x-", "inset-x"),
        ("inset-y-", "inset-y"),
        ("inset-", "inset"),
        ("top-", "top"),
        ("right-", "right"),
        ("bottom-", "bottom"),
        ("left-", "left"),
        ("translate-x-", "translate-x"),
        ("translate-y-", "translate-y"),
        ("grid-cols-", "grid-cols"),
        ("grid-rows-", "grid-rows"),
    ];

    PREFIXES
        .iter()
        .find(|(prefix, _)| base.starts_with(prefix))
        .map(|(_, group)| *group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_conflicting_token_wins() {
        assert_eq!(cn(["text-red-500", "text-blue-500"]), "text-blue-500");
        assert_eq!(cn(["bg-primary bg-secondary"]), "bg-secondary");
    }

    #[test]
    fn test_non_conflicting_tokens_concatenate() {
        assert_eq!(
            cn(["inline-flex items-center", "justify-center"]),
            "inline-flex items-center justify-center"
        );
    }

    #[test]
    fn test_font_size_and_text_color_do_not_conflict() {
        assert_eq!(cn(["text-sm text-red-500"]), "text-sm text-red-500");
        assert_eq!(cn(["text-sm", "text-lg"]), "text-lg");
    }

    #[test]
    fn test_padding_shorthand_clears_sides() {
        assert_eq!(cn(["px-2 py-1", "p-4"]), "p-4");
        // A side after a shorthand keeps both; source order wins in CSS
        assert_eq!(cn(["p-4", "px-2"]), "p-4 px-2");
        assert_eq!(cn(["pl-1 pr-1", "px-3"]), "px-3");
    }

    #[test]
    fn test_size_clears_width_and_height() {
        assert_eq!(cn(["w-4 h-4", "size-5"]), "size-5");
        assert_eq!(cn(["size-5", "w-4"]), "size-5 w-4");
    }

    #[test]
    fn test_modifier_contexts_conflict_separately() {
        assert_eq!(
            cn(["bg-primary hover:bg-muted", "bg-destructive"]),
            "hover:bg-muted bg-destructive"
        );
        assert_eq!(cn(["hover:bg-muted", "hover:bg-accent"]), "hover:bg-accent");
    }

    #[test]
    fn test_modifier_order_is_canonicalized() {
        assert_eq!(cn(["hover:focus:p-2", "focus:hover:p-4"]), "focus:hover:p-4");
    }

    #[test]
    fn test_border_width_vs_color() {
        assert_eq!(cn(["border border-input"]), "border border-input");
        assert_eq!(cn(["border", "border-2"]), "border-2");
        assert_eq!(cn(["border-input", "border-destructive"]), "border-destructive");
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        assert_eq!(
            cn(["btn-frobnicate", "bg-primary", "btn-frobnicate2"]),
            "btn-frobnicate bg-primary btn-frobnicate2"
        );
    }

    #[test]
    fn test_exact_duplicates_collapse_to_last() {
        assert_eq!(cn(["custom a custom"]), "a custom");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "px-2 py-1 p-4 text-red-500 hover:text-blue-500 text-sm custom custom",
            "inline-flex items-center justify-center gap-2 rounded-md text-sm \
             font-medium bg-primary text-primary-foreground hover:bg-primary/90",
            "w-4 h-4 size-5 border border-2 border-input ring-1 ring-ring",
        ];
        for input in inputs {
            let once = cn([input]);
            let twice = cn([once.as_str()]);
            assert_eq!(once, twice, "merge should be idempotent for {input:?}");
        }
    }

    #[test]
    fn test_arbitrary_values() {
        assert_eq!(cn(["bg-primary", "bg-[#0a0a0a]"]), "bg-[#0a0a0a]");
        assert_eq!(cn(["text-[13px]", "text-sm"]), "text-sm");
        assert_eq!(cn(["text-[#fff] text-sm"]), "text-[#fff] text-sm");
    }

    #[test]
    fn test_bracketed_colon_is_not_a_modifier() {
        let (context, base) = split_modifiers("bg-[url(http://x/y.png)]");
        assert_eq!(context, "");
        assert_eq!(base, "bg-[url(http://x/y.png)]");
    }

    #[test]
    fn test_opacity_suffix_still_conflicts_on_group() {
        assert_eq!(cn(["bg-primary/90", "bg-accent/50"]), "bg-accent/50");
    }

    #[test]
    fn test_merge_is_deterministic() {
        let groups = ["p-4 text-sm bg-primary", "p-2 text-destructive"];
        assert_eq!(cn(groups), cn(groups));
    }
}
