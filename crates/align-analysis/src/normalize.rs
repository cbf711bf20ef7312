//! Text normalization shared by extraction and classification.

/// Lower-case, strip punctuation other than hyphens and periods, collapse whitespace.
///
/// Hyphens survive so compounds like "real-world" and "hands-on" stay intact;
/// periods survive so abbreviations do too. Underscores are treated as punctuation.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() || c == '-' || c == '.' {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_collapses_whitespace() {
        assert_eq!(normalize("  Apply   LCA\ttools \n"), "apply lca tools");
    }

    #[test]
    fn keeps_hyphens_and_periods() {
        assert_eq!(
            normalize("Real-world, hands-on (e.g. field work)!"),
            "real-world hands-on e.g. field work"
        );
    }

    #[test]
    fn strips_underscores_and_symbols() {
        assert_eq!(normalize("life_cycle & assessment: 100%"), "life cycle assessment 100");
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        assert_eq!(normalize(" \t\n "), "");
    }
}
