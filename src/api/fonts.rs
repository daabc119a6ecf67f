use tracing::{debug, warn};

/// Answers whether a font family can be used by the drawing backend.
pub trait FontCatalog {
    fn has_family(&self, family: &str) -> bool;
}

/// Families tried, in order, when the requested one is unavailable.
pub const FALLBACK_FONT_FAMILIES: [&str; 4] = ["Segoe UI", "Arial", "Calibri", "DejaVu Sans"];

/// Final fallback; generic families always resolve.
pub const GENERIC_FONT_FAMILY: &str = "sans-serif";

const GENERIC_FAMILIES: [&str; 5] = ["sans-serif", "serif", "monospace", "cursive", "fantasy"];

/// Fixed family list, used when no backend catalog is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFontCatalog {
    families: Vec<String>,
}

impl StaticFontCatalog {
    #[must_use]
    pub fn new<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            families: families.into_iter().map(Into::into).collect(),
        }
    }

    /// A catalog that knows only the generic families.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            families: Vec::new(),
        }
    }

    #[must_use]
    pub fn families(&self) -> &[String] {
        &self.families
    }
}

impl Default for StaticFontCatalog {
    fn default() -> Self {
        Self::new([
            "Arial",
            "Helvetica",
            "Times New Roman",
            "Garamond",
            "Calibri",
            "Segoe UI",
            "DejaVu Sans",
            "Verdana",
            "Georgia",
            "Courier New",
        ])
    }
}

impl FontCatalog for StaticFontCatalog {
    fn has_family(&self, family: &str) -> bool {
        self.families
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(family))
    }
}

#[must_use]
pub fn is_generic_family(family: &str) -> bool {
    GENERIC_FAMILIES
        .iter()
        .any(|generic| generic.eq_ignore_ascii_case(family.trim()))
}

/// Requested family if available, else the first available fallback, else
/// the generic sans-serif family. Never fails.
#[must_use]
pub fn resolve_font_family(requested: &str, catalog: &dyn FontCatalog) -> String {
    let requested = requested.trim();
    if !requested.is_empty() && (is_generic_family(requested) || catalog.has_family(requested)) {
        return requested.to_owned();
    }

    let resolved = FALLBACK_FONT_FAMILIES
        .iter()
        .copied()
        .find(|family| catalog.has_family(family))
        .unwrap_or(GENERIC_FONT_FAMILY);
    if requested.is_empty() {
        debug!(resolved, "no font family requested");
    } else {
        warn!(requested, resolved, "font family unavailable; using fallback");
    }
    resolved.to_owned()
}

#[cfg(test)]
mod tests {
    use super::{StaticFontCatalog, resolve_font_family};

    #[test]
    fn known_and_generic_families_resolve_to_themselves() {
        let catalog = StaticFontCatalog::default();
        assert_eq!(resolve_font_family("Georgia", &catalog), "Georgia");
        assert_eq!(resolve_font_family("serif", &StaticFontCatalog::empty()), "serif");
    }

    #[test]
    fn fallback_chain_is_ordered() {
        let catalog = StaticFontCatalog::new(["DejaVu Sans", "Arial"]);
        assert_eq!(resolve_font_family("Comic Neue", &catalog), "Arial");
        let catalog = StaticFontCatalog::new(["DejaVu Sans"]);
        assert_eq!(resolve_font_family("Comic Neue", &catalog), "DejaVu Sans");
        assert_eq!(
            resolve_font_family("Comic Neue", &StaticFontCatalog::empty()),
            "sans-serif"
        );
    }
}
