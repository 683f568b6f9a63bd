//! Core enums used throughout the application.

use serde::{Deserialize, Serialize};

/// Target page size offered in the dropdown.
///
/// The presets map directly to cpdf size tokens; `Custom` is the free-text
/// escape whose dimensions the user types verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSizeChoice {
    /// A4, portrait orientation.
    #[default]
    A4Portrait,
    /// A4, landscape orientation.
    A4Landscape,
    /// Free-form dimensions entered in the custom size field.
    Custom,
}

impl PageSizeChoice {
    /// All choices, in dropdown order.
    pub const ALL: [PageSizeChoice; 3] = [
        PageSizeChoice::A4Portrait,
        PageSizeChoice::A4Landscape,
        PageSizeChoice::Custom,
    ];

    /// Resolve the selection to the size argument passed to cpdf.
    ///
    /// Presets resolve to their token. `Custom` resolves to the free-text
    /// value verbatim, or `None` when the field is empty.
    pub fn resolve(self, custom: &str) -> Option<String> {
        match self {
            PageSizeChoice::A4Portrait => Some("a4portrait".to_string()),
            PageSizeChoice::A4Landscape => Some("a4landscape".to_string()),
            PageSizeChoice::Custom => {
                if custom.is_empty() {
                    None
                } else {
                    Some(custom.to_string())
                }
            }
        }
    }

    /// Whether the custom size entry is shown for this choice.
    pub fn needs_custom_entry(self) -> bool {
        matches!(self, PageSizeChoice::Custom)
    }
}

impl std::fmt::Display for PageSizeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageSizeChoice::A4Portrait => write!(f, "a4portrait"),
            PageSizeChoice::A4Landscape => write!(f, "a4landscape"),
            PageSizeChoice::Custom => write!(f, "Other (e.g. 297mm 210mm)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_resolve_to_tokens() {
        assert_eq!(
            PageSizeChoice::A4Portrait.resolve(""),
            Some("a4portrait".to_string())
        );
        assert_eq!(
            PageSizeChoice::A4Landscape.resolve("ignored"),
            Some("a4landscape".to_string())
        );
    }

    #[test]
    fn custom_resolves_verbatim() {
        assert_eq!(
            PageSizeChoice::Custom.resolve("297mm 210mm"),
            Some("297mm 210mm".to_string())
        );
    }

    #[test]
    fn empty_custom_resolves_to_none() {
        assert_eq!(PageSizeChoice::Custom.resolve(""), None);
    }

    #[test]
    fn only_custom_needs_entry() {
        assert!(PageSizeChoice::Custom.needs_custom_entry());
        assert!(!PageSizeChoice::A4Portrait.needs_custom_entry());
        assert!(!PageSizeChoice::A4Landscape.needs_custom_entry());
    }
}
