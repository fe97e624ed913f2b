use serde::{Deserialize, Serialize};

/// Default template for unit display callsigns
pub const DEFAULT_CALLSIGN_TEMPLATE: &str = "{department}{callsign1}-{callsign2}";

/// Default template for record case numbers
pub const DEFAULT_CASE_NUMBER_TEMPLATE: &str = "{year}-{department}-{id}";

/// Admin-configured settings for the dispatch instance
///
/// Both fields are template strings in the `{placeholder}` syntax consumed
/// by the renderer. An empty string means "no template configured": unit
/// display callsigns render empty and case numbers fall back to the bare
/// decimal number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CadSettings {
    /// Template for unit display callsigns
    pub callsign_template: String,

    /// Template for record case numbers
    pub case_number_template: String,
}

impl Default for CadSettings {
    fn default() -> Self {
        Self {
            callsign_template: DEFAULT_CALLSIGN_TEMPLATE.to_string(),
            case_number_template: DEFAULT_CASE_NUMBER_TEMPLATE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = CadSettings::default();
        assert_eq!(settings.callsign_template, DEFAULT_CALLSIGN_TEMPLATE);
        assert_eq!(settings.case_number_template, DEFAULT_CASE_NUMBER_TEMPLATE);
    }
}
