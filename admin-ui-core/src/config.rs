//! Page-level configuration.
//!
//! Every field has a default matching the admin templates, so an empty object
//! (or no object at all) gives the stock behaviour.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SyncConfig {
    /// Sidebar link candidates; non-anchor matches are ignored.
    pub nav_selector: String,
    pub tab_group_selector: String,
    /// Tabs, queried inside each group.
    pub tab_selector: String,
    pub numeric_selector: String,
    pub active_class: String,
    pub default_tab_param: String,
    /// Element inside an indicator that receives the label, if present.
    pub indicator_emphasis: String,
    pub indicator_placeholder: String,
    /// `EnvFilter` directive for console logging.
    pub log_filter: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            nav_selector: ".sidebar__nav .nav__item".to_string(),
            tab_group_selector: ".tabs".to_string(),
            tab_selector: ".tab".to_string(),
            numeric_selector: r#"input[data-numeric="true"]"#.to_string(),
            active_class: "is-active".to_string(),
            default_tab_param: "tab".to_string(),
            indicator_emphasis: "strong".to_string(),
            indicator_placeholder: "-".to_string(),
            log_filter: "warn".to_string(),
        }
    }
}
