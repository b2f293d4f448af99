//! Tab group state derived from the URL query.

use crate::path::{non_empty, query_param, resolve_href, url_param};
use url::Url;

/// Query parameter name override on a tab group.
pub const TAB_PARAM_ATTR: &str = "data-tab-param";
/// Fallback active value on a tab group.
pub const DEFAULT_TAB_ATTR: &str = "data-default-tab";
/// Selector of the element showing the active tab label.
pub const INDICATOR_ATTR: &str = "data-indicator";
/// Explicit value on a single tab.
pub const TAB_VALUE_ATTR: &str = "data-tab";

/// Per-group settings read from the group's data attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGroupConfig {
    pub param: String,
    pub default_tab: Option<String>,
    pub indicator: Option<String>,
}

impl TabGroupConfig {
    /// Build from an attribute lookup. Empty attribute values count as unset.
    pub fn from_attributes<F>(default_param: &str, attr: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            param: non_empty(attr(TAB_PARAM_ATTR)).unwrap_or_else(|| default_param.to_string()),
            default_tab: non_empty(attr(DEFAULT_TAB_ATTR)),
            indicator: non_empty(attr(INDICATOR_ATTR)),
        }
    }
}

/// What the DOM layer found for one tab element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabSource {
    /// `data-tab`
    pub value: Option<String>,
    /// `href` attribute as written
    pub href: Option<String>,
    /// Raw text content
    pub label: String,
}

impl TabSource {
    /// The tab's value: `data-tab`, else the group parameter in its `href`.
    fn resolved_value(&self, param: &str, origin: &Url) -> Option<String> {
        non_empty(self.value.clone()).or_else(|| {
            let href = self.href.as_deref().unwrap_or("");
            non_empty(resolve_href(href, origin).and_then(|url| url_param(&url, param)))
        })
    }
}

/// Text to write into a group's indicator element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorUpdate {
    pub selector: String,
    pub text: String,
}

/// Outcome of resolving one tab group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGroupUpdate {
    /// Index of the tab to mark; every other tab gets the class removed.
    pub active: Option<usize>,
    pub active_value: String,
    pub indicator: Option<IndicatorUpdate>,
}

impl TabGroupUpdate {
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}

/// Resolve which tab of a group is active.
///
/// The active value comes from the query string, then the group default, then
/// the first tab's own value. The first tab whose value equals it is marked.
/// Returns `None` for a group without tabs; such a group is left untouched.
pub fn resolve_group(
    config: &TabGroupConfig,
    query: &str,
    tabs: &[TabSource],
    origin: &Url,
    placeholder: &str,
) -> Option<TabGroupUpdate> {
    let first = tabs.first()?;

    let active_value = non_empty(query_param(query, &config.param))
        .or_else(|| config.default_tab.clone())
        .or_else(|| first.resolved_value(&config.param, origin))
        .unwrap_or_default();

    let active = tabs.iter().position(|tab| {
        tab.resolved_value(&config.param, origin).unwrap_or_default() == active_value
    });

    let label = active
        .map(|index| tabs[index].label.trim())
        .filter(|label| !label.is_empty());

    let indicator = config.indicator.as_ref().map(|selector| IndicatorUpdate {
        selector: selector.clone(),
        text: label.unwrap_or(placeholder).to_string(),
    });

    Some(TabGroupUpdate {
        active,
        active_value,
        indicator,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn origin() -> Url {
        Url::parse("https://ops.example.com").unwrap()
    }

    fn config(indicator: Option<&str>) -> TabGroupConfig {
        TabGroupConfig {
            param: "tab".to_string(),
            default_tab: None,
            indicator: indicator.map(str::to_string),
        }
    }

    fn data_tab(value: &str, label: &str) -> TabSource {
        TabSource {
            value: Some(value.to_string()),
            href: None,
            label: label.to_string(),
        }
    }

    fn href_tab(href: &str, label: &str) -> TabSource {
        TabSource {
            value: None,
            href: Some(href.to_string()),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_query_selects_data_tab() {
        let tabs = [data_tab("summary", "Summary"), data_tab("reports", "  Reports\n")];
        let group = config(Some("#tab-chip"));
        let update = resolve_group(&group, "?tab=reports", &tabs, &origin(), "-").unwrap();

        assert_eq!(update.active, Some(1));
        assert_eq!(update.active_value, "reports");
        assert_eq!(
            update.indicator,
            Some(IndicatorUpdate {
                selector: "#tab-chip".to_string(),
                text: "Reports".to_string(),
            })
        );
    }

    #[test]
    fn test_custom_param_reads_href_values() {
        let tabs = [
            href_tab("/batch?view=queued", "Queued"),
            href_tab("/batch?view=failed&page=1", "Failed"),
        ];
        let group = TabGroupConfig {
            param: "view".to_string(),
            ..config(None)
        };
        let update = resolve_group(&group, "?view=failed", &tabs, &origin(), "-").unwrap();

        assert_eq!(update.active, Some(1));
        assert!(update.indicator.is_none());
    }

    #[test]
    fn test_data_tab_overrides_href() {
        let tabs = [TabSource {
            value: Some("explicit".to_string()),
            href: Some("?tab=implicit".to_string()),
            label: "X".to_string(),
        }];
        let update = resolve_group(&config(None), "?tab=implicit", &tabs, &origin(), "-").unwrap();
        assert_eq!(update.active, None);
    }

    #[test]
    fn test_default_tab_used_without_query() {
        let tabs = [data_tab("a", "A"), data_tab("b", "B")];
        let group = TabGroupConfig {
            default_tab: Some("b".to_string()),
            ..config(None)
        };
        assert_eq!(resolve_group(&group, "", &tabs, &origin(), "-").unwrap().active, Some(1));
        // An empty query value falls through to the default as well.
        assert_eq!(resolve_group(&group, "?tab=", &tabs, &origin(), "-").unwrap().active, Some(1));
    }

    #[test]
    fn test_first_tab_is_active_when_nothing_configured() {
        let tabs = [href_tab("?tab=overview", "Overview"), href_tab("?tab=logs", "Logs")];
        let update = resolve_group(&config(Some(".chip")), "", &tabs, &origin(), "-").unwrap();

        assert_eq!(update.active, Some(0));
        assert_eq!(update.active_value, "overview");
        assert_eq!(update.indicator.unwrap().text, "Overview");
    }

    #[test]
    fn test_first_tab_fallback_prefers_data_tab_over_href() {
        // First tab's `data-tab` wins over the parameter in its href, the
        // same precedence used for every other tab.
        let tabs = [
            TabSource {
                value: Some("x".to_string()),
                href: Some("?tab=y".to_string()),
                label: "X".to_string(),
            },
            data_tab("y", "Y"),
        ];
        let update = resolve_group(&config(None), "", &tabs, &origin(), "-").unwrap();

        assert_eq!(update.active_value, "x");
        assert_eq!(update.active, Some(0));
    }

    #[test]
    fn test_unknown_query_value_marks_nothing() {
        let tabs = [data_tab("a", "A"), data_tab("b", "B")];
        let group = config(Some(".chip"));
        let update = resolve_group(&group, "?tab=zzz", &tabs, &origin(), "-").unwrap();

        assert_eq!(update.active, None);
        assert!((0..tabs.len()).all(|i| !update.is_active(i)));
        assert_eq!(update.indicator.unwrap().text, "-");
    }

    #[test]
    fn test_at_most_one_tab_active_with_duplicate_values() {
        let tabs = [href_tab("/a", "One"), href_tab("/b", "Two"), data_tab("x", "X")];
        let update = resolve_group(&config(None), "", &tabs, &origin(), "-").unwrap();

        // Both href tabs resolve to "", only the first is marked.
        assert_eq!(update.active_value, "");
        let marked: Vec<usize> = (0..tabs.len()).filter(|&i| update.is_active(i)).collect();
        assert_eq!(marked, vec![0]);
    }

    #[test]
    fn test_blank_label_shows_placeholder() {
        let tabs = [data_tab("a", "   ")];
        let update = resolve_group(&config(Some(".chip")), "", &tabs, &origin(), "-").unwrap();
        assert_eq!(update.active, Some(0));
        assert_eq!(update.indicator.unwrap().text, "-");
    }

    #[test]
    fn test_malformed_href_yields_empty_value() {
        let tabs = [data_tab("a", "A"), href_tab("http://[::1", "Broken")];
        let update = resolve_group(&config(None), "?tab=a", &tabs, &origin(), "-").unwrap();
        assert_eq!(update.active, Some(0));
    }

    #[test]
    fn test_empty_group_is_skipped() {
        assert_eq!(resolve_group(&config(Some(".chip")), "?tab=a", &[], &origin(), "-"), None);
    }

    #[test]
    fn test_config_from_attributes() {
        let attrs: HashMap<&str, &str> = [
            (TAB_PARAM_ATTR, "view"),
            (DEFAULT_TAB_ATTR, ""),
            (INDICATOR_ATTR, "#current-view"),
        ]
        .into_iter()
        .collect();
        let group =
            TabGroupConfig::from_attributes("tab", |name| attrs.get(name).map(|v| v.to_string()));

        assert_eq!(group.param, "view");
        assert_eq!(group.default_tab, None);
        assert_eq!(group.indicator.as_deref(), Some("#current-view"));

        let group = TabGroupConfig::from_attributes("tab", |_| None);
        assert_eq!(group, config(None));
    }
}
