//! Admin UI Sync Core
//!
//! Pure logic behind the admin page helpers: sidebar highlighting, tab/query
//! synchronisation and the numeric input filter. Nothing here touches the DOM;
//! callers describe the elements they found and apply the returned updates.

pub mod config;
pub mod nav;
pub mod numeric;
pub mod path;
pub mod tabs;

// Re-export commonly used items
pub use config::SyncConfig;
pub use nav::{is_nav_anchor, match_nav, NavUpdate};
pub use numeric::{digits_only, filter_numeric};
pub use path::{normalize_path, page_base, query_param, resolve_href};
pub use tabs::{resolve_group, IndicatorUpdate, TabGroupConfig, TabGroupUpdate, TabSource};
