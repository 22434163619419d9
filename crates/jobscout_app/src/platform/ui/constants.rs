//! Field names and fixed labels for the search UI.

/// Query-parameter names. Sent to the API verbatim, so they must match
/// what the upstream job board expects.
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_LOCATION: &str = "location";
pub const FIELD_FULL_TIME: &str = "full_time";

pub const APP_TITLE: &str = "JobScout";
pub const LABEL_DESCRIPTION: &str = "Description";
pub const LABEL_LOCATION: &str = "Location";
pub const LABEL_FULL_TIME_ON: &str = "[x] Full time";
pub const LABEL_FULL_TIME_OFF: &str = "[ ] Full time";
pub const HINT_LINE: &str = "Tab: next field | PgUp/PgDn: page | Esc: quit";
pub const LOADING_LINE: &str = "Loading...";
pub const ERROR_LINE: &str = "Error. Try refreshing.";
