/// Shared constants for the sheet pipeline.

/// Placeholder substituted for sheet cells the shop owner left blank,
/// so templates downstream never see an empty field.
pub const UNSET_SENTINEL: &str = "未設定";

/// Header cell text (any case) that marks the header row when scanning
/// past the sheet's leading descriptive rows.
pub const HEADER_MARKER: &str = "id";

/// Fetch timeout applied when the config does not set one.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;
