// Window size constants
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;
pub const DEFAULT_WINDOW_TITLE: &str = "SideDiff";

/// Application name and metadata constants
pub const APP_QUALIFIER: &str = "app";
pub const APP_ORGANIZATION: &str = "SideDiff";
pub const APP_NAME: &str = "sidediff";

/// App related Magic Numbers
pub const MAX_RECENT_FILES: usize = 10;
pub const REPORT_CACHE_CAPACITY: usize = 4;
pub const DEFAULT_FONT_SIZE: f32 = 13.0;
