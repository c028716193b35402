//! Configuration and constants for the viewer.

/// Event field holding the measured duration
pub const DURATION_FIELD: &str = "duration";

/// Event field holding the profiler's own color slot
pub const COLOR_ID_FIELD: &str = "colorId";

/// Event field holding an index into the document's category list
pub const CATEGORY_INDEX_FIELD: &str = "catIdx";

/// Event field holding the category name itself (non-indexed exports)
pub const CATEGORY_NAME_FIELD: &str = "category";

/// Default pie chart canvas size in pixels
pub const DEFAULT_CHART_WIDTH: u32 = 400;
pub const DEFAULT_CHART_HEIGHT: u32 = 400;

/// Foreground used on colored duration cells
pub const ROW_TEXT_COLOR: &str = "#FFFFFF";

/// Default page title for rendered views
pub const DEFAULT_TITLE: &str = "Profiler Trace View";
