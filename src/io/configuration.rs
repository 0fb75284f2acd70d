//! Generation constants and runtime configuration defaults

// Canvas defaults used when neither width nor height is requested
/// Default canvas width in pixels
pub const DEFAULT_WIDTH: u32 = 1920;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: u32 = 1080;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension
pub const MAX_CANVAS_DIMENSION: u32 = 16_384;

/// Walker gives up sliding over visited tiles after this many steps per tile
pub const MAX_SLIDE_FACTOR: usize = 4;

// Default values for configurable parameters
/// Fixed seed for reproducible corner, brush and noise selection
pub const DEFAULT_SEED: u64 = 42;

/// Default number of images per run
pub const DEFAULT_COUNT: usize = 1;

/// Inside color used when none is given
pub const DEFAULT_INSIDE_COLOR: &str = "#29ab87";
/// Outside color used when none is given
pub const DEFAULT_OUTSIDE_COLOR: &str = "#282c35";

// Output settings
/// Extension of generated files
pub const OUTPUT_EXTENSION: &str = "png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
