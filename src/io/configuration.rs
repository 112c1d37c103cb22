//! Fixed visual constants and runtime configuration defaults

// Canvas geometry
/// Logical canvas width
pub const CANVAS_WIDTH: u32 = 550;
/// Logical canvas height
pub const CANVAS_HEIGHT: u32 = 550;

/// Base length unit every field dimension is a multiple of
pub const SCALE: f64 = 60.0;

/// Clock increment per animation frame
pub const TIME_STEP: f64 = 0.02;

// Field layout
/// Largest absolute row and column index of a field lattice
pub const GRID_RADIUS: i32 = 4;
/// Lattice spacing as a multiple of `SCALE * field_scale`
pub const SPACING_FACTOR: f64 = 0.8;
/// Field boundary radius as a multiple of `SCALE * field_scale`
pub const BOUNDARY_FACTOR: f64 = 2.5;
/// Base tile size as a multiple of `SCALE * field_scale`
pub const TILE_SIZE_FACTOR: f64 = 0.4;
/// Fractional tile size reduction at the field boundary
pub const TILE_SHRINK: f64 = 0.3;

// Composition
/// Scale of the central field
pub const PRIMARY_FIELD_SCALE: f64 = 1.5;
/// Scale of the two rotated fields
pub const SECONDARY_FIELD_SCALE: f64 = 0.8;
/// Vertical distance of the rotated fields from the canvas centre
pub const SECONDARY_FIELD_OFFSET: f64 = 100.0;
/// Rotation of the secondary fields about the canvas centre (30°)
pub const SECONDARY_FIELD_ROTATION: f64 = std::f64::consts::FRAC_PI_6;
/// Rate at which the secondary fields drift through the cycle relative to the clock
pub const SECONDARY_TIME_RATE: f64 = 0.3;

// Background
/// Background saturation in percent
pub const BACKGROUND_SATURATION: f64 = 15.0;
/// Background lightness in percent
pub const BACKGROUND_LIGHTNESS: f64 = 92.0;

// Default values for configurable parameters
/// Frames rendered when none are requested
pub const DEFAULT_FRAMES: u64 = 150;
/// Delay between GIF animation frames
pub const DEFAULT_FRAME_DELAY_MS: u32 = 20;
/// Device pixels per logical unit
pub const DEFAULT_PIXEL_RATIO: u32 = 1;
/// Largest supported device pixel ratio
pub const MAX_PIXEL_RATIO: u32 = 4;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
