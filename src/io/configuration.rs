//! Tool defaults and fixed output settings

// Tile generator grid defaults
/// Default number of grid columns
pub const DEFAULT_COLS: i32 = 8;
/// Default number of grid rows
pub const DEFAULT_ROWS: i32 = 5;
/// Default edge length of each saved tile in pixels
pub const DEFAULT_TILE_SIZE: u32 = 256;
/// Default number of columns in the preview contact sheet
pub const DEFAULT_PREVIEW_COLS: i32 = 8;

// Contact sheet appearance
/// Gap between tiles and around the sheet border in pixels
pub const PREVIEW_PADDING: u32 = 2;
/// Background color showing through the padding
pub const PREVIEW_BACKGROUND: [u8; 3] = [30, 30, 30];

// Output naming
/// Folder under the user's home directory that receives tile runs
pub const DESKTOP_DIR_NAME: &str = "Desktop";
/// Prefix of each timestamped run folder
pub const OUTPUT_FOLDER_PREFIX: &str = "image_tiles_";
/// `chrono` format of the run folder timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
/// File name of the contact sheet inside a run folder
pub const PREVIEW_FILE_NAME: &str = "preview.png";

// Block generator defaults
/// Default number of logical blocks horizontally
pub const DEFAULT_BLOCK_WIDTH: u32 = 128;
/// Default number of logical blocks vertically
pub const DEFAULT_BLOCK_HEIGHT: u32 = 128;
/// Default edge length of one block in pixels
pub const DEFAULT_BLOCK_SIZE: u32 = 10;
/// Default number of images to generate
pub const DEFAULT_IMAGE_COUNT: u32 = 10;
/// Default output file name prefix
pub const DEFAULT_OUT_PREFIX: &str = "random_image_";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
