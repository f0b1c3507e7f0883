//! Crate constants and runtime configuration defaults

/// Content of out-of-bounds reads on a freshly built grid
pub const DEFAULT_BORDER_VALUE: &str = "";

// Input discovery
/// Extension of grid text files picked up from a directory target
pub const INPUT_EXTENSION: &str = "txt";

// Output settings
/// Suffix added to rendered image filenames
pub const OUTPUT_SUFFIX: &str = "_grid";
/// Extension of rendered images
pub const OUTPUT_EXTENSION: &str = "png";
/// Default edge length of one rendered cell in pixels
pub const DEFAULT_RENDER_SCALE: u32 = 8;
/// Largest accepted edge length of one rendered cell in pixels
pub const MAX_RENDER_SCALE: u32 = 64;

/// Colours assigned to tokens in sorted order, cycling when exhausted
pub const PALETTE: [[u8; 4]; 12] = [
    [31, 119, 180, 255],
    [255, 127, 14, 255],
    [44, 160, 44, 255],
    [214, 39, 40, 255],
    [148, 103, 189, 255],
    [140, 86, 75, 255],
    [227, 119, 194, 255],
    [127, 127, 127, 255],
    [188, 189, 34, 255],
    [23, 190, 207, 255],
    [0, 0, 0, 255],
    [255, 255, 255, 255],
];

/// Colour of border cells and holes
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
