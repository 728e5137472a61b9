pub const RENDER_WIDTH: i32 = 1280;           // Width of the page framebuffer
pub const RENDER_HEIGHT: i32 = 800;           // Height of the page framebuffer
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const IMAGE_POOL_SIZE: usize = 13;        // Number of images in the rotation
pub const INIT_WAIT_MS: u64 = 1500;           // Before the first change
pub const FADE_WAIT_MS: u64 = 3000;           // Between subsequent changes
pub const FADE_GAP_MS: u64 = 500;             // Between fade out and the next fade in
pub const FADE_DURATION: f32 = 0.6;           // Opacity animation length (seconds)

pub const IMAGE_DIR: &str = "images/slideshow";
pub const IMAGE_PREFIX: &str = "image";
pub const IMAGE_SUFFIX: &str = ".png";

pub const TAB_HEIGHT: i32 = 48;               // Height of the tab strip
pub const TAB_WIDTH: i32 = 220;
pub const PANEL_MARGIN: i32 = 24;
