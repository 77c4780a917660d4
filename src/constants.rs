pub const WINDOW_WIDTH: i32 = 1280;           // Default window width (pixels)
pub const WINDOW_HEIGHT: i32 = 720;           // Default window height (pixels)
pub const FPS: u32 = 60;                      // Frames per second

pub const AUTOPLAY_INTERVAL: f32 = 5.0;       // Default delay between automatic advances (seconds)
pub const SWIPE_THRESHOLD: f32 = 50.0;        // Minimum horizontal displacement for a swipe (pixels)

pub const SLIDE_FADE_DURATION: f32 = 0.4;     // Fade-in when a slide becomes active (seconds)
pub const STARTUP_FADE_DURATION: f32 = 0.3;   // Whole-frame fade at launch (seconds)

pub const INDICATOR_RADIUS: f32 = 6.0;        // Indicator dot radius (pixels)
pub const INDICATOR_HIT_RADIUS: f32 = 11.0;   // Clickable radius around each dot (pixels)
pub const INDICATOR_SPACING: f32 = 22.0;      // Distance between indicator centers (pixels)
pub const INDICATOR_STRIP_HEIGHT: f32 = 48.0; // Height reserved below the slide area (pixels)

pub const NAV_BUTTON_WIDTH: f32 = 64.0;       // Width of the prev/next hit zones (pixels)
pub const NAV_BUTTON_HEIGHT: f32 = 96.0;      // Height of the prev/next hit zones (pixels)
