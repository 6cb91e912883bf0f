use std::time::Duration;

// ============================================================================
// Field
// ============================================================================

pub const FIELD_WIDTH: i32 = 240; // pixels
pub const FIELD_HEIGHT: i32 = 240; // pixels
pub const SPAWN_MARGIN: i32 = 20; // distance outside the field edge where pursuers appear

// ============================================================================
// Entity Identifiers
// ============================================================================

// Layout of the presentation identifier range
pub const BACKDROP_NEAR_ID: u32 = 0;
pub const BACKDROP_FAR_ID: u32 = 1;
pub const NOTIFICATION_ID: u32 = 2;
pub const PURSUER_ID_BASE: u32 = 3;
pub const PURSUER_CAPACITY: usize = 120;
pub const PLAYER_ID: u32 = PURSUER_ID_BASE + PURSUER_CAPACITY as u32;

// ============================================================================
// Player
// ============================================================================

pub const PLAYER_START_X: i32 = 120;
pub const PLAYER_START_Y: i32 = 120;

// Hitbox corners relative to the player position
pub const PLAYER_HITBOX_MIN: (i32, i32) = (-3, -4);
pub const PLAYER_HITBOX_MAX: (i32, i32) = (6, 8);

// ============================================================================
// Pursuers
// ============================================================================

pub const INITIAL_PURSUERS: usize = 10;
pub const PURSUER_HALF_EXTENT: i32 = 2; // hitbox is position +/- this on both axes

pub const PURSUER_TICK: Duration = Duration::from_millis(16);
pub const WOBBLE_FRAMES: u32 = 40; // frames [0, 40) wobble on the spot
pub const PHASE_FRAMES: u32 = 60; // frames [40, 60) chase, then wrap
pub const CHASE_STEP: i32 = 1;
pub const FLEE_STEP: i32 = 2;

// ============================================================================
// Timing
// ============================================================================

pub const SPAWN_INTERVAL: Duration = Duration::from_secs(1);
pub const RESET_DELAY: Duration = Duration::from_secs(5);

// ============================================================================
// Sprites
// ============================================================================

// Glyph cell size in the font bank
pub const GLYPH_WIDTH: i32 = 6;
pub const GLYPH_HEIGHT: i32 = 8;

// Offset from an entity position to the top-left corner of its sprite
pub const SPRITE_ANCHOR: (i32, i32) = (-3, -4);

// Viewport cels inside the font bank
pub const PURSUER_CEL: (i32, i32) = (3 * GLYPH_WIDTH, 15 * GLYPH_HEIGHT);
pub const PLAYER_CEL: (i32, i32) = (10 * GLYPH_WIDTH, 14 * GLYPH_HEIGHT);
pub const GHOST_CEL: (i32, i32) = PURSUER_CEL;

// ============================================================================
// Backdrop
// ============================================================================

pub const BACKDROP_CENTER: (i32, i32) = (64, 64);
pub const BACKDROP_NEAR_RADIUS: f64 = 30.0;
pub const BACKDROP_FAR_RADIUS: f64 = 15.0;
pub const BACKDROP_DRIFT_PER_FRAME: f64 = 0.025; // radians

// ============================================================================
// Notifications
// ============================================================================

pub const GREETING_TEXT: &str = "Better run for it!";
pub const DEATH_TEXT: &str = "Oh damn!";
