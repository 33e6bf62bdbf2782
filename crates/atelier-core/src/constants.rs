// Shared layout/animation/scroll tuning constants used by the web front-end.

// Title content
pub const TITLE_TEXT: &str = "atelier republic";
pub const BASE_SPACING: f32 = 16.0; // default gap after each glyph (px)
pub const SPACE_WIDTH: f32 = 64.0; // gap at the word boundary (px)

// Sample override table for TITLE_TEXT: (glyph index, spacing after it)
pub const TITLE_SPACING_OVERRIDES: [(usize, f32); 4] =
    [(2, 0.0), (3, 0.0), (7, SPACE_WIDTH), (11, 0.0)];

// Scatter sampling ranges
pub const SCATTER_X_RANGE: f32 = 500.0; // ±px
pub const SCATTER_Y_RANGE: f32 = 300.0; // ±px
pub const SCATTER_ROTATION_RANGE: f32 = 30.0; // ±degrees
pub const SCATTER_SCALE_MIN: f32 = 0.5;
pub const SCATTER_SCALE_MAX: f32 = 1.0;
pub const SCATTER_OPACITY: f32 = 0.7;

// Reveal spring
pub const SPRING_STIFFNESS: f32 = 100.0;
pub const SPRING_DAMPING: f32 = 50.0;
pub const SPRING_MASS: f32 = 1.0;
pub const SPRING_REST_DELTA: f32 = 0.01; // position epsilon considered at rest
pub const SPRING_REST_SPEED: f32 = 0.01; // velocity epsilon considered at rest
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 1.0 / 240.0;

// Reveal choreography
pub const REVEAL_SETTLE_DELAY_SEC: f32 = 0.2; // hold at scatter before combining
pub const REVEAL_STAGGER_SEC: f32 = 0.03; // per-glyph start delay

// Smooth scroll
pub const SCROLL_SMOOTHING: f32 = 0.1; // lerp per 60Hz frame
pub const SCROLL_REFERENCE_FPS: f32 = 60.0;
pub const SCROLL_SNAP_EPSILON: f32 = 0.5; // px
pub const SCROLL_MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches

// Wheel normalization
pub const WHEEL_LINE_HEIGHT_PX: f32 = 100.0 / 6.0;
pub const WHEEL_MAX_DELTA_PX: f32 = 100.0;
