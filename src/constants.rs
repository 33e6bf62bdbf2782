/// Page hooks and front-end tuning constants.
///
/// Element ids and attribute names are the contract with the static markup;
/// keep them in sync with `index.html`.
// Hero title
pub const HERO_CONTAINER_ID: &str = "hero";
pub const HERO_TITLE_REF_ID: &str = "hero-title-ref"; // hidden text used for font metrics
pub const HERO_TITLE_ID: &str = "hero-title"; // host for the animated glyph spans
pub const GLYPH_CLASS: &str = "hero-glyph";

// Scroll-driven section fades
pub const FADE_SELECTOR: &str = "[data-scroll-fade]";
pub const FADE_ATTR: &str = "data-scroll-fade"; // optional "<enter>, <exit>" offsets

// Reveal frame clamp (seconds); avoids a jump after the tab was hidden
pub const REVEAL_MAX_FRAME_DT_SEC: f32 = 0.05;

// Touch drags shorter than this are treated as taps (px)
pub const TOUCH_DEADZONE_PX: f32 = 0.5;
