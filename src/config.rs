/// Extra px added below the header when deciding which section is current.
pub const LOOKAHEAD_OFFSET_PX: f64 = 100.0;

/// Quiet window for coalescing scroll events before recomputing the active link.
pub const SCROLL_DEBOUNCE_MS: u32 = 10;

/// Quiet window before mirroring the active link into the URL hash.
pub const HASH_SYNC_DEBOUNCE_MS: u32 = 1000;

/// Delay after mount before honoring a hash already present in the URL,
/// so images and fonts settle the layout first.
pub const HASH_LOAD_SETTLE_MS: u32 = 100;

/// Viewport width above which the mobile menu is force-closed.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Scroll offset past which the header switches to its translucent style.
pub const HEADER_SCROLLED_THRESHOLD_PX: f64 = 100.0;

/// Scroll offset below which a freshly loaded page counts as "at the top"
/// and the home link is forced active.
pub const HOME_FORCE_THRESHOLD_PX: f64 = 100.0;

/// Delay before the scroll-reveal observer starts watching elements.
pub const REVEAL_START_DELAY_MS: u32 = 500;

/// Step interval and step count for the hero stat counter animation.
pub const COUNTER_TICK_MS: u32 = 40;
pub const COUNTER_STEPS: u32 = 50;
