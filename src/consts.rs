//! Shared constants for the page behavior layer.

// ── Scroll tracking ─────────────────────────────────────────────

/// Lookahead added to the scroll offset before comparing against section tops, in CSS pixels.
pub const SECTION_LOOKAHEAD_PX: f64 = 180.0;

/// Scroll offset above which the sticky nav bar is considered scrolled, in CSS pixels.
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 8.0;

// ── Reveal ──────────────────────────────────────────────────────

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.14;

/// Percentage of viewport height trimmed from the bottom of the observer root.
pub const REVEAL_BOTTOM_MARGIN_PCT: f64 = 8.0;

// ── Contact form ────────────────────────────────────────────────

/// Minimum trimmed message length accepted by the contact form.
pub const MIN_MESSAGE_CHARS: usize = 10;

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

// ── Class names ─────────────────────────────────────────────────

pub const CLASS_DARK: &str = "dark";
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_NAV_SCROLLED: &str = "nav-scrolled";
pub const CLASS_ACTIVE_LINK: &str = "is-active";
pub const CLASS_VISIBLE: &str = "is-visible";

/// Classes marking a form field as invalid.
pub const FIELD_ERROR_CLASSES: [&str; 3] = ["border-rose-400", "focus:border-rose-400", "focus:ring-rose-400/30"];

/// Status region palette for a failed submission.
pub const STATUS_ERROR_CLASSES: [&str; 6] = [
    "border-rose-200",
    "bg-rose-50",
    "text-rose-700",
    "dark:border-rose-900/60",
    "dark:bg-rose-950/40",
    "dark:text-rose-300",
];

/// Status region palette for an accepted submission.
pub const STATUS_SUCCESS_CLASSES: [&str; 6] = [
    "border-emerald-200",
    "bg-emerald-50",
    "text-emerald-700",
    "dark:border-emerald-900/60",
    "dark:bg-emerald-950/40",
    "dark:text-emerald-300",
];
