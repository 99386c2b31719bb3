//! Icon path data constants
//!
//! Each constant holds the inner content of a 24x24 Lucide glyph. Unused
//! icons are eliminated by dead code elimination.

pub const CHECK: &str = r#"<path d="M20 6 9 17l-5-5"/>"#;

pub const CHECK_CIRCLE: &str =
    r#"<path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/><polyline points="22 4 12 14.01 9 11.01"/>"#;

pub const CHEVRON_DOWN: &str = r#"<path d="m6 9 6 6 6-6"/>"#;

pub const CHEVRON_UP: &str = r#"<path d="m18 15-6-6-6 6"/>"#;

pub const CHEVRON_RIGHT: &str = r#"<path d="m9 18 6-6-6-6"/>"#;

pub const CHEVRON_LEFT: &str = r#"<path d="m15 18-6-6 6-6"/>"#;

pub const CIRCLE: &str = r#"<circle cx="12" cy="12" r="10"/>"#;

pub const CIRCLE_ALERT: &str = r#"<circle cx="12" cy="12" r="10"/><line x1="12" x2="12" y1="8" y2="12"/><line x1="12" x2="12.01" y1="16" y2="16"/>"#;

pub const CIRCLE_X: &str = r#"<circle cx="12" cy="12" r="10"/><line x1="15" x2="9" y1="9" y2="15"/><line x1="9" x2="15" y1="9" y2="15"/>"#;

pub const INFO: &str =
    r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#;

pub const LOADER: &str = r#"<path d="M21 12a9 9 0 1 1-6.219-8.56"/>"#;

pub const MINUS: &str = r#"<path d="M5 12h14"/>"#;

pub const PLUS: &str = r#"<path d="M5 12h14"/><path d="M12 5v14"/>"#;

pub const SEARCH: &str = r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#;

pub const TRIANGLE_ALERT: &str = r#"<path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z"/><line x1="12" x2="12" y1="9" y2="13"/><line x1="12" x2="12.01" y1="17" y2="17"/>"#;

pub const X: &str =
    r#"<line x1="18" x2="6" y1="6" y2="18"/><line x1="6" x2="18" y1="6" y2="18"/>"#;
