//! # Weft Theme System
//!
//! Design tokens, built-in presets, TOML configuration, and CSS variable
//! generation for the Weft component library.
//!
//! # Quick Start
//!
//! ```rust
//! use weft_theme::{ColorScheme, ColorToken, ThemePreset, ThemeState};
//!
//! // Resolve and install the theme once at app startup
//! ThemeState::install(ThemePreset::Zinc.bundle(), ColorScheme::Dark);
//!
//! // Read tokens during render
//! let theme = ThemeState::get();
//! let primary = theme.color(ColorToken::Primary);
//! ```
//!
//! # Architecture
//!
//! - **Tokens** ([`ColorTokens`], [`SpacingTokens`], [`RadiusTokens`],
//!   [`ShadowTokens`], [`TypographyTokens`], [`OpacityTokens`]) are the
//!   atomic values of the design system.
//! - **Presets** ([`ThemePreset`]) expand base palettes into full light/dark
//!   [`ThemeBundle`]s.
//! - **Configuration** ([`ThemeConfig`]) selects a preset and applies token
//!   overrides from a TOML document, resolved before install.
//! - **State** ([`ThemeState`]) is the process-wide, single-writer singleton:
//!   installed once, swapped whole, never mutated token-by-token.
//! - **CSS** ([`stylesheet`]) renders the bundle as the CSS-variable
//!   stylesheet consumers load alongside the components.

pub mod config;
pub mod css;
pub mod presets;
pub mod state;
pub mod theme;
pub mod tokens;

pub use config::{ColorOverrides, ThemeConfig, ThemeError};
pub use css::stylesheet;
pub use presets::{preset_bundle, ThemePreset};
pub use state::ThemeState;
pub use theme::{ColorScheme, Theme, ThemeBundle};
pub use tokens::*;
