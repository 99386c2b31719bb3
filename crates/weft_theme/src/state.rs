//! Global theme state singleton
//!
//! `ThemeState` is initialized once at application startup and read by
//! components during render. There is no per-token mutation API: changing
//! theme means resolving a complete snapshot and swapping it in atomically,
//! so concurrent renders never observe a partially-applied theme.

use std::sync::{Arc, OnceLock, RwLock};

use weft_core::Color;

use crate::presets::ThemePreset;
use crate::theme::{ColorScheme, Theme, ThemeBundle};
use crate::tokens::*;

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// One fully-resolved theme: the bundle plus the active scheme's tokens
#[derive(Clone, Debug)]
struct Snapshot {
    bundle: ThemeBundle,
    scheme: ColorScheme,
}

impl Snapshot {
    fn theme(&self) -> &Theme {
        self.bundle.for_scheme(self.scheme)
    }
}

/// Global theme state - read by components during render
pub struct ThemeState {
    snapshot: RwLock<Arc<Snapshot>>,
}

impl ThemeState {
    /// Install the global theme (call once at app startup).
    ///
    /// Installing again replaces the whole snapshot atomically; this is the
    /// only supported way to change theme at runtime.
    pub fn install(bundle: ThemeBundle, scheme: ColorScheme) {
        tracing::debug!(theme = bundle.name, scheme = scheme.as_str(), "installing theme");
        let snapshot = Arc::new(Snapshot { bundle, scheme });

        match THEME_STATE.get() {
            None => {
                let _ = THEME_STATE.set(ThemeState {
                    snapshot: RwLock::new(snapshot),
                });
            }
            Some(state) => {
                *state.snapshot.write().unwrap() = snapshot;
            }
        }
    }

    /// Install the default Weft preset in light mode
    pub fn install_default() {
        Self::install(ThemePreset::Weft.bundle(), ColorScheme::Light);
    }

    /// Get the global theme state instance
    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not installed. Call ThemeState::install() at app startup.")
    }

    /// Try to get the global theme state (returns None if not installed)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    fn read(&self) -> Arc<Snapshot> {
        self.snapshot.read().unwrap().clone()
    }

    // ========== Color Scheme ==========

    /// Get the current color scheme
    pub fn scheme(&self) -> ColorScheme {
        self.read().scheme
    }

    /// Switch the color scheme by swapping a re-resolved snapshot
    pub fn set_scheme(&self, scheme: ColorScheme) {
        let mut guard = self.snapshot.write().unwrap();
        if guard.scheme != scheme {
            tracing::debug!(
                "switching scheme from {:?} to {:?}",
                guard.scheme,
                scheme
            );
            *guard = Arc::new(Snapshot {
                bundle: guard.bundle.clone(),
                scheme,
            });
        }
    }

    /// Toggle between light and dark mode
    pub fn toggle_scheme(&self) {
        let current = self.scheme();
        self.set_scheme(current.toggle());
    }

    // ========== Token Access ==========

    /// Get a color token value
    pub fn color(&self, token: ColorToken) -> Color {
        self.read().theme().colors.get(token)
    }

    /// Get all color tokens for the active scheme
    pub fn colors(&self) -> ColorTokens {
        self.read().theme().colors.clone()
    }

    /// Get a spacing token value
    pub fn spacing_value(&self, token: SpacingToken) -> f32 {
        self.read().theme().spacing.get(token)
    }

    /// Get a radius token value
    pub fn radius(&self, token: RadiusToken) -> f32 {
        self.read().theme().radii.get(token)
    }

    /// Get all shadow tokens for the active scheme
    pub fn shadows(&self) -> ShadowTokens {
        self.read().theme().shadows.clone()
    }

    /// Get all typography tokens
    pub fn typography(&self) -> TypographyTokens {
        self.read().theme().typography.clone()
    }

    /// Get an opacity token value
    pub fn opacity_value(&self, token: OpacityToken) -> f32 {
        self.read().theme().opacities.get(token)
    }

    /// Get a consistent copy of the full active theme.
    ///
    /// Use this when reading several tokens for one render pass so a
    /// concurrent `install` cannot interleave.
    pub fn active_theme(&self) -> Theme {
        self.read().theme().clone()
    }

    /// The installed bundle (both schemes), for stylesheet generation
    pub fn bundle(&self) -> ThemeBundle {
        self.read().bundle.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // THEME_STATE is process-wide, so everything that touches it lives in
    // one test to avoid cross-test ordering.
    #[test]
    fn test_install_and_swap() {
        assert!(ThemeState::try_get().is_none());

        ThemeState::install(ThemePreset::Neutral.bundle(), ColorScheme::Light);
        let state = ThemeState::get();
        assert_eq!(state.scheme(), ColorScheme::Light);
        let light_primary = state.color(ColorToken::Primary);

        state.set_scheme(ColorScheme::Dark);
        assert_eq!(state.scheme(), ColorScheme::Dark);
        assert_ne!(state.color(ColorToken::Primary), light_primary);

        // Re-install replaces the bundle in place
        ThemeState::install(ThemePreset::Zinc.bundle(), ColorScheme::Light);
        assert_eq!(state.bundle().name, "Zinc");
        assert_eq!(state.scheme(), ColorScheme::Light);
    }
}
