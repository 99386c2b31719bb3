//! Shadow tokens
//!
//! Shadows are carried as CSS box-shadow strings; dark themes use stronger
//! alpha because shadows read weaker on dark surfaces.

/// Semantic shadow token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowToken {
    Sm,
    Md,
    Lg,
}

impl ShadowToken {
    /// Stable kebab-case name, used for CSS variables
    pub fn name(self) -> &'static str {
        match self {
            Self::Sm => "shadow-sm",
            Self::Md => "shadow-md",
            Self::Lg => "shadow-lg",
        }
    }
}

/// Complete set of shadow tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowTokens {
    pub shadow_sm: &'static str,
    pub shadow_md: &'static str,
    pub shadow_lg: &'static str,
}

impl ShadowTokens {
    /// Get a shadow by token key
    pub fn get(&self, token: ShadowToken) -> &'static str {
        match token {
            ShadowToken::Sm => self.shadow_sm,
            ShadowToken::Md => self.shadow_md,
            ShadowToken::Lg => self.shadow_lg,
        }
    }

    /// Shadows tuned for light surfaces
    pub fn light() -> Self {
        Self {
            shadow_sm: "0 1px 2px 0 rgb(0 0 0 / 0.05)",
            shadow_md: "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
            shadow_lg: "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
        }
    }

    /// Shadows tuned for dark surfaces
    pub fn dark() -> Self {
        Self {
            shadow_sm: "0 1px 2px 0 rgb(0 0 0 / 0.3)",
            shadow_md: "0 4px 6px -1px rgb(0 0 0 / 0.4), 0 2px 4px -2px rgb(0 0 0 / 0.4)",
            shadow_lg: "0 10px 15px -3px rgb(0 0 0 / 0.5), 0 4px 6px -4px rgb(0 0 0 / 0.5)",
        }
    }
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self::light()
    }
}
