//! Border radius tokens

/// Semantic radius token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    Sm,
    Md,
    Lg,
    Xl,
    Full,
}

impl RadiusToken {
    /// Stable kebab-case name, used for CSS variables
    pub fn name(self) -> &'static str {
        match self {
            Self::Sm => "radius-sm",
            Self::Md => "radius-md",
            Self::Lg => "radius-lg",
            Self::Xl => "radius-xl",
            Self::Full => "radius-full",
        }
    }
}

/// Complete set of radius tokens
#[derive(Clone, Debug, PartialEq)]
pub struct RadiusTokens {
    pub radius_sm: f32,
    pub radius_md: f32,
    pub radius_lg: f32,
    pub radius_xl: f32,
    pub radius_full: f32,
}

impl RadiusTokens {
    /// Get a radius value by token key
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::Sm => self.radius_sm,
            RadiusToken::Md => self.radius_md,
            RadiusToken::Lg => self.radius_lg,
            RadiusToken::Xl => self.radius_xl,
            RadiusToken::Full => self.radius_full,
        }
    }

    /// Scale every radius except `full` by a factor.
    ///
    /// Used by theme configuration to soften or sharpen the whole system
    /// without redefining individual tokens.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            radius_sm: self.radius_sm * factor,
            radius_md: self.radius_md * factor,
            radius_lg: self.radius_lg * factor,
            radius_xl: self.radius_xl * factor,
            radius_full: self.radius_full,
        }
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            radius_sm: 4.0,
            radius_md: 6.0,
            radius_lg: 8.0,
            radius_xl: 12.0,
            radius_full: 9999.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_leaves_full_alone() {
        let radii = RadiusTokens::default().scaled(1.5);
        assert_eq!(radii.radius_md, 9.0);
        assert_eq!(radii.radius_full, 9999.0);
    }
}
