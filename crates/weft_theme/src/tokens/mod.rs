//! Design tokens
//!
//! Tokens are the atomic values that make up the design system:
//! - Colors
//! - Spacing (4px-based scale)
//! - Border radii
//! - Shadows
//! - Typography (families, sizes, weights)
//! - Opacity

mod color;
mod opacity;
mod radius;
mod shadow;
mod spacing;
mod typography;

pub use color::*;
pub use opacity::*;
pub use radius::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;
