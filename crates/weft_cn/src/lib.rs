//! Themeable component set for `weft`
//!
//! Components are state-free builders: props in, a [`Node`](weft_core::Node)
//! render description out. Styling is utility-class based; variant props map
//! to class lists through [`variant::VariantMap`] and caller overrides are
//! merged last with tailwind-style conflict resolution, so an override always
//! wins its utility category.
//!
//! # Example
//!
//! ```
//! use weft_cn::prelude::*;
//!
//! let node = button("Delete")
//!     .variant(ButtonVariant::Destructive)
//!     .size(ButtonSize::Large)
//!     .class("w-full")
//!     .render();
//! let html = node.to_html();
//! ```
//!
//! Interactive behavior (positioning, focus trapping, toast stacking) is
//! delegated to host-supplied capabilities defined in [`weft_core`].

pub mod class_list;
pub mod components;
pub mod error;
pub mod merge;
pub mod registry;
pub mod variant;

pub use class_list::ClassList;
pub use components::*;
pub use error::ConfigurationError;
pub use merge::{cn, merge_list};
pub use registry::{catalog, ComponentSpec, PropKind, PropSpec};
pub use variant::{VariantAxis, VariantMap};

/// The commonly used names in one import
pub mod prelude {
    pub use crate::components::*;
    pub use crate::error::ConfigurationError;
    pub use crate::merge::cn;
    pub use weft_core::{
        Align, Corner, FlowPositioner, FocusScope, Node, Placement, Point, Positioner, Rect,
        Side, Size, ToastMessage, ToastSurface,
    };
}
