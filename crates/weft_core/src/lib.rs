//! # Weft Core
//!
//! Shared primitives for the Weft component library:
//!
//! - [`Color`]: rgba color value with hex parsing and CSS serialization
//! - Geometry: [`Point`], [`Size`], [`Rect`], [`Placement`] for anchored positioning
//! - Render tree: [`Node`] / [`Element`] describe what a component renders;
//!   the host framework mounts the tree
//! - Host capabilities: [`Positioner`], [`FocusScope`], [`ToastSurface`] are
//!   the seams where the host framework's primitives plug in
//!
//! Weft components never render, position, or schedule anything themselves.
//! They produce a [`Node`] tree and consume capabilities; everything stays a
//! pure, synchronous function of its inputs.

pub mod capability;
pub mod color;
pub mod geometry;
pub mod node;

pub use capability::{FlowPositioner, FocusScope, Positioner, ToastMessage, ToastSurface};
pub use color::Color;
pub use geometry::{Align, Corner, Placement, Point, Rect, Side, Size};
pub use node::{el, raw, text, Element, Node};
