//! The component set
//!
//! Each module follows the same shape: typed variant enums with a
//! `classes()` table, a [`VariantMap`](crate::variant::VariantMap) built
//! from those enums for string-driven resolution, and a builder whose
//! `render()` produces a [`Node`](weft_core::Node) description for the
//! host renderer.

pub mod alert;
pub mod badge;
pub mod button;
pub mod checkbox;
pub mod dialog;
pub mod icon;
pub mod input;
pub mod label;
pub mod select;
mod shared;
pub mod toast;
pub mod tooltip;

pub use alert::{alert, AlertBuilder, AlertVariant};
pub use badge::{badge, BadgeBuilder, BadgeVariant};
pub use button::{button, ButtonBuilder, ButtonSize, ButtonVariant};
pub use checkbox::{checkbox, CheckboxBuilder};
pub use dialog::{dialog, DialogBuilder};
pub use icon::{icon, icon_named, IconBuilder, IconSize};
pub use input::{input, InputBuilder};
pub use label::{label, LabelBuilder};
pub use select::{select, SelectBuilder};
pub use toast::{toast, ToastBuilder, ToastVariant, DEFAULT_DURATION_MS};
pub use tooltip::{tooltip, TooltipBuilder};
