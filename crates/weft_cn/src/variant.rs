//! Variant maps and resolution
//!
//! Every component declares a [`VariantMap`]: base classes plus one
//! [`VariantAxis`] per variant prop, in precedence order (size before intent
//! before state). The typed component enums are the source the maps are
//! built from, so the typed and string-driven paths cannot drift.
//!
//! # Example
//!
//! ```
//! use weft_cn::variant::{VariantAxis, VariantMap};
//!
//! let map = VariantMap::new("chip", "inline-flex rounded-full")
//!     .axis(
//!         VariantAxis::new("size")
//!             .option("sm", "px-2 text-xs")
//!             .option("md", "px-3 text-sm")
//!             .default_value("md"),
//!     );
//!
//! let classes = map.resolve(&[("size", "sm")]).unwrap();
//! assert_eq!(classes.to_string(), "inline-flex rounded-full px-2 text-xs");
//! ```

use crate::class_list::ClassList;
use crate::error::ConfigurationError;

/// One variant prop: its recognized values and the classes each selects
#[derive(Clone, Debug)]
pub struct VariantAxis {
    prop: &'static str,
    default: Option<&'static str>,
    options: Vec<(&'static str, &'static str)>,
}

impl VariantAxis {
    pub fn new(prop: &'static str) -> Self {
        Self {
            prop,
            default: None,
            options: Vec::new(),
        }
    }

    /// Declare a recognized value and the classes it resolves to
    pub fn option(mut self, value: &'static str, classes: &'static str) -> Self {
        debug_assert!(
            !self.options.iter().any(|(v, _)| *v == value),
            "duplicate option {value:?} on axis {:?}",
            self.prop
        );
        self.options.push((value, classes));
        self
    }

    /// Declare the value used when the prop is not supplied
    pub fn default_value(mut self, value: &'static str) -> Self {
        debug_assert!(
            self.options.iter().any(|(v, _)| *v == value),
            "default {value:?} is not an option on axis {:?}",
            self.prop
        );
        self.default = Some(value);
        self
    }

    pub fn prop(&self) -> &'static str {
        self.prop
    }

    pub fn default(&self) -> Option<&'static str> {
        self.default
    }

    pub fn values(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.options.iter().map(|(v, _)| *v)
    }

    fn classes_for(&self, value: &str) -> Option<&'static str> {
        self.options
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, c)| *c)
    }
}

/// A component's static variant table
#[derive(Clone, Debug)]
pub struct VariantMap {
    component: &'static str,
    base: &'static str,
    axes: Vec<VariantAxis>,
}

impl VariantMap {
    pub fn new(component: &'static str, base: &'static str) -> Self {
        Self {
            component,
            base,
            axes: Vec::new(),
        }
    }

    /// Append an axis; declaration order is precedence order
    pub fn axis(mut self, axis: VariantAxis) -> Self {
        self.axes.push(axis);
        self
    }

    pub fn component(&self) -> &'static str {
        self.component
    }

    pub fn base(&self) -> &'static str {
        self.base
    }

    pub fn axes(&self) -> &[VariantAxis] {
        &self.axes
    }

    /// Resolve a prop-value assignment into an ordered class list.
    ///
    /// Axes resolve in declaration order regardless of the order of the
    /// supplied pairs; supplying the same prop twice keeps the last pair.
    /// An unrecognized value falls back to the axis default when one is
    /// declared; only a no-default axis turns it into an error.
    /// Pure: identical inputs produce identical output.
    pub fn resolve(&self, props: &[(&str, &str)]) -> Result<ClassList, ConfigurationError> {
        for (prop, _) in props {
            if !self.axes.iter().any(|axis| axis.prop == *prop) {
                return Err(ConfigurationError::UnknownProp {
                    component: self.component,
                    prop: (*prop).to_string(),
                });
            }
        }

        let mut classes = ClassList::new();
        classes.push_group(self.base);

        for axis in &self.axes {
            // Last supplied pair wins, mirroring the merge step's posture
            let supplied = props
                .iter()
                .rev()
                .find(|(prop, _)| *prop == axis.prop)
                .map(|(_, value)| *value);

            match supplied {
                Some(value) => match axis.classes_for(value) {
                    Some(group) => classes.push_group(group),
                    None => match axis.default.and_then(|d| axis.classes_for(d)) {
                        Some(group) => {
                            tracing::warn!(
                                component = self.component,
                                prop = axis.prop,
                                value,
                                "unrecognized variant value, using axis default"
                            );
                            classes.push_group(group);
                        }
                        None => {
                            return Err(ConfigurationError::UnknownValue {
                                component: self.component,
                                prop: axis.prop,
                                value: value.to_string(),
                            })
                        }
                    },
                },
                None => match axis.default.and_then(|d| axis.classes_for(d)) {
                    Some(group) => classes.push_group(group),
                    None => {
                        return Err(ConfigurationError::MissingValue {
                            component: self.component,
                            prop: axis.prop,
                        })
                    }
                },
            }
        }

        Ok(classes)
    }
}
