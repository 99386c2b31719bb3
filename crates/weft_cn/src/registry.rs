//! Component registry
//!
//! Every exported component contributes a [`ComponentSpec`]: its name and a
//! typed prop schema with defaults. The catalog backs documentation tools
//! and string-driven resolution; the components themselves are reached
//! through their typed builders.

use std::sync::OnceLock;

use indexmap::IndexMap;

use crate::variant::VariantMap;

/// The type of a component prop
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropKind {
    /// One of a closed set of values
    Enum(Vec<&'static str>),
    Bool,
    Text,
}

/// One prop of a component's schema
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropSpec {
    pub name: &'static str,
    pub kind: PropKind,
    pub default: Option<&'static str>,
    pub required: bool,
}

/// A component definition: identity plus prop schema.
///
/// Immutable once defined; built at first catalog access and shared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentSpec {
    name: &'static str,
    props: Vec<PropSpec>,
}

impl ComponentSpec {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            props: Vec::new(),
        }
    }

    /// Derive enum props from a variant map's axes
    pub fn from_variants(map: &VariantMap) -> Self {
        let mut spec = Self::new(map.component());
        for axis in map.axes() {
            spec.props.push(PropSpec {
                name: axis.prop(),
                kind: PropKind::Enum(axis.values().collect()),
                default: axis.default(),
                required: axis.default().is_none(),
            });
        }
        spec
    }

    pub fn with_bool(mut self, name: &'static str, default: bool) -> Self {
        self.props.push(PropSpec {
            name,
            kind: PropKind::Bool,
            default: Some(if default { "true" } else { "false" }),
            required: false,
        });
        self
    }

    pub fn with_text(mut self, name: &'static str, required: bool) -> Self {
        self.props.push(PropSpec {
            name,
            kind: PropKind::Text,
            default: None,
            required,
        });
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn props(&self) -> &[PropSpec] {
        &self.props
    }

    pub fn prop(&self, name: &str) -> Option<&PropSpec> {
        self.props.iter().find(|p| p.name == name)
    }
}

/// The full component catalog, in export order
pub fn catalog() -> &'static IndexMap<&'static str, ComponentSpec> {
    static CATALOG: OnceLock<IndexMap<&'static str, ComponentSpec>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let specs = [
            crate::components::button::spec(),
            crate::components::badge::spec(),
            crate::components::alert::spec(),
            crate::components::label::spec(),
            crate::components::input::spec(),
            crate::components::checkbox::spec(),
            crate::components::select::spec(),
            crate::components::tooltip::spec(),
            crate::components::dialog::spec(),
            crate::components::toast::spec(),
            crate::components::icon::spec(),
        ];
        tracing::debug!(components = specs.len(), "component catalog built");
        specs.into_iter().map(|s| (s.name(), s)).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lists_every_component_once() {
        let names: Vec<&str> = catalog().keys().copied().collect();
        assert_eq!(
            names,
            vec![
                "button", "badge", "alert", "label", "input", "checkbox", "select",
                "tooltip", "dialog", "toast", "icon",
            ]
        );
    }

    #[test]
    fn test_button_spec_has_enum_props_with_defaults() {
        let spec = &catalog()["button"];
        let size = spec.prop("size").expect("button should declare size");
        assert!(matches!(size.kind, PropKind::Enum(_)));
        assert!(size.default.is_some());
        assert!(!size.required);
    }

    #[test]
    fn test_specs_are_stable_across_calls() {
        assert_eq!(catalog()["badge"], catalog()["badge"]);
    }
}
