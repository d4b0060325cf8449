//! Declarative schemas for the provider, its resources, and data sources.
//!
//! A schema tells the host which attributes exist, which ones the user
//! sets, which ones the server fills in, and which changes force a
//! replacement. Schemas serialize to JSON for the `schema` command.

use std::collections::BTreeMap;

use serde::Serialize;

/// Attribute value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    String,
    Bool,
}

/// Who supplies an attribute's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeMode {
    /// Set by the user; must be present in the plan.
    Required,
    /// May be set by the user.
    Optional,
    /// Set by the server only.
    Computed,
    /// May be set by the user; the server fills it in otherwise.
    OptionalComputed,
}

/// One attribute of a schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub kind: AttributeType,
    pub mode: AttributeMode,
    pub description: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub sensitive: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub requires_replace: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_values: Vec<&'static str>,
}

impl Attribute {
    fn new(kind: AttributeType, mode: AttributeMode, description: &str) -> Self {
        Self {
            kind,
            mode,
            description: description.to_string(),
            sensitive: false,
            requires_replace: false,
            default: None,
            allowed_values: Vec::new(),
        }
    }

    pub fn required(description: &str) -> Self {
        Self::new(AttributeType::String, AttributeMode::Required, description)
    }

    pub fn optional(description: &str) -> Self {
        Self::new(AttributeType::String, AttributeMode::Optional, description)
    }

    pub fn computed(description: &str) -> Self {
        Self::new(AttributeType::String, AttributeMode::Computed, description)
    }

    pub fn optional_computed(description: &str) -> Self {
        Self::new(
            AttributeType::String,
            AttributeMode::OptionalComputed,
            description,
        )
    }

    /// Computed boolean flag.
    pub fn computed_bool(description: &str) -> Self {
        Self::new(AttributeType::Bool, AttributeMode::Computed, description)
    }

    /// Changing this attribute destroys and recreates the resource.
    pub fn replace(mut self) -> Self {
        self.requires_replace = true;
        self
    }

    /// Hide the value from host output.
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default = Some(value.to_string());
        self
    }

    pub fn one_of(mut self, values: &[&'static str]) -> Self {
        self.allowed_values = values.to_vec();
        self
    }

    /// True when the user may set this attribute.
    pub fn is_configurable(&self) -> bool {
        matches!(
            self.mode,
            AttributeMode::Required | AttributeMode::Optional | AttributeMode::OptionalComputed
        )
    }
}

/// Schema of a resource, data source, or the provider block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    pub description: String,
    pub attributes: BTreeMap<&'static str, Attribute>,
}

impl Schema {
    pub fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            attributes: BTreeMap::new(),
        }
    }

    /// Add an attribute.
    pub fn attribute(mut self, name: &'static str, attribute: Attribute) -> Self {
        self.attributes.insert(name, attribute);
        self
    }

    /// Look up an attribute by name.
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Names of attributes the user may set.
    pub fn configurable(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.attributes
            .iter()
            .filter(|(_, attr)| attr.is_configurable())
            .map(|(name, _)| *name)
    }

    /// Names of attributes whose change forces replacement.
    pub fn replacement_triggers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.attributes
            .iter()
            .filter(|(_, attr)| attr.requires_replace)
            .map(|(name, _)| *name)
    }

    /// True when every configurable attribute forces replacement.
    pub fn is_fully_immutable(&self) -> bool {
        self.attributes
            .values()
            .filter(|attr| attr.is_configurable())
            .all(|attr| attr.requires_replace)
    }
}

/// Schema of the provider configuration block.
pub fn provider_schema() -> Schema {
    Schema::new("Manages InferaDB organizations, vaults, clients, and access control.")
        .attribute(
            "endpoint",
            Attribute::optional(
                "Control API endpoint. Defaults to INFERADB_ENDPOINT, then https://api.inferadb.com.",
            ),
        )
        .attribute(
            "session_token",
            Attribute::optional("Session token for authentication. Defaults to INFERADB_SESSION_TOKEN.")
                .sensitive(),
        )
}
