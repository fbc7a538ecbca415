//! Custom Elements
//!
//! Registry of autonomous and customized built-in element definitions.

use std::collections::HashMap;

use crate::ElementInterface;

/// Custom element type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomElementType {
    /// Autonomous custom element (extends HTMLElement)
    Autonomous,
    /// Customized built-in element (extends a specific HTML element)
    Customized { extends: String },
}

/// Custom element definition
#[derive(Debug, Clone)]
pub struct CustomElementDefinition {
    pub name: String,
    /// Opaque identifier of the class backing this definition
    pub constructor_id: u64,
    pub kind: CustomElementType,
    pub observed_attributes: Vec<String>,
}

impl CustomElementDefinition {
    /// Tag an instance of this definition is created with
    pub fn local_name(&self) -> &str {
        match &self.kind {
            CustomElementType::Autonomous => &self.name,
            CustomElementType::Customized { extends } => extends,
        }
    }
}

/// Custom element error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustomElementError {
    #[error("Invalid custom element name: {0}")]
    InvalidName(String),

    #[error("Cannot extend element: {0}")]
    ExtensionNotAllowed(String),

    #[error("Element already defined: {0}")]
    AlreadyDefined(String),
}

/// Custom elements registry
#[derive(Debug, Default)]
pub struct CustomElementRegistry {
    definitions: HashMap<String, CustomElementDefinition>,
}

impl CustomElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define an autonomous custom element (`customElements.define(name, class)`)
    pub fn define_autonomous(
        &mut self,
        name: &str,
        constructor_id: u64,
        observed_attributes: Vec<String>,
    ) -> Result<&CustomElementDefinition, CustomElementError> {
        self.insert(CustomElementDefinition {
            name: name.to_string(),
            constructor_id,
            kind: CustomElementType::Autonomous,
            observed_attributes,
        })
    }

    /// Define a customized built-in element
    /// (`customElements.define(name, class, { extends })`)
    pub fn define_customized(
        &mut self,
        name: &str,
        extends: &str,
        constructor_id: u64,
        observed_attributes: Vec<String>,
    ) -> Result<&CustomElementDefinition, CustomElementError> {
        let extends = extends.to_ascii_lowercase();
        let interface = ElementInterface::from_tag(&extends);
        if Self::validate_name(&extends).is_ok()
            || !interface.is_html()
            || interface == ElementInterface::HtmlUnknownElement
        {
            return Err(CustomElementError::ExtensionNotAllowed(extends));
        }

        self.insert(CustomElementDefinition {
            name: name.to_string(),
            constructor_id,
            kind: CustomElementType::Customized { extends },
            observed_attributes,
        })
    }

    fn insert(
        &mut self,
        definition: CustomElementDefinition,
    ) -> Result<&CustomElementDefinition, CustomElementError> {
        Self::validate_name(&definition.name)?;

        if self.definitions.contains_key(&definition.name) {
            return Err(CustomElementError::AlreadyDefined(definition.name));
        }

        tracing::debug!("Defined custom element <{}> ({:?})", definition.name, definition.kind);
        let name = definition.name.clone();
        Ok(self.definitions.entry(name).or_insert(definition))
    }

    /// Get element definition
    pub fn get(&self, name: &str) -> Option<&CustomElementDefinition> {
        self.definitions.get(name)
    }

    /// Check if element is defined
    pub fn is_defined(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Validate custom element name
    pub fn validate_name(name: &str) -> Result<(), CustomElementError> {
        let invalid = |reason: &str| -> Result<(), CustomElementError> {
            Err(CustomElementError::InvalidName(format!("{name}: {reason}")))
        };

        if !name.contains('-') {
            return invalid("must contain a hyphen");
        }

        if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
            return invalid("must start with a lowercase letter");
        }

        if name.chars().any(|c| c.is_ascii_uppercase()) {
            return invalid("must not contain uppercase letters");
        }

        let reserved = ["annotation-xml", "color-profile", "font-face",
                       "font-face-src", "font-face-uri", "font-face-format",
                       "font-face-name", "missing-glyph"];
        if reserved.contains(&name) {
            return invalid("reserved name");
        }

        Ok(())
    }
}
