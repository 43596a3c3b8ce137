//! Marker value object

use crate::core::error::DomainError;
use serde::Serialize;
use std::sync::Arc;

/// A named tag attached to log calls (Value Object)
///
/// Markers may reference other markers, forming a small tree. Engines use
/// them for routing or filtering; the bridge passes them through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marker {
    name: Arc<str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    references: Vec<Marker>,
}

impl Marker {
    /// Create a marker with no references
    pub fn new(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let name = name.as_ref();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyMarkerName);
        }
        Ok(Self {
            name: Arc::from(name),
            references: Vec::new(),
        })
    }

    /// Add a child reference (builder style)
    pub fn with_reference(mut self, child: Marker) -> Self {
        if !self.references.contains(&child) {
            self.references.push(child);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn references(&self) -> &[Marker] {
        &self.references
    }

    pub fn has_references(&self) -> bool {
        !self.references.is_empty()
    }

    /// Check whether this marker is, or transitively references, `name`
    pub fn contains(&self, name: &str) -> bool {
        &*self.name == name || self.references.iter().any(|r| r.contains(name))
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.references.is_empty() {
            return write!(f, "{}", self.name);
        }
        let children: Vec<String> = self.references.iter().map(|r| r.to_string()).collect();
        write!(f, "{} [ {} ]", self.name, children.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_rejects_blank_name() {
        assert_eq!(Marker::new(""), Err(DomainError::EmptyMarkerName));
    }

    #[test]
    fn test_marker_contains_transitively() {
        let audit = Marker::new("AUDIT").unwrap();
        let security = Marker::new("SECURITY").unwrap().with_reference(audit);
        let root = Marker::new("CONFIDENTIAL").unwrap().with_reference(security);

        assert!(root.contains("CONFIDENTIAL"));
        assert!(root.contains("AUDIT"));
        assert!(!root.contains("BILLING"));
    }

    #[test]
    fn test_marker_ignores_duplicate_reference() {
        let child = Marker::new("A").unwrap();
        let marker = Marker::new("B")
            .unwrap()
            .with_reference(child.clone())
            .with_reference(child);
        assert_eq!(marker.references().len(), 1);
    }

    #[test]
    fn test_marker_display() {
        let marker = Marker::new("SECURITY")
            .unwrap()
            .with_reference(Marker::new("AUDIT").unwrap());
        assert_eq!(marker.to_string(), "SECURITY [ AUDIT ]");
        assert_eq!(Marker::new("PLAIN").unwrap().to_string(), "PLAIN");
    }
}
