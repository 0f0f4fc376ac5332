//! Entity and query-result types exposed by the facade.
//!
//! All values are owned; a [`Document`](crate::Document) never hands out
//! parser-internal terms.

use std::fmt;

use serde::Serialize;

use crate::vocab;

/// A named ontology entity: class, property, or individual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entity {
    /// Full IRI (e.g., `"http://example.org/geometry#Circle"`).
    pub iri: String,
    /// Local name of the IRI (e.g., `"Circle"`).
    pub name: String,
}

impl Entity {
    /// Creates an entity from its IRI, deriving the local name.
    pub fn from_iri(iri: impl Into<String>) -> Self {
        let iri = iri.into();
        let name = vocab::local_name(&iri).to_owned();
        Self { iri, name }
    }
}

/// An RDF literal as asserted in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Literal {
    /// Lexical form (e.g., `"5.0"`).
    pub lexical: String,
    /// Datatype IRI, if the parser reported one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    /// Language tag for `rdf:langString` literals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexical)
    }
}

/// Name of an ontology class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ClassRef(pub String);

/// Name of an individual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct IndividualRef(pub String);

impl ClassRef {
    /// Returns the class name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl IndividualRef {
    /// Returns the individual name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for IndividualRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One property with the stringified values asserted for an individual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyRow {
    /// Local name of the property.
    pub property: String,
    /// Values in assertion order. Never empty.
    pub values: Vec<String>,
}

impl PropertyRow {
    /// Values joined with `", "`, the way the property tables display them.
    #[must_use]
    pub fn joined(&self) -> String {
        self.values.join(", ")
    }
}

/// Property-name → values mapping in property declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PropertyTable {
    rows: Vec<PropertyRow>,
}

impl PropertyTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row. Rows without values are dropped.
    pub fn push(&mut self, property: impl Into<String>, values: Vec<String>) {
        if values.is_empty() {
            return;
        }
        self.rows.push(PropertyRow {
            property: property.into(),
            values,
        });
    }

    /// Returns the values of `property`, if present.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&[String]> {
        self.rows
            .iter()
            .find(|row| row.property == property)
            .map(|row| row.values.as_slice())
    }

    /// Number of properties with at least one value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no property has a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, PropertyRow> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a PropertyTable {
    type Item = &'a PropertyRow;
    type IntoIter = std::slice::Iter<'a, PropertyRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Object and data property values of one individual.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PropertyAssertions {
    /// Object properties; values are individual names.
    pub object: PropertyTable,
    /// Data properties; values are literal lexical forms.
    pub data: PropertyTable,
}

impl PropertyAssertions {
    /// Returns true if both tables are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.object.is_empty() && self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_name_is_local_name() {
        let entity = Entity::from_iri("http://example.org/geometry#Square");
        assert_eq!(entity.name, "Square");
    }

    #[test]
    fn empty_rows_are_dropped() {
        let mut table = PropertyTable::new();
        table.push("hasSide", Vec::new());
        table.push("hasRadius", vec!["2.0".to_string()]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("hasRadius"), Some(&["2.0".to_string()][..]));
        assert!(table.get("hasSide").is_none());
    }

    #[test]
    fn table_serializes_in_row_order() {
        let mut table = PropertyTable::new();
        table.push("b", vec!["1".to_string()]);
        table.push("a", vec!["2".to_string(), "3".to_string()]);
        let json = serde_json::to_string(&table).unwrap_or_default();
        assert_eq!(
            json,
            r#"[{"property":"b","values":["1"]},{"property":"a","values":["2","3"]}]"#
        );
    }
}
