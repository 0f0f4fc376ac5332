//! The loaded ontology document.
//!
//! A [`Document`] is assembled once from the triples of an RDF graph and is
//! immutable afterwards. It keeps only what the browsing queries need:
//! named classes and their `rdfs:subClassOf` edges, object and data property
//! declarations, individuals with their asserted types, and the property
//! assertions made about them.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::model::{Entity, Literal};
use crate::vocab;

/// An RDF term converted out of the parser's representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An IRI.
    Iri(String),
    /// A blank node label.
    Blank(String),
    /// A literal.
    Literal(Literal),
}

impl Node {
    /// Returns the IRI if this node is one.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }
}

/// A single `(subject, predicate, object)` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Subject (IRI or blank node).
    pub subject: Node,
    /// Predicate IRI.
    pub predicate: String,
    /// Object term.
    pub object: Node,
}

/// Entities kept in first-seen order without duplicates.
#[derive(Debug, Default)]
struct Registry {
    entities: Vec<Entity>,
    seen: HashSet<String>,
}

impl Registry {
    fn insert(&mut self, iri: &str) {
        if self.seen.insert(iri.to_owned()) {
            self.entities.push(Entity::from_iri(iri));
        }
    }

    fn contains(&self, iri: &str) -> bool {
        self.seen.contains(iri)
    }
}

/// An immutable, fully owned ontology document.
#[derive(Debug, Default)]
pub struct Document {
    classes: Vec<Entity>,
    object_properties: Vec<Entity>,
    data_properties: Vec<Entity>,
    individuals: Vec<Entity>,
    /// Individual IRI → asserted named classes.
    types: HashMap<String, Vec<String>>,
    /// Parent class IRI → direct subclass IRIs.
    subclasses: HashMap<String, Vec<String>>,
    /// Property IRI → properties declared inverse to it (both directions).
    inverses: HashMap<String, Vec<String>>,
    symmetric: HashSet<String>,
    /// (subject, property) → object IRIs.
    outgoing: HashMap<(String, String), Vec<String>>,
    /// (object, property) → subject IRIs.
    incoming: HashMap<(String, String), Vec<String>>,
    /// (subject, property) → literals.
    literals: HashMap<(String, String), Vec<Literal>>,
}

impl Document {
    /// Assembles a document from parsed statements.
    ///
    /// Declarations may appear anywhere relative to the assertions that use
    /// them; statements are classified only after every declaration is known.
    pub fn from_statements(statements: Vec<Statement>) -> Self {
        let mut classes = Registry::default();
        let mut object_properties = Registry::default();
        let mut data_properties = Registry::default();
        let mut doc = Document::default();

        for st in &statements {
            let Some(subject) = st.subject.as_iri() else {
                continue;
            };
            match (st.predicate.as_str(), st.object.as_iri()) {
                (vocab::RDF_TYPE, Some(vocab::OWL_CLASS)) => classes.insert(subject),
                (vocab::RDF_TYPE, Some(vocab::OWL_OBJECT_PROPERTY)) => {
                    object_properties.insert(subject);
                }
                (vocab::RDF_TYPE, Some(vocab::OWL_DATATYPE_PROPERTY)) => {
                    data_properties.insert(subject);
                }
                (vocab::RDF_TYPE, Some(vocab::OWL_SYMMETRIC_PROPERTY)) => {
                    doc.symmetric.insert(subject.to_owned());
                }
                (vocab::RDFS_SUBCLASS_OF, Some(parent)) => {
                    push_unique(
                        doc.subclasses.entry(parent.to_owned()).or_default(),
                        subject,
                    );
                }
                (vocab::OWL_INVERSE_OF, Some(other)) => {
                    push_unique(doc.inverses.entry(subject.to_owned()).or_default(), other);
                    push_unique(doc.inverses.entry(other.to_owned()).or_default(), subject);
                }
                _ => {}
            }
        }

        let mut individuals = Registry::default();
        for st in statements {
            let Node::Iri(subject) = st.subject else {
                continue;
            };
            if st.predicate == vocab::RDF_TYPE {
                let Some(ty) = st.object.as_iri() else {
                    continue;
                };
                if ty == vocab::OWL_NAMED_INDIVIDUAL {
                    individuals.insert(&subject);
                } else if classes.contains(ty) {
                    individuals.insert(&subject);
                    push_unique(doc.types.entry(subject).or_default(), ty);
                }
            } else if object_properties.contains(&st.predicate) {
                match st.object {
                    Node::Iri(object) => {
                        push_unique(
                            doc.incoming
                                .entry((object.clone(), st.predicate.clone()))
                                .or_default(),
                            &subject,
                        );
                        push_unique(
                            doc.outgoing.entry((subject, st.predicate)).or_default(),
                            &object,
                        );
                    }
                    other => tracing::warn!(
                        subject = %subject,
                        property = %st.predicate,
                        value = ?other,
                        "skipping object property assertion without an IRI value"
                    ),
                }
            } else if data_properties.contains(&st.predicate) {
                match st.object {
                    Node::Literal(literal) => doc
                        .literals
                        .entry((subject, st.predicate))
                        .or_default()
                        .push(literal),
                    other => tracing::warn!(
                        subject = %subject,
                        property = %st.predicate,
                        value = ?other,
                        "skipping data property assertion without a literal value"
                    ),
                }
            }
        }

        doc.classes = classes.entities;
        doc.object_properties = object_properties.entities;
        doc.data_properties = data_properties.entities;
        doc.individuals = individuals.entities;
        doc
    }

    /// Named classes in the order the graph yielded them.
    #[must_use]
    pub fn classes(&self) -> &[Entity] {
        &self.classes
    }

    /// Declared object properties.
    #[must_use]
    pub fn object_properties(&self) -> &[Entity] {
        &self.object_properties
    }

    /// Declared data properties.
    #[must_use]
    pub fn data_properties(&self) -> &[Entity] {
        &self.data_properties
    }

    /// Individuals: subjects typed `owl:NamedIndividual` or a declared class.
    #[must_use]
    pub fn individuals(&self) -> &[Entity] {
        &self.individuals
    }

    /// Named classes asserted for an individual.
    #[must_use]
    pub fn types_of(&self, individual: &str) -> &[String] {
        self.types.get(individual).map_or(&[], Vec::as_slice)
    }

    /// The class and all of its transitive subclasses, starting with `class`.
    #[must_use]
    pub fn class_closure<'a>(&'a self, class: &'a str) -> Vec<&'a str> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut order = Vec::new();
        let mut queue = VecDeque::from([class]);
        while let Some(next) = queue.pop_front() {
            if !seen.insert(next) {
                continue;
            }
            order.push(next);
            if let Some(children) = self.subclasses.get(next) {
                queue.extend(children.iter().map(String::as_str));
            }
        }
        order
    }

    /// Individuals typed with `class` or any of its subclasses, in document
    /// order.
    #[must_use]
    pub fn instances_of(&self, class: &str) -> Vec<&Entity> {
        let closure: HashSet<&str> = self.class_closure(class).into_iter().collect();
        self.individuals
            .iter()
            .filter(|ind| {
                self.types_of(&ind.iri)
                    .iter()
                    .any(|ty| closure.contains(ty.as_str()))
            })
            .collect()
    }

    /// Object IRIs related to `subject` through `property`, including values
    /// implied by `owl:inverseOf` and `owl:SymmetricProperty`.
    #[must_use]
    pub fn object_values(&self, subject: &str, property: &str) -> Vec<&str> {
        let mut values: Vec<&str> = Vec::new();
        extend_unique(&mut values, self.outgoing.get(&key(subject, property)));
        if self.symmetric.contains(property) {
            extend_unique(&mut values, self.incoming.get(&key(subject, property)));
        }
        for inverse in self.inverses.get(property).into_iter().flatten() {
            extend_unique(&mut values, self.incoming.get(&key(subject, inverse)));
        }
        values
    }

    /// Literals asserted for `subject` through a data property.
    #[must_use]
    pub fn data_values(&self, subject: &str, property: &str) -> &[Literal] {
        self.literals
            .get(&key(subject, property))
            .map_or(&[], Vec::as_slice)
    }
}

fn key(a: &str, b: &str) -> (String, String) {
    (a.to_owned(), b.to_owned())
}

fn extend_unique<'a>(values: &mut Vec<&'a str>, list: Option<&'a Vec<String>>) {
    for value in list.into_iter().flatten() {
        if !values.contains(&value.as_str()) {
            values.push(value);
        }
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.push(value.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEO: &str = "http://example.org/geometry#";

    fn iri(name: &str) -> Node {
        Node::Iri(format!("{GEO}{name}"))
    }

    fn st(s: Node, p: &str, o: Node) -> Statement {
        Statement {
            subject: s,
            predicate: p.to_owned(),
            object: o,
        }
    }

    fn ty(s: &str, o: &str) -> Statement {
        st(iri(s), vocab::RDF_TYPE, Node::Iri(o.to_owned()))
    }

    #[test]
    fn declarations_after_use_are_honoured() {
        let doc = Document::from_statements(vec![
            st(iri("c1"), &format!("{GEO}hasRadius"), Node::Literal(Literal {
                lexical: "2.0".into(),
                datatype: None,
                language: None,
            })),
            ty("c1", &format!("{GEO}Circle")),
            ty("Circle", vocab::OWL_CLASS),
            ty("hasRadius", vocab::OWL_DATATYPE_PROPERTY),
        ]);
        assert_eq!(doc.classes().len(), 1);
        assert_eq!(doc.individuals().len(), 1);
        let values = doc.data_values(&format!("{GEO}c1"), &format!("{GEO}hasRadius"));
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].lexical, "2.0");
    }

    #[test]
    fn class_closure_survives_cycles() {
        let doc = Document::from_statements(vec![
            ty("A", vocab::OWL_CLASS),
            ty("B", vocab::OWL_CLASS),
            st(iri("B"), vocab::RDFS_SUBCLASS_OF, iri("A")),
            st(iri("A"), vocab::RDFS_SUBCLASS_OF, iri("B")),
        ]);
        let a = format!("{GEO}A");
        assert_eq!(doc.class_closure(&a).len(), 2);
    }

    #[test]
    fn blank_node_classes_are_ignored() {
        let doc = Document::from_statements(vec![st(
            Node::Blank("r0".into()),
            vocab::RDF_TYPE,
            Node::Iri(vocab::OWL_CLASS.to_owned()),
        )]);
        assert!(doc.classes().is_empty());
    }

    #[test]
    fn inverse_values_are_merged() {
        let has_side = format!("{GEO}hasSide");
        let side_of = format!("{GEO}sideOf");
        let doc = Document::from_statements(vec![
            ty("hasSide", vocab::OWL_OBJECT_PROPERTY),
            ty("sideOf", vocab::OWL_OBJECT_PROPERTY),
            st(iri("sideOf"), vocab::OWL_INVERSE_OF, iri("hasSide")),
            st(iri("sq"), &has_side, iri("edge1")),
            st(iri("edge2"), &side_of, iri("sq")),
        ]);
        let values = doc.object_values(&format!("{GEO}sq"), &has_side);
        assert_eq!(
            values,
            vec![format!("{GEO}edge1").as_str(), format!("{GEO}edge2").as_str()]
        );
    }
}
