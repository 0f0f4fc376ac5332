//! Ontology loading: RDF/XML, Turtle, and N-Triples.
//!
//! Parsing is delegated to sophia. The parsed triples are collected into a
//! [`LightGraph`], then copied out as owned [`Statement`]s and assembled into
//! a [`Document`].

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use sophia_api::graph::Graph;
use sophia_api::source::TripleSource;
use sophia_api::term::{Term, TermKind};
use sophia_api::triple::Triple;
use sophia_inmem::graph::LightGraph;

use crate::document::{Document, Node, Statement};
use crate::error::{Error, Result};
use crate::model::Literal;

/// Concrete RDF syntax of an ontology file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// RDF/XML, the default OWL exchange syntax (`.owl`, `.rdf`, `.xml`).
    RdfXml,
    /// Turtle 1.1 (`.ttl`).
    Turtle,
    /// N-Triples (`.nt`).
    NTriples,
}

impl Format {
    /// Detects the syntax from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "owl" | "rdf" | "xml" => Some(Format::RdfXml),
            "ttl" => Some(Format::Turtle),
            "nt" => Some(Format::NTriples),
            _ => None,
        }
    }

    /// Returns the configuration name of this format.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Format::RdfXml => "rdfxml",
            Format::Turtle => "turtle",
            Format::NTriples => "ntriples",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rdfxml" | "rdf/xml" | "xml" | "owl" => Ok(Format::RdfXml),
            "turtle" | "ttl" => Ok(Format::Turtle),
            "ntriples" | "n-triples" | "nt" => Ok(Format::NTriples),
            _ => Err(Error::UnsupportedFormat(s.to_owned())),
        }
    }
}

/// Reads and parses an ontology file.
///
/// When `format` is `None` the syntax is detected from the file extension.
///
/// # Errors
///
/// Returns [`Error::UnknownFormat`] if the syntax cannot be detected,
/// [`Error::Io`] if the file cannot be read, and [`Error::Parse`] if the
/// content is not valid in the chosen syntax.
pub fn load(path: &Path, format: Option<Format>) -> Result<Document> {
    let format = match format {
        Some(format) => format,
        None => Format::from_path(path).ok_or_else(|| Error::UnknownFormat {
            path: path.to_path_buf(),
        })?,
    };
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse_str(&content, format)?;
    tracing::info!(
        path = %path.display(),
        %format,
        classes = document.classes().len(),
        individuals = document.individuals().len(),
        object_properties = document.object_properties().len(),
        data_properties = document.data_properties().len(),
        "loaded ontology"
    );
    Ok(document)
}

/// Parses an ontology held in memory.
///
/// # Errors
///
/// Returns [`Error::Parse`] if `src` is not valid in `format`.
pub fn parse_str(src: &str, format: Format) -> Result<Document> {
    let parse_error = |message: String| Error::Parse { format, message };
    let graph = match format {
        Format::RdfXml => sophia_xml::parser::parse_str(src)
            .collect_triples::<LightGraph>()
            .map_err(|e| parse_error(e.to_string()))?,
        Format::Turtle => sophia_turtle::parser::turtle::parse_str(src)
            .collect_triples::<LightGraph>()
            .map_err(|e| parse_error(e.to_string()))?,
        Format::NTriples => sophia_turtle::parser::nt::parse_str(src)
            .collect_triples::<LightGraph>()
            .map_err(|e| parse_error(e.to_string()))?,
    };
    Ok(Document::from_statements(statements(&graph)?))
}

/// Copies every triple of `graph` out as an owned [`Statement`].
///
/// Triples whose predicate is not an IRI, or whose terms are of a kind the
/// document model does not represent (quoted triples, variables), are
/// skipped.
fn statements(graph: &LightGraph) -> Result<Vec<Statement>> {
    let mut out = Vec::new();
    for triple in graph.triples() {
        let triple = triple.map_err(|e| Error::Graph(e.to_string()))?;
        let (Some(subject), Some(predicate), Some(object)) = (
            node(triple.s()),
            triple.p().iri().map(|iri| iri.as_str().to_owned()),
            node(triple.o()),
        ) else {
            continue;
        };
        out.push(Statement {
            subject,
            predicate,
            object,
        });
    }
    Ok(out)
}

fn node<T: Term>(term: T) -> Option<Node> {
    match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Node::Iri(iri.as_str().to_owned())),
        TermKind::BlankNode => term
            .bnode_id()
            .map(|id| Node::Blank(id.as_str().to_owned())),
        TermKind::Literal => term.lexical_form().map(|lexical| {
            Node::Literal(Literal {
                lexical: lexical.to_string(),
                datatype: term.datatype().map(|dt| dt.as_str().to_owned()),
                language: term.language_tag().map(|tag| tag.as_str().to_owned()),
            })
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_detection_by_extension() {
        assert_eq!(
            Format::from_path(Path::new("BasicGeometryOntology.owl")),
            Some(Format::RdfXml)
        );
        assert_eq!(Format::from_path(Path::new("a/b.TTL")), Some(Format::Turtle));
        assert_eq!(Format::from_path(Path::new("x.nt")), Some(Format::NTriples));
        assert_eq!(Format::from_path(Path::new("x.json")), None);
        assert_eq!(Format::from_path(Path::new("noext")), None);
    }

    #[test]
    fn format_names_round_trip() {
        for format in [Format::RdfXml, Format::Turtle, Format::NTriples] {
            assert_eq!(format.as_str().parse::<Format>().ok(), Some(format));
        }
        assert!(matches!(
            "jsonld".parse::<Format>(),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn ntriples_document_parses() {
        let src = concat!(
            "<http://example.org/g#Square> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> ",
            "<http://www.w3.org/2002/07/owl#Class> .\n",
            "<http://example.org/g#sq1> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> ",
            "<http://example.org/g#Square> .\n",
        );
        let doc = parse_str(src, Format::NTriples);
        assert!(doc.is_ok(), "{:?}", doc.as_ref().err());
        let doc = doc.unwrap_or_default();
        assert_eq!(doc.classes().len(), 1);
        assert_eq!(doc.individuals().len(), 1);
    }

    #[test]
    fn malformed_turtle_is_a_parse_error() {
        let result = parse_str("@prefix geo: <http://example.org/g#> .\ngeo:a geo:b", Format::Turtle);
        assert!(matches!(
            result,
            Err(Error::Parse {
                format: Format::Turtle,
                ..
            })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load(Path::new("/nonexistent/geometry.ttl"), None);
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn unknown_extension_without_format_is_rejected() {
        let result = load(Path::new("geometry.json"), None);
        assert!(matches!(result, Err(Error::UnknownFormat { .. })));
    }
}
