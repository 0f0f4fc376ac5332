//! Read-only access to a basic-geometry OWL ontology.
//!
//! The `geo-ontology` crate loads an ontology document (RDF/XML, Turtle, or
//! N-Triples) once, converts it into owned Rust data, and answers three
//! browsing queries through [`OntologyFacade`]:
//!
//! - every class in the document
//! - the individuals of a class
//! - the object and data property values of an individual
//!
//! # Entry Point
//!
//! ```
//! use geo_ontology::{loader, Format, OntologyFacade, Resolution};
//!
//! let src = r#"
//! @prefix owl: <http://www.w3.org/2002/07/owl#> .
//! @prefix geo: <http://example.org/geometry#> .
//! geo:Circle a owl:Class .
//! geo:UnitCircle a owl:NamedIndividual, geo:Circle .
//! "#;
//! let document = loader::parse_str(src, Format::Turtle).expect("valid turtle");
//! let facade = OntologyFacade::new(document, Resolution::Suffix);
//! assert_eq!(facade.list_individuals("Circle").len(), 1);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod document;
pub mod error;
pub mod facade;
pub mod loader;
pub mod model;
pub mod resolve;
pub mod vocab;

pub use document::Document;
pub use error::Error;
pub use facade::OntologyFacade;
pub use loader::Format;
pub use model::{
    ClassRef, Entity, IndividualRef, Literal, PropertyAssertions, PropertyRow, PropertyTable,
};
pub use resolve::Resolution;
