//! Ontology documents used by the facade integration tests.

/// The shipped RDF/XML sample ontology.
pub const SAMPLE_OWL: &str = include_str!("../../../data/BasicGeometryOntology.owl");

/// A Turtle rendition of a small shape taxonomy with a duplicate suffix
/// (`Triangle`, `RightTriangle`) and an inverse property pair.
pub const SHAPES_TTL: &str = r#"
@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix geo:  <http://example.org/geometry#> .

geo:Shape         a owl:Class .
geo:RightTriangle a owl:Class ; rdfs:subClassOf geo:Triangle .
geo:Triangle      a owl:Class ; rdfs:subClassOf geo:Shape .
geo:Vertex        a owl:Class .

[] a owl:Restriction ; owl:onProperty geo:hasVertex ; owl:minCardinality 3 .

geo:hasVertex a owl:ObjectProperty .
geo:vertexOf  a owl:ObjectProperty ; owl:inverseOf geo:hasVertex .
geo:hasLabel  a owl:DatatypeProperty .
geo:hasAngle  a owl:DatatypeProperty .

geo:t1 a owl:NamedIndividual, geo:Triangle ;
    geo:hasVertex geo:v1, geo:v2 ;
    geo:hasLabel  "first triangle"@en .

geo:rt1 a geo:RightTriangle ;
    geo:hasAngle "90"^^xsd:integer, "45"^^xsd:integer .

geo:v1 a owl:NamedIndividual, geo:Vertex .
geo:v2 a owl:NamedIndividual, geo:Vertex .
geo:v3 a owl:NamedIndividual, geo:Vertex ; geo:vertexOf geo:t1 .
"#;
