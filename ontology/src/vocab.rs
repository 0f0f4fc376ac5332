//! IRIs of the RDF, RDFS, and OWL terms the loader recognises.

/// `rdf:type`.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// `rdfs:subClassOf`.
pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";

/// `owl:Class`.
pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";

/// `owl:NamedIndividual`.
pub const OWL_NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";

/// `owl:ObjectProperty`.
pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";

/// `owl:DatatypeProperty`.
pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";

/// `owl:SymmetricProperty`.
pub const OWL_SYMMETRIC_PROPERTY: &str = "http://www.w3.org/2002/07/owl#SymmetricProperty";

/// `owl:inverseOf`.
pub const OWL_INVERSE_OF: &str = "http://www.w3.org/2002/07/owl#inverseOf";

/// Returns the local name of an IRI: the part after the last `#`, or after
/// the last `/` when the IRI has no fragment.
#[must_use]
pub fn local_name(iri: &str) -> &str {
    let start = iri
        .rfind('#')
        .or_else(|| iri.rfind('/'))
        .map_or(0, |i| i + 1);
    &iri[start..]
}
