//! The three browsing queries over a loaded document.

use crate::document::Document;
use crate::model::{ClassRef, Entity, IndividualRef, PropertyAssertions, PropertyTable};
use crate::resolve::Resolution;
use crate::vocab;

/// Read-only query facade owning one loaded [`Document`].
///
/// Every query is a pure lookup: repeating it yields the same result, and an
/// unresolvable name yields an empty result rather than an error.
#[derive(Debug)]
pub struct OntologyFacade {
    document: Document,
    resolution: Resolution,
}

impl OntologyFacade {
    /// Wraps a document with the given name-resolution mode.
    pub fn new(document: Document, resolution: Resolution) -> Self {
        Self {
            document,
            resolution,
        }
    }

    /// Every class defined in the document, in store order.
    #[must_use]
    pub fn list_classes(&self) -> Vec<ClassRef> {
        self.document
            .classes()
            .iter()
            .map(|class| ClassRef(class.name.clone()))
            .collect()
    }

    /// Resolves a class name.
    #[must_use]
    pub fn resolve_class(&self, name: &str) -> Option<&Entity> {
        self.resolution.resolve(self.document.classes(), name)
    }

    /// Resolves an individual name.
    #[must_use]
    pub fn resolve_individual(&self, name: &str) -> Option<&Entity> {
        self.resolution.resolve(self.document.individuals(), name)
    }

    /// Instances of the named class, including instances of its subclasses.
    ///
    /// Returns an empty list when the name does not resolve.
    #[must_use]
    pub fn list_individuals(&self, class: &str) -> Vec<IndividualRef> {
        let Some(entity) = self.resolve_class(class) else {
            tracing::debug!(class, "class did not resolve");
            return Vec::new();
        };
        self.document
            .instances_of(&entity.iri)
            .into_iter()
            .map(|ind| IndividualRef(ind.name.clone()))
            .collect()
    }

    /// Object and data property values asserted for the named individual.
    ///
    /// Properties without a value for the individual are omitted. Returns two
    /// empty tables when the name does not resolve.
    #[must_use]
    pub fn list_property_assertions(&self, individual: &str) -> PropertyAssertions {
        let Some(entity) = self.resolve_individual(individual) else {
            tracing::debug!(individual, "individual did not resolve");
            return PropertyAssertions::default();
        };

        let mut object = PropertyTable::new();
        for prop in self.document.object_properties() {
            let values = self
                .document
                .object_values(&entity.iri, &prop.iri)
                .into_iter()
                .map(|iri| vocab::local_name(iri).to_owned())
                .collect();
            object.push(prop.name.clone(), values);
        }

        let mut data = PropertyTable::new();
        for prop in self.document.data_properties() {
            let values = self
                .document
                .data_values(&entity.iri, &prop.iri)
                .iter()
                .map(ToString::to_string)
                .collect();
            data.push(prop.name.clone(), values);
        }

        PropertyAssertions { object, data }
    }
}
