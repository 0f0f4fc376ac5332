//! Query behaviour of the ontology facade over real parsed documents.

mod fixtures;

use std::collections::HashSet;

use geo_ontology::{loader, ClassRef, Format, IndividualRef, OntologyFacade, Resolution};

fn facade(src: &str, format: Format, resolution: Resolution) -> OntologyFacade {
    let document = loader::parse_str(src, format).unwrap_or_else(|e| panic!("fixture: {e}"));
    OntologyFacade::new(document, resolution)
}

fn sample() -> OntologyFacade {
    facade(fixtures::SAMPLE_OWL, Format::RdfXml, Resolution::Suffix)
}

fn shapes() -> OntologyFacade {
    facade(fixtures::SHAPES_TTL, Format::Turtle, Resolution::Suffix)
}

fn names(list: &[IndividualRef]) -> HashSet<&str> {
    list.iter().map(IndividualRef::as_str).collect()
}

#[test]
fn sample_lists_every_class() {
    let classes: HashSet<String> = sample()
        .list_classes()
        .into_iter()
        .map(|c| c.0)
        .collect();
    let expected: HashSet<String> = [
        "Shape",
        "Circle",
        "Polygon",
        "Square",
        "Triangle",
        "EquilateralTriangle",
        "IsoscelesTriangle",
        "Point",
        "LineSegment",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    assert_eq!(classes, expected);
}

#[test]
fn list_classes_is_idempotent() {
    let facade = sample();
    let first: HashSet<ClassRef> = facade.list_classes().into_iter().collect();
    let second: HashSet<ClassRef> = facade.list_classes().into_iter().collect();
    assert_eq!(first, second);
}

#[test]
fn instances_include_subclasses() {
    let facade = sample();
    assert_eq!(
        names(&facade.list_individuals("Polygon")),
        ["Square1", "EquilateralTriangle1", "IsoscelesTriangle1"]
            .into_iter()
            .collect()
    );
    assert_eq!(
        names(&facade.list_individuals("Circle")),
        ["Circle1"].into_iter().collect()
    );
}

#[test]
fn exact_class_name_is_preferred_over_suffix() {
    let facade = sample();
    // "Triangle" is a suffix of EquilateralTriangle and IsoscelesTriangle too.
    let triangles = facade.list_individuals("Triangle");
    assert_eq!(
        names(&triangles),
        ["EquilateralTriangle1", "IsoscelesTriangle1"].into_iter().collect()
    );
}

#[test]
fn unknown_class_yields_empty_list() {
    assert!(sample().list_individuals("NoSuchClass").is_empty());
    assert!(sample().list_individuals("").is_empty());
}

#[test]
fn unknown_individual_yields_empty_tables() {
    let assertions = sample().list_property_assertions("NoSuchIndividual");
    assert!(assertions.object.is_empty());
    assert!(assertions.data.is_empty());
}

#[test]
fn circle_properties() {
    let assertions = sample().list_property_assertions("Circle1");
    assert_eq!(assertions.object.get("hasCenter"), Some(&["Origin".to_string()][..]));
    assert_eq!(assertions.data.get("hasRadius"), Some(&["2.0".to_string()][..]));
    assert!(assertions.data.get("hasSideLength").is_none());
    assert_eq!(assertions.object.len(), 1);
    assert_eq!(assertions.data.len(), 1);
}

#[test]
fn square_has_multi_valued_side() {
    let assertions = sample().list_property_assertions("Square1");
    let sides = assertions.object.get("hasSide").map(<[String]>::to_vec);
    assert_eq!(sides.map(|v| v.len()), Some(2));
    assert_eq!(assertions.data.get("hasNumberOfSides"), Some(&["4".to_string()][..]));
}

#[test]
fn inverse_property_is_answered_from_the_other_side() {
    let assertions = sample().list_property_assertions("SideA");
    assert_eq!(assertions.object.get("isSideOf"), Some(&["Square1".to_string()][..]));
}

#[test]
fn symmetric_property_is_answered_from_both_sides() {
    let assertions = sample().list_property_assertions("SideB");
    assert_eq!(assertions.object.get("isAdjacentTo"), Some(&["SideA".to_string()][..]));
}

#[test]
fn turtle_fixture_ignores_blank_node_classes() {
    assert_eq!(shapes().list_classes().len(), 4);
}

#[test]
fn turtle_inverse_values_are_merged_and_ordered() {
    let assertions = shapes().list_property_assertions("t1");
    let vertices = assertions.object.get("hasVertex").map(<[String]>::to_vec);
    assert_eq!(
        vertices,
        Some(vec!["v1".to_string(), "v2".to_string(), "v3".to_string()])
    );
    assert_eq!(
        assertions.data.get("hasLabel"),
        Some(&["first triangle".to_string()][..])
    );
}

#[test]
fn individual_typed_only_by_class_is_found() {
    let facade = shapes();
    assert_eq!(
        names(&facade.list_individuals("Triangle")),
        ["t1", "rt1"].into_iter().collect()
    );
    let angles = facade.list_property_assertions("rt1");
    assert_eq!(angles.data.get("hasAngle").map(<[String]>::len), Some(2));
}

#[test]
fn exact_resolution_rejects_suffixes() {
    let facade = facade(fixtures::SHAPES_TTL, Format::Turtle, Resolution::Exact);
    assert!(facade.list_individuals("Vert").is_empty());
    assert_eq!(facade.list_individuals("Vertex").len(), 3);
}

#[test]
fn suffix_resolution_accepts_partial_names() {
    assert_eq!(shapes().list_individuals("ertex").len(), 3);
}

#[test]
fn results_serialize_to_json() {
    let assertions = sample().list_property_assertions("Circle1");
    let json = serde_json::to_value(&assertions).unwrap_or_default();
    assert_eq!(json["object"][0]["property"], "hasCenter");
    assert_eq!(json["data"][0]["values"][0], "2.0");
}
