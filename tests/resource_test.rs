//! Tests for schema-aware resource, attribute, relationship, and
//! reference validation through the public API.

use jsonapi_lint::{
    DocumentPath, Issues, MetaOnlyRelationships, ResourceSchema, SchemaRegistry, Validator,
};
use serde_json::json;

fn menagerie() -> SchemaRegistry {
    let registry = SchemaRegistry::new();
    registry
        .register(
            ResourceSchema::new("person")
                .attr("first-name")
                .attr("last-name")
                .has_many("pets", "pet"),
        )
        .unwrap();
    registry
        .register(
            ResourceSchema::new("animal")
                .attr("name")
                .belongs_to("owner", "person"),
        )
        .unwrap();
    registry
        .register(ResourceSchema::new("pet").inherits("animal"))
        .unwrap();
    registry
        .register(ResourceSchema::new("dog").attr("breed").inherits("pet"))
        .unwrap();
    registry
        .register(ResourceSchema::new("flying-dog").attr("wingspan").inherits("dog"))
        .unwrap();
    registry.register(ResourceSchema::new("plant")).unwrap();
    registry
}

fn validator() -> Validator {
    Validator::builder(menagerie()).build()
}

fn data_path() -> DocumentPath {
    DocumentPath::document().push_member("data")
}

#[test]
fn test_a_valid_resource_passes() {
    let resource = json!({
        "id": "1",
        "type": "dog",
        "attributes": { "name": "Rex", "breed": "collie" },
        "relationships": {
            "owner": { "data": { "type": "person", "id": "2" } }
        }
    });

    assert!(validator().validate_resource(&resource, &data_path()).is_ok());
}

#[test]
fn test_missing_resource_names_its_location() {
    let error = validator()
        .validate_resource(&json!(null), &data_path())
        .unwrap_err();

    assert!(error
        .to_string()
        .contains("Expected to receive a json-api resource at <document>.data but instead found 'null'."));
}

#[test]
fn test_array_is_not_a_single_resource() {
    let error = validator()
        .validate_resource(&json!([{ "id": "1", "type": "dog" }]), &data_path())
        .unwrap_err();

    assert!(error.to_string().contains(
        "Expected to receive a single json-api resource at <document>.data but instead found an Array."
    ));
}

#[test]
fn test_a_hopeless_resource_reports_every_problem_at_once() {
    let error = validator()
        .validate_resource(&json!({ "color": "brown" }), &data_path())
        .unwrap_err();

    assert!(error.is_multiple());
    let text = error.to_string();
    assert!(text.contains("Unexpected key in payload: color"));
    assert!(text.contains("Missing mandatory key in payload: id"));
    assert!(text.contains("Missing mandatory key in payload: type"));
    assert!(text.contains(
        "In addition to 'type' and 'id', a resource needs at least one of the following keys"
    ));
    assert!(text.contains("Resource.id must be a string"));
    assert!(text.contains("Resource.type must be a string"));
    assert_eq!(error.errors().len(), 6);
}

#[test]
fn test_id_and_type_must_be_non_empty_strings() {
    let resource = json!({ "id": "", "type": "dog", "attributes": {} });
    let error = validator().validate_resource(&resource, &data_path()).unwrap_err();
    assert!(error.to_string().contains("Resource.id must be a string"));

    let resource = json!({ "id": "1", "type": 7, "attributes": {} });
    let error = validator().validate_resource(&resource, &data_path()).unwrap_err();
    assert!(error.to_string().contains("Resource.type must be a string, found 7"));
}

#[test]
fn test_type_must_be_dasherized() {
    let resource = json!({ "id": "1", "type": "flyingDog", "attributes": {} });
    let error = validator().validate_resource(&resource, &data_path()).unwrap_err();

    assert!(error.to_string().contains(
        "Expected resource type to be dasherized, found 'flyingDog' instead of 'flying-dog'."
    ));
}

#[test]
fn test_unknown_type_has_no_schema() {
    let resource = json!({ "id": "1", "type": "spaceship", "attributes": {} });
    let error = validator().validate_resource(&resource, &data_path()).unwrap_err();

    assert!(error
        .to_string()
        .contains("Unknown resource, no schema was found for type 'spaceship'"));
}

#[test]
fn test_attributes_may_come_from_any_ancestor() {
    // name is declared on animal, breed on dog, wingspan on flying-dog.
    let resource = json!({
        "id": "1",
        "type": "flying-dog",
        "attributes": { "name": "Rex", "breed": "whippet", "wingspan": 30 }
    });

    assert!(validator().validate_resource(&resource, &data_path()).is_ok());
}

#[test]
fn test_unknown_attribute_names_the_schema() {
    let resource = json!({
        "id": "1",
        "type": "dog",
        "attributes": { "altitude": 300 }
    });
    let error = validator().validate_resource(&resource, &data_path()).unwrap_err();

    assert!(error
        .to_string()
        .contains("The attribute 'altitude' does not exist on the schema for type 'dog'"));
}

#[test]
fn test_validate_attributes_returns_one_error_per_unknown_key() {
    let validator = validator();
    let registry = menagerie();
    let schema = registry.get("dog").unwrap();

    let attributes = json!({ "breed": "collie", "altitude": 300, "wingspan": 9 });
    let errors = validator.validate_attributes(&schema, &attributes, &data_path());

    assert_eq!(errors.len(), 2);
}

#[test]
fn test_unknown_relationship_names_the_schema() {
    let resource = json!({
        "id": "1",
        "type": "dog",
        "relationships": { "enemies": { "data": [] } }
    });
    let error = validator().validate_resource(&resource, &data_path()).unwrap_err();

    assert!(error
        .to_string()
        .contains("The relationship 'enemies' does not exist on the schema for type 'dog'"));
}

#[test]
fn test_inherited_relationships_are_known() {
    // owner is declared on animal; dog inherits it through pet.
    let resource = json!({
        "id": "1",
        "type": "dog",
        "relationships": { "owner": { "data": null } }
    });

    assert!(validator().validate_resource(&resource, &data_path()).is_ok());
}

#[test]
fn test_to_many_data_must_be_an_array() {
    let resource = json!({
        "id": "2",
        "type": "person",
        "relationships": { "pets": { "data": { "type": "dog", "id": "1" } } }
    });
    let error = validator().validate_resource(&resource, &data_path()).unwrap_err();

    assert!(error.to_string().contains(
        "The data for the hasMany relationship 'pets' on a resource of type 'person' MUST be an array of references."
    ));
}

#[test]
fn test_to_one_data_must_be_a_single_reference() {
    let resource = json!({
        "id": "1",
        "type": "dog",
        "relationships": { "owner": { "data": [{ "type": "person", "id": "2" }] } }
    });
    let error = validator().validate_resource(&resource, &data_path()).unwrap_err();

    assert!(error.to_string().contains(
        "The data for the belongsTo relationship 'owner' on a resource of type 'dog' MUST be a single reference."
    ));
}

#[test]
fn test_reference_type_may_satisfy_the_target_through_inheritance() {
    // pets targets "pet", whose chain reaches "animal"; both satisfy it.
    let resource = json!({
        "id": "2",
        "type": "person",
        "relationships": {
            "pets": {
                "data": [
                    { "type": "pet", "id": "1" },
                    { "type": "animal", "id": "2" }
                ]
            }
        }
    });

    assert!(validator().validate_resource(&resource, &data_path()).is_ok());
}

#[test]
fn test_reference_type_must_sit_on_the_target_chain_itself() {
    // dog inherits from pet, not the other way around, so a dog entry
    // does not satisfy a relationship declared against pet.
    let resource = json!({
        "id": "2",
        "type": "person",
        "relationships": { "pets": { "data": [{ "type": "dog", "id": "4" }] } }
    });
    let error = validator().validate_resource(&resource, &data_path()).unwrap_err();

    assert!(error.to_string().contains(
        "The reference type 'dog' is not valid for the relationship 'pets' on a resource of type 'person'."
    ));
}

#[test]
fn test_reference_type_outside_the_target_chain_is_rejected() {
    let resource = json!({
        "id": "2",
        "type": "person",
        "relationships": { "pets": { "data": [{ "type": "plant", "id": "9" }] } }
    });
    let error = validator().validate_resource(&resource, &data_path()).unwrap_err();

    assert!(error.to_string().contains(
        "The reference type 'plant' is not valid for the relationship 'pets' on a resource of type 'person'."
    ));
}

#[test]
fn test_meta_only_relationships_follow_the_configured_policy() {
    let resource = json!({
        "id": "1",
        "type": "dog",
        "relationships": { "owner": { "meta": { "loaded": false } } }
    });

    let error = validator().validate_resource(&resource, &data_path()).unwrap_err();
    assert!(error.to_string().contains(
        "The relationship 'owner' on a resource of type 'dog' MUST NOT contain only 'meta'"
    ));

    let lenient = Validator::builder(menagerie())
        .meta_only_relationships(MetaOnlyRelationships::Allow)
        .build();
    assert!(lenient.validate_resource(&resource, &data_path()).is_ok());
}

#[test]
fn test_relationship_links_and_meta_must_be_objects_or_null() {
    let resource = json!({
        "id": "1",
        "type": "dog",
        "relationships": {
            "owner": {
                "data": null,
                "links": "https://api.example.com/dogs/1/owner"
            }
        }
    });
    let error = validator().validate_resource(&resource, &data_path()).unwrap_err();

    assert!(error.to_string().contains(
        "The 'links' member of the relationship 'owner' on a resource of type 'dog' MUST be an object or null."
    ));
}

#[test]
fn test_validate_reference_accepts_a_known_reference() {
    let validator = validator();
    let mut issues = Issues::new();

    let clean = validator.validate_reference(
        &json!({ "type": "dog", "id": "1", "meta": { "cached": true } }),
        &DocumentPath::document(),
        &mut issues,
    );

    assert!(clean);
    assert!(issues.is_clean());
}

#[test]
fn test_validate_reference_collects_every_problem() {
    let validator = validator();
    let mut issues = Issues::new();

    let clean = validator.validate_reference(
        &json!({ "type": "spaceship", "attributes": {} }),
        &DocumentPath::document(),
        &mut issues,
    );

    assert!(!clean);
    // Extra key, missing id, unknown schema.
    assert_eq!(issues.errors().len(), 3);
}

#[test]
fn test_plural_types_normalize_to_their_schema() {
    // "people" is already dasherized, so no format complaint, and the
    // normalizing formatter resolves it to the "person" schema.
    let resource = json!({
        "id": "2",
        "type": "people",
        "attributes": { "first-name": "Ada" }
    });
    let issues = validator().check_resource(&resource, &data_path());

    assert!(issues.is_clean());
}
