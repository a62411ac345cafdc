//! Tests for concurrent use of the registry and a shared validator.

use jsonapi_lint::{ResourceSchema, SchemaRegistry, Validator};
use serde_json::json;
use std::sync::Arc;
use std::thread;

#[test]
fn test_concurrent_document_validation() {
    let registry = SchemaRegistry::new();
    registry
        .register(ResourceSchema::new("article").attr("title"))
        .unwrap();
    let validator = Arc::new(Validator::builder(registry).build());

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let validator = Arc::clone(&validator);
            thread::spawn(move || {
                let document = json!({
                    "data": {
                        "id": i.to_string(),
                        "type": "article",
                        "attributes": { "title": format!("Post {}", i) }
                    }
                });
                assert!(validator.validate_document(&document).is_ok());

                let broken = json!({ "data": null });
                assert!(validator.validate_document(&broken).is_err());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_registration() {
    let registry = SchemaRegistry::new();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = registry.clone();
            thread::spawn(move || {
                registry
                    .register(ResourceSchema::new(format!("type-{}", i)))
                    .unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.types().len(), 8);
    for i in 0..8 {
        assert!(registry.contains(&format!("type-{}", i)));
    }
}

#[test]
fn test_registration_is_visible_to_a_live_validator() {
    let registry = SchemaRegistry::new();
    registry
        .register(ResourceSchema::new("article").attr("title"))
        .unwrap();
    let validator = Validator::builder(registry.clone()).build();

    let document = json!({
        "data": { "id": "1", "type": "comment", "attributes": {} }
    });
    // No "comment" schema yet; the resource path stays quiet during
    // document validation, so check the resource directly.
    let path = jsonapi_lint::DocumentPath::document().push_member("data");
    assert!(validator
        .validate_resource(&document["data"], &path)
        .is_err());

    registry.register(ResourceSchema::new("comment")).unwrap();
    assert!(validator
        .validate_resource(&document["data"], &path)
        .is_ok());
}
