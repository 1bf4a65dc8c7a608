use jsonapi_model::{
    Attributes, ErrorObject, Link, Links, Meta, Relationship, Relationships, Resource,
    ResourceIdentifier,
};
use serde_json::json;

fn make_resource() -> Resource {
    let mut attributes = Attributes::new();
    attributes.insert("name".to_string(), json!("Ana"));
    Resource {
        id: "9".to_string(),
        kind: "person".to_string(),
        attributes,
        relationships: Relationships::new(),
        links: Links::new(),
        meta: Meta::new(),
    }
}

#[test]
fn resource_serializes_to_golden_json() {
    assert_eq!(
        serde_json::to_string(&make_resource()).unwrap(),
        r#"{"id":"9","type":"person","attributes":{"name":"Ana"}}"#
    );
}

#[test]
fn bare_resource_keeps_only_identity() {
    let resource = Resource {
        id: "1".to_string(),
        kind: "widget".to_string(),
        attributes: Attributes::new(),
        relationships: Relationships::new(),
        links: Links::new(),
        meta: Meta::new(),
    };

    assert_eq!(
        serde_json::to_string(&resource).unwrap(),
        r#"{"id":"1","type":"widget"}"#
    );
}

#[test]
fn attributes_keep_insertion_order() {
    let mut resource = make_resource();
    resource.attributes.insert("zip".to_string(), json!("90210"));
    resource.attributes.insert("age".to_string(), json!(30));

    assert_eq!(
        serde_json::to_string(&resource).unwrap(),
        r#"{"id":"9","type":"person","attributes":{"name":"Ana","zip":"90210","age":30}}"#
    );
}

#[test]
fn link_variants_serialize_untagged() {
    let mut docs_meta = Meta::new();
    docs_meta.insert("count", json!(10));

    let mut links = Links::new();
    links.insert_url("self", "http://example.com/people/9");
    links.insert("docs", Link::object("http://example.com/docs", docs_meta));

    assert_eq!(
        serde_json::to_string(&links).unwrap(),
        r#"{"self":"http://example.com/people/9","docs":{"href":"http://example.com/docs","meta":{"count":10}}}"#
    );
}

#[test]
fn link_object_meta_is_omitted_when_empty() {
    let link = Link::object("http://example.com/docs", Meta::new());

    assert_eq!(
        serde_json::to_string(&link).unwrap(),
        r#"{"href":"http://example.com/docs"}"#
    );
}

#[test]
fn link_round_trips_both_shapes() {
    let bare: Link = serde_json::from_value(json!("http://example.com")).unwrap();
    assert_eq!(bare, Link::url("http://example.com"));

    let object: Link = serde_json::from_value(json!({"href": "http://example.com"})).unwrap();
    assert_eq!(object, Link::object("http://example.com", Meta::new()));
}

#[test]
fn relationship_linkage_shapes() {
    let to_one = Relationship::to_one(ResourceIdentifier::new("person", "9"));
    assert_eq!(
        serde_json::to_string(&to_one).unwrap(),
        r#"{"data":{"type":"person","id":"9"}}"#
    );

    let to_many = Relationship::to_many(vec![
        ResourceIdentifier::new("comment", "1"),
        ResourceIdentifier::new("comment", "2"),
    ]);
    assert_eq!(
        serde_json::to_string(&to_many).unwrap(),
        r#"{"data":[{"type":"comment","id":"1"},{"type":"comment","id":"2"}]}"#
    );
}

#[test]
fn relationship_linkage_round_trips() {
    let to_one = Relationship::to_one(ResourceIdentifier::new("person", "9"));
    let parsed: Relationship =
        serde_json::from_value(serde_json::to_value(&to_one).unwrap()).unwrap();
    assert_eq!(parsed, to_one);

    let to_many = Relationship::to_many(vec![ResourceIdentifier::new("comment", "1")]);
    let parsed: Relationship =
        serde_json::from_value(serde_json::to_value(&to_many).unwrap()).unwrap();
    assert_eq!(parsed, to_many);
}

#[test]
fn identifier_meta_round_trips() {
    let mut identifier = ResourceIdentifier::new("person", "9");
    identifier.meta.insert("rank", json!(1));

    let value = serde_json::to_value(&identifier).unwrap();
    assert_eq!(value, json!({"type": "person", "id": "9", "meta": {"rank": 1}}));

    let parsed: ResourceIdentifier = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, identifier);
}

#[test]
fn identifier_meta_is_omitted_when_empty() {
    assert_eq!(
        serde_json::to_string(&ResourceIdentifier::new("person", "9")).unwrap(),
        r#"{"type":"person","id":"9"}"#
    );
}

#[test]
fn error_object_with_nothing_populated_is_empty_object() {
    assert_eq!(serde_json::to_string(&ErrorObject::default()).unwrap(), "{}");
}

#[test]
fn error_object_serializes_present_fields_only() {
    let error = ErrorObject {
        status: Some("404".to_string()),
        title: Some("Not Found".to_string()),
        ..ErrorObject::default()
    };

    assert_eq!(
        serde_json::to_string(&error).unwrap(),
        r#"{"status":"404","title":"Not Found"}"#
    );
}

#[test]
fn meta_merge_is_left_biased() {
    let mut left = Meta::new();
    left.insert("a", json!(1));

    let mut right = Meta::new();
    right.insert("a", json!(2));
    right.insert("b", json!(3));

    let merged = left.merge(right);
    assert_eq!(serde_json::to_string(&merged).unwrap(), r#"{"a":1,"b":3}"#);
}

#[test]
fn meta_merge_with_empty_is_identity() {
    let mut meta = Meta::new();
    meta.insert("a", json!(1));

    assert_eq!(meta.clone().merge(Meta::new()), meta);
    assert_eq!(Meta::new().merge(meta.clone()), meta);
}

#[test]
fn links_merge_is_left_biased() {
    let mut left = Links::new();
    left.insert_url("self", "http://example.com/a");

    let mut right = Links::new();
    right.insert_url("self", "http://example.com/b");
    right.insert_url("related", "http://example.com/c");

    let merged = left.merge(right);
    assert_eq!(merged.get("self"), Some(&Link::url("http://example.com/a")));
    assert_eq!(
        merged.get("related"),
        Some(&Link::url("http://example.com/c"))
    );
    assert_eq!(merged.len(), 2);
}

#[test]
fn links_merge_with_empty_is_identity() {
    let mut links = Links::new();
    links.insert_url("self", "http://example.com/a");

    assert_eq!(links.clone().merge(Links::new()), links);
    assert_eq!(Links::new().merge(links.clone()), links);
}
