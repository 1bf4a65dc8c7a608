use jsonapi_model::{
    Attributes, ConversionError, Linkage, Meta, MetaFragment, Relationship, Relationships,
    Resource, ResourceIdentifier, Resourceful,
};
use serde::Serialize;
use serde_json::json;

struct Article {
    id: String,
    title: String,
    author_id: String,
}

impl Resourceful for Article {
    fn resource_type(&self) -> String {
        "article".to_string()
    }

    fn resource_id(&self) -> String {
        self.id.clone()
    }

    fn attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        attributes.insert("title".to_string(), self.title.clone().into());
        attributes
    }

    fn relationships(&self) -> Relationships {
        let mut relationships = Relationships::new();
        relationships.insert(
            "author".to_string(),
            Relationship::to_one(ResourceIdentifier::new("person", self.author_id.clone())),
        );
        relationships
    }
}

fn make_article() -> Article {
    Article {
        id: "7".to_string(),
        title: "Intro".to_string(),
        author_id: "9".to_string(),
    }
}

#[test]
fn entity_converts_to_canonical_resource() {
    let resource = Resource::from_entity(&make_article()).unwrap();

    assert_eq!(resource.id, "7");
    assert_eq!(resource.kind, "article");
    assert_eq!(
        serde_json::to_string(&resource).unwrap(),
        r#"{"id":"7","type":"article","attributes":{"title":"Intro"},"relationships":{"author":{"data":{"type":"person","id":"9"}}}}"#
    );
}

#[test]
fn relationships_resolve_to_identifiers_only() {
    let resource = Resource::from_entity(&make_article()).unwrap();
    let author = resource.relationships.get("author").unwrap();

    match &author.data {
        Linkage::ToOne(identifier) => {
            assert_eq!(identifier.kind, "person");
            assert_eq!(identifier.id, "9");
        }
        Linkage::ToMany(_) => panic!("author linkage should be to-one"),
    }
}

#[test]
fn empty_id_fails_conversion() {
    let mut article = make_article();
    article.id = String::new();

    let err = Resource::from_entity(&article).unwrap_err();
    assert!(matches!(
        err,
        ConversionError::MissingIdentity { field: "id" }
    ));
}

#[test]
fn empty_type_fails_conversion() {
    struct Untyped;

    impl Resourceful for Untyped {
        fn resource_type(&self) -> String {
            String::new()
        }
        fn resource_id(&self) -> String {
            "1".to_string()
        }
        fn attributes(&self) -> Attributes {
            Attributes::new()
        }
        fn relationships(&self) -> Relationships {
            Relationships::new()
        }
    }

    let err = Resource::from_entity(&Untyped).unwrap_err();
    assert!(matches!(
        err,
        ConversionError::MissingIdentity { field: "type" }
    ));
}

#[test]
fn identifier_helper_reports_the_pair() {
    let resource = Resource::from_entity(&make_article()).unwrap();
    assert_eq!(resource.identifier(), ResourceIdentifier::new("article", "7"));
}

#[test]
fn meta_fragment_inserts_under_its_fixed_key() {
    #[derive(Serialize)]
    struct PageInfo {
        total: u64,
    }

    impl MetaFragment for PageInfo {
        const KEY: &'static str = "page";
    }

    let meta = Meta::from_fragment(&PageInfo { total: 3 }).unwrap();
    assert_eq!(meta.get("page"), Some(&json!({"total": 3})));
    assert_eq!(meta.len(), 1);
}
