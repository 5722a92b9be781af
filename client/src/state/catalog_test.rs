use super::*;

fn variant_json(id: u32, color: &str, quantity: u32) -> String {
    format!(r#"{{"id":{id},"color":"{color}","image":"./{color}.jpg","quantity":{quantity}}}"#)
}

fn catalog_json(variants: &[String]) -> String {
    format!(
        r#"{{"product":"Socks","brand":"Vue Mastery","alt_text":"A pair of socks","details":["80% cotton"],"variants":[{}]}}"#,
        variants.join(",")
    )
}

// =============================================================
// Embedded catalog
// =============================================================

#[test]
fn embedded_catalog_loads_socks() {
    let catalog = Catalog::embedded().unwrap();
    assert_eq!(catalog.product, "Socks");
    assert_eq!(catalog.brand, "Vue Mastery");
    assert_eq!(catalog.alt_text, "A pair of socks");
    assert_eq!(catalog.details, vec!["80% cotton", "20% polyester", "Gender-neutral"]);
}

#[test]
fn embedded_catalog_variants_match_product_sheet() {
    let catalog = Catalog::embedded().unwrap();
    assert_eq!(
        catalog.variants,
        vec![
            Variant {
                id: 2234,
                color: "green".to_owned(),
                image: "./assets/vmSocks-green-onWhite.jpg".to_owned(),
                quantity: 10,
            },
            Variant {
                id: 2235,
                color: "blue".to_owned(),
                image: "./assets/vmSocks-blue-onWhite.jpg".to_owned(),
                quantity: 0,
            },
        ]
    );
}

// =============================================================
// Validation
// =============================================================

#[test]
fn from_json_accepts_single_variant() {
    let raw = catalog_json(&[variant_json(1, "red", 3)]);
    let catalog = Catalog::from_json(&raw).unwrap();
    assert_eq!(catalog.variants.len(), 1);
    assert_eq!(catalog.variants[0].color, "red");
}

#[test]
fn from_json_defaults_missing_details_to_empty() {
    let raw = format!(
        r#"{{"product":"Hat","brand":"Acme","alt_text":"A hat","variants":[{}]}}"#,
        variant_json(7, "black", 1)
    );
    let catalog = Catalog::from_json(&raw).unwrap();
    assert!(catalog.details.is_empty());
}

#[test]
fn from_json_rejects_empty_variants() {
    let raw = catalog_json(&[]);
    assert!(matches!(Catalog::from_json(&raw), Err(CatalogError::NoVariants)));
}

#[test]
fn from_json_rejects_duplicate_variant_ids() {
    let raw = catalog_json(&[variant_json(5, "red", 1), variant_json(5, "blue", 2)]);
    assert!(matches!(
        Catalog::from_json(&raw),
        Err(CatalogError::DuplicateVariant(5))
    ));
}

#[test]
fn from_json_rejects_malformed_json() {
    let err = Catalog::from_json("{ not json").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse catalog:"));
}

#[test]
fn from_json_rejects_negative_quantity() {
    let raw = catalog_json(&[r#"{"id":1,"color":"red","image":"./r.jpg","quantity":-1}"#.to_owned()]);
    assert!(matches!(Catalog::from_json(&raw), Err(CatalogError::Parse(_))));
}

#[test]
fn catalog_error_messages_are_readable() {
    assert_eq!(CatalogError::NoVariants.to_string(), "catalog has no variants");
    assert_eq!(CatalogError::DuplicateVariant(42).to_string(), "duplicate variant id: 42");
}
