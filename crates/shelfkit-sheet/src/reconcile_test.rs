use serde_json::json;

use super::*;

type Pages = IndexMap<String, IndexMap<String, Value>>;

fn pages(value: &Value) -> Pages {
    serde_json::from_value(value.clone()).expect("fixture must be {url: {field: value}}")
}

fn reconciled(items: &[(&str, Value)]) -> Table {
    let items: Vec<(String, Pages)> = items
        .iter()
        .map(|(id, v)| ((*id).to_string(), pages(v)))
        .collect();
    let mut table = build_table(&items);
    reconcile(&mut table);
    table
}

#[test]
fn mpn_merges_across_records_in_row_order() {
    let table = reconciled(&[
        ("111", json!({"https://a.example": {"mpn": "X"}})),
        ("222", json!({"https://b.example": {"offers_mpn": "Y"}})),
    ]);
    assert_eq!(table.column_values("MPN"), vec![Some("X"), Some("Y")]);
    assert!(!table.has_column("mpn"));
    assert!(!table.has_column("offers_mpn"));
}

#[test]
fn earlier_alias_wins_within_a_row() {
    let table = reconciled(&[(
        "111",
        json!({"https://a.example": {"mpn": "plain", "offers_mpn": "offer"}}),
    )]);
    assert_eq!(table.cell(0, "MPN"), Some("offer"));
}

#[test]
fn existing_canonical_value_is_kept() {
    let table = reconciled(&[(
        "111",
        json!({"https://a.example": {"price": "1.00", "offers_price": "2.00"}}),
    )]);
    assert_eq!(table.cell(0, "price"), Some("1.00"));
    assert!(!table.has_column("offers_price"));
}

#[test]
fn canonical_column_created_from_first_alias_then_gaps_filled() {
    let table = reconciled(&[
        (
            "111",
            json!({
                "https://a.example": {"offers_lowPrice": "3.00", "offers_highPrice": "5.00"},
                "https://b.example": {"offers_highPrice": "7.00"}
            }),
        ),
        ("222", json!({"https://c.example": {"name": "no price"}})),
    ]);
    assert_eq!(
        table.column_values("price"),
        vec![Some("3.00"), Some("7.00"), None]
    );
    assert!(!table.has_column("offers_lowPrice"));
    assert!(!table.has_column("offers_highPrice"));
}

#[test]
fn alias_match_ignores_case() {
    let table = reconciled(&[(
        "111",
        json!({"https://a.example": {"offers_priceSpecification_price": "4.50"}}),
    )]);
    assert_eq!(table.cell(0, "price"), Some("4.50"));
    assert!(!table.has_column("offers_priceSpecification_price"));
}

#[test]
fn availability_takes_offer_value() {
    let table = reconciled(&[(
        "111",
        json!({"https://a.example": {"offers_availability": "InStock"}}),
    )]);
    assert_eq!(table.cell(0, "availability"), Some("InStock"));
    assert!(!table.has_column("offers_availability"));
}

#[test]
fn denied_columns_never_survive() {
    let mut fields = serde_json::Map::new();
    for column in DENIED_COLUMNS {
        fields.insert((*column).to_string(), json!("noise"));
    }
    fields.insert("name".to_string(), json!("Widget"));

    let table = reconciled(&[("111", json!({"https://a.example": fields}))]);
    for column in DENIED_COLUMNS {
        assert!(!table.has_column(column), "{column} should be dropped");
    }
    assert_eq!(table.columns(), ["GTIN", "URL", "name"]);
}

#[test]
fn deny_list_is_case_sensitive() {
    let table = reconciled(&[(
        "111",
        json!({"https://a.example": {"brand_name": "dropped", "BRAND_NAME": "kept"}}),
    )]);
    assert!(!table.has_column("brand_name"));
    assert_eq!(table.cell(0, "BRAND_NAME"), Some("kept"));
}

#[test]
fn rows_are_keyed_by_identifier_and_url() {
    let table = reconciled(&[
        (
            "111",
            json!({"https://a.example": {"name": "A"}, "https://b.example": {"name": "B"}}),
        ),
        ("222", json!({"https://c.example": {"name": "C"}})),
    ]);
    assert_eq!(table.len(), 3);
    assert_eq!(
        table.column_values("GTIN"),
        vec![Some("111"), Some("111"), Some("222")]
    );
    assert_eq!(table.cell(2, "URL"), Some("https://c.example"));
    assert_eq!(&table.columns()[..2], ["GTIN", "URL"]);
}

#[test]
fn null_values_are_missing_and_numbers_are_text() {
    let table = reconciled(&[(
        "111",
        json!({"https://a.example": {"offers_price": 12.5, "price": null}}),
    )]);
    assert_eq!(table.cell(0, "price"), Some("12.5"));
}

#[test]
fn empty_input_has_only_key_columns() {
    let table = reconciled(&[]);
    assert!(table.is_empty());
    assert_eq!(table.columns(), ["GTIN", "URL"]);
}

#[test]
fn empty_values_do_not_block_later_aliases() {
    let table = reconciled(&[(
        "111",
        json!({"https://a.example": {
            "offers_mpn": "",
            "mpn": "X",
            "price": "",
            "offers_price": "9.99"
        }}),
    )]);
    assert_eq!(table.cell(0, "MPN"), Some("X"));
    assert_eq!(table.cell(0, "price"), Some("9.99"));
    assert!(!table.has_column("offers_price"));
}

#[test]
fn all_empty_sources_leave_canonical_empty() {
    let table = reconciled(&[(
        "111",
        json!({"https://a.example": {"description": "", "offers_description": ""}}),
    )]);
    assert_eq!(table.cell(0, "description"), Some(""));
    assert!(!table.has_column("offers_description"));
}
