// tests/output_tests.rs

use deepr::output::{to_json, to_json_pretty, to_value};
use deepr::{Expression, ParseOptions, parse_query};
use serde_json::json;

fn parse(query: serde_json::Value) -> Expression {
    parse_query(&query, &ParseOptions::default()).unwrap()
}

#[test]
fn test_leaf_value() {
    assert_eq!(
        to_value(&Expression::leaf("title")),
        json!({"sourceKey": "title", "isOptional": false, "useCollectionElements": false})
    );
}

#[test]
fn test_nested_value() {
    let root = parse(json!({"movies=>list": [{"()": {"limit": 2}, "title?": true}]}));

    assert_eq!(
        to_value(&root),
        json!({
            "sourceKey": "",
            "isOptional": false,
            "useCollectionElements": false,
            "nestedExpressions": {
                "list": {
                    "sourceKey": "movies",
                    "isOptional": false,
                    "useCollectionElements": true,
                    "params": {"limit": 2},
                    "nestedExpressions": {
                        "title": {
                            "sourceKey": "title",
                            "isOptional": true,
                            "useCollectionElements": false
                        }
                    }
                }
            }
        })
    );
}

#[test]
fn test_next_expression_value() {
    let root = parse(json!({"movie=>": true}));

    assert_eq!(
        to_value(&root)["nextExpression"],
        json!({"sourceKey": "movie", "isOptional": false, "useCollectionElements": false})
    );
    assert!(to_value(&root).get("nestedExpressions").is_none());
}

#[test]
fn test_null_params_are_rendered() {
    let root = parse(json!({"()": null}));
    assert_eq!(to_value(&root)["params"], json!(null));
    assert!(to_value(&root).as_object().unwrap().contains_key("params"));
}

#[test]
fn test_compact_output_keeps_query_order() {
    let root = parse(json!({"b": true, "a": true}));
    assert_eq!(
        to_json(&root),
        concat!(
            r#"{"sourceKey":"","isOptional":false,"useCollectionElements":false,"#,
            r#""nestedExpressions":{"#,
            r#""b":{"sourceKey":"b","isOptional":false,"useCollectionElements":false},"#,
            r#""a":{"sourceKey":"a","isOptional":false,"useCollectionElements":false}}}"#
        )
    );
}

#[test]
fn test_pretty_output() {
    let expected = r#"{
  "sourceKey": "title",
  "isOptional": false,
  "useCollectionElements": false
}"#;
    assert_eq!(to_json_pretty(&Expression::leaf("title")), expected);
}

#[test]
fn test_pretty_output_parses_back() {
    let root = parse(json!({"movie": {"title": true}}));
    let reparsed: serde_json::Value = serde_json::from_str(&to_json_pretty(&root)).unwrap();
    assert_eq!(reparsed, to_value(&root));
}
