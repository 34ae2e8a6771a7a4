use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use serde::Serialize;
use serde_bytes_shim::Bytes;
use serde_xml_tree::{
    to_document, to_string, to_string_pretty, BytesStrategy, Error, FloatStrategy, KeyStrategy,
    NodePlacement, PlacementStrategy, Timestamp, TimestampStrategy, XmlOptions,
};

/// serialize_bytes is normally reached through crates like serde_bytes;
/// this minimal stand-in keeps the tests self-contained.
mod serde_bytes_shim {
    use serde::ser::{Serialize, Serializer};

    pub struct Bytes(pub Vec<u8>);

    impl Serialize for Bytes {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_bytes(&self.0)
        }
    }
}

#[derive(Serialize)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[test]
fn test_scalar_root() {
    let xml = to_string(&true, "container", &XmlOptions::new()).unwrap();
    assert_eq!(xml, "<container>true</container>");
}

#[test]
fn test_simple_struct() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    };

    let xml = to_string(&user, "user", &XmlOptions::new()).unwrap();
    assert_eq!(
        xml,
        "<user><id>123</id><name>Alice</name><active>true</active>\
         <tags><tags>admin</tags><tags>developer</tags></tags></user>"
    );
}

#[test]
fn test_nested_struct() {
    #[derive(Serialize)]
    struct Order {
        order_id: u32,
        customer: User,
    }

    let order = Order {
        order_id: 12345,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec![],
        },
    };

    let xml = to_string(&order, "order", &XmlOptions::new()).unwrap();
    assert_eq!(
        xml,
        "<order><order_id>12345</order_id><customer><id>123</id>\
         <name>Alice</name><active>true</active><tags/></customer></order>"
    );
}

#[test]
fn test_sorted_mixed_shapes() {
    #[derive(Serialize)]
    struct Container {
        single: u32,
        keyed: BTreeMap<String, u32>,
        unkeyed: Vec<String>,
    }

    let mut keyed = BTreeMap::new();
    keyed.insert("foo".to_string(), 1);
    keyed.insert("bar".to_string(), 2);
    let container = Container {
        single: 42,
        keyed,
        unkeyed: vec!["baz".to_string(), "blee".to_string()],
    };

    let options = XmlOptions::new().with_sort_keys(true);
    let xml = to_string(&container, "container", &options).unwrap();
    assert_eq!(
        xml,
        "<container><keyed><bar>2</bar><foo>1</foo></keyed><single>42</single>\
         <unkeyed><unkeyed>baz</unkeyed><unkeyed>blee</unkeyed></unkeyed></container>"
    );
}

#[test]
fn test_bytes_default_to_base64() {
    let xml = to_string(&Bytes(b"deadbeef".to_vec()), "container", &XmlOptions::new()).unwrap();
    assert_eq!(xml, "<container>ZGVhZGJlZWY=</container>");
}

#[test]
fn test_bytes_raw_become_cdata() {
    let options = XmlOptions::new().with_bytes(BytesStrategy::Raw);
    let xml = to_string(&Bytes(b"DATA".to_vec()), "container", &options).unwrap();
    assert_eq!(xml, "<container><![CDATA[DATA]]></container>");
}

#[test]
fn test_bytes_custom_hook() {
    let options = XmlOptions::new().with_bytes(BytesStrategy::Custom(Arc::new(
        |bytes, encoder| {
            let hex: String = bytes.iter().map(|byte| format!("{byte:02x}")).collect();
            encoder.write_text(hex);
            Ok(())
        },
    )));
    let xml = to_string(&Bytes(vec![0xde, 0xad]), "container", &options).unwrap();
    assert_eq!(xml, "<container>dead</container>");
}

#[test]
fn test_infinity_rejected_with_path() {
    #[derive(Serialize)]
    struct Reading {
        sensor: String,
        value: f64,
    }

    let error = to_string(
        &Reading {
            sensor: "a".to_string(),
            value: f64::INFINITY,
        },
        "reading",
        &XmlOptions::new(),
    )
    .unwrap_err();
    match error {
        Error::FloatNotRepresentable { value, path } => {
            assert_eq!(value, "INF");
            assert_eq!(path, "value");
        }
        other => panic!("expected float error, got {other:?}"),
    }
}

#[test]
fn test_non_finite_floats_substituted() {
    #[derive(Serialize)]
    struct Extremes {
        up: f64,
        down: f64,
        neither: f64,
    }

    let options = XmlOptions::new().with_floats(FloatStrategy::Substitute {
        positive_infinity: "+inf".to_string(),
        negative_infinity: "-inf".to_string(),
        nan: "none".to_string(),
    });
    let xml = to_string(
        &Extremes {
            up: f64::INFINITY,
            down: f64::NEG_INFINITY,
            neither: f64::NAN,
        },
        "extremes",
        &options,
    )
    .unwrap();
    assert_eq!(
        xml,
        "<extremes><up>+inf</up><down>-inf</down><neither>none</neither></extremes>"
    );
}

#[test]
fn test_timestamp_strategies() {
    #[derive(Serialize)]
    struct Event {
        at: Timestamp,
    }

    let event = Event {
        at: Timestamp(Utc.with_ymd_and_hms(2001, 9, 9, 1, 46, 40).unwrap()),
    };

    let cases: Vec<(TimestampStrategy, &str)> = vec![
        (
            TimestampStrategy::DeferredToTimestamp,
            "<event><at>2001-09-09T01:46:40Z</at></event>",
        ),
        (
            TimestampStrategy::EpochSeconds,
            "<event><at>1000000000</at></event>",
        ),
        (
            TimestampStrategy::EpochMilliseconds,
            "<event><at>1000000000000</at></event>",
        ),
        (
            TimestampStrategy::Rfc3339,
            "<event><at>2001-09-09T01:46:40Z</at></event>",
        ),
        (
            TimestampStrategy::Format("%Y-%m-%d".to_string()),
            "<event><at>2001-09-09</at></event>",
        ),
    ];
    for (strategy, expected) in cases {
        let options = XmlOptions::new().with_timestamps(strategy);
        assert_eq!(to_string(&event, "event", &options).unwrap(), expected);
    }
}

#[test]
fn test_timestamp_custom_hook() {
    #[derive(Serialize)]
    struct Event {
        at: Timestamp,
    }

    let options = XmlOptions::new().with_timestamps(TimestampStrategy::Custom(Arc::new(
        |instant, encoder| encoder.encode(&instant.timestamp_millis()),
    )));
    let event = Event {
        at: Timestamp(Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 1).unwrap()),
    };
    assert_eq!(
        to_string(&event, "event", &options).unwrap(),
        "<event><at>1000</at></event>"
    );
}

#[test]
fn test_timestamp_hook_writing_nothing_leaves_empty_element() {
    #[derive(Serialize)]
    struct Event {
        at: Timestamp,
    }

    let options =
        XmlOptions::new().with_timestamps(TimestampStrategy::Custom(Arc::new(|_, _| Ok(()))));
    let event = Event {
        at: Timestamp(Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 1).unwrap()),
    };
    assert_eq!(
        to_string(&event, "event", &options).unwrap(),
        "<event><at/></event>"
    );
}

#[test]
fn test_snake_case_keys() {
    #[derive(Serialize)]
    #[allow(non_snake_case)]
    struct Profile {
        userName: String,
        homeURL: String,
    }

    let profile = Profile {
        userName: "alice".to_string(),
        homeURL: "https://example.com".to_string(),
    };
    let options = XmlOptions::new().with_keys(KeyStrategy::SnakeCase);
    let xml = to_string(&profile, "profile", &options).unwrap();
    assert_eq!(
        xml,
        "<profile><user_name>alice</user_name><home_url>https://example.com</home_url></profile>"
    );
}

#[test]
fn test_custom_key_hook_sees_the_path() {
    #[derive(Serialize)]
    struct Outer {
        inner: Inner,
    }

    #[derive(Serialize)]
    struct Inner {
        leaf: u8,
    }

    let options = XmlOptions::new().with_keys(KeyStrategy::Custom(Arc::new(|path, segment| {
        if path.is_empty() {
            segment.name.clone()
        } else {
            format!("{}_{}", path.segments().len(), segment.name)
        }
    })));
    let xml = to_string(&Outer { inner: Inner { leaf: 1 } }, "o", &options).unwrap();
    assert_eq!(xml, "<o><inner><1_leaf>1</1_leaf></inner></o>");
}

#[test]
fn test_attribute_placement() {
    #[derive(Serialize)]
    struct Item {
        id: u32,
        label: String,
    }

    let options = XmlOptions::new().with_placement(PlacementStrategy::Custom(Arc::new(
        |_path, segment| {
            if segment.name == "id" {
                NodePlacement::Attribute
            } else {
                NodePlacement::Element
            }
        },
    )));
    let item = Item {
        id: 7,
        label: "bolt".to_string(),
    };
    assert_eq!(
        to_string(&item, "item", &options).unwrap(),
        "<item id=\"7\"><label>bolt</label></item>"
    );
}

#[test]
fn test_structured_value_cannot_be_an_attribute() {
    #[derive(Serialize)]
    struct Outer {
        inner: Inner,
    }

    #[derive(Serialize)]
    struct Inner {
        leaf: u8,
    }

    let options = XmlOptions::new().with_placement(PlacementStrategy::Custom(Arc::new(
        |_, _| NodePlacement::Attribute,
    )));
    let error = to_string(&Outer { inner: Inner { leaf: 1 } }, "o", &options).unwrap_err();
    match error {
        Error::AttributePlacement { path } => assert_eq!(path, "inner"),
        other => panic!("expected placement error, got {other:?}"),
    }
}

#[test]
fn test_optional_attribute_is_omitted_when_none() {
    #[derive(Serialize)]
    struct Item {
        id: Option<u32>,
        label: String,
    }

    let options = XmlOptions::new().with_placement(PlacementStrategy::Custom(Arc::new(
        |_path, segment| {
            if segment.name == "id" {
                NodePlacement::Attribute
            } else {
                NodePlacement::Element
            }
        },
    )));
    let item = Item {
        id: None,
        label: "bolt".to_string(),
    };
    assert_eq!(
        to_string(&item, "item", &options).unwrap(),
        "<item><label>bolt</label></item>"
    );
}

#[test]
fn test_enum_variants() {
    #[derive(Serialize)]
    enum Shape {
        Point,
        Circle(f64),
        Segment(f64, f64),
        Rect { w: f64, h: f64 },
    }

    #[derive(Serialize)]
    struct Drawing {
        shape: Shape,
    }

    let options = XmlOptions::new();
    assert_eq!(
        to_string(&Drawing { shape: Shape::Point }, "d", &options).unwrap(),
        "<d><shape>Point</shape></d>"
    );
    assert_eq!(
        to_string(&Drawing { shape: Shape::Circle(1.5) }, "d", &options).unwrap(),
        "<d><shape><Circle>1.5</Circle></shape></d>"
    );
    assert_eq!(
        to_string(
            &Drawing { shape: Shape::Segment(1.0, 2.0) },
            "d",
            &options
        )
        .unwrap(),
        "<d><shape><Segment><Segment>1</Segment><Segment>2</Segment></Segment></shape></d>"
    );
    assert_eq!(
        to_string(
            &Drawing { shape: Shape::Rect { w: 3.0, h: 4.0 } },
            "d",
            &options
        )
        .unwrap(),
        "<d><shape><Rect><w>3</w><h>4</h></Rect></shape></d>"
    );
}

#[test]
fn test_pretty_printing() {
    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    let xml = to_string_pretty(&Point { x: 1, y: 2 }, "point").unwrap();
    assert_eq!(xml, "<point>\n    <x>1</x>\n    <y>2</y>\n</point>\n");
}

#[test]
fn test_to_writer() {
    let mut buffer = Vec::new();
    serde_xml_tree::to_writer(&mut buffer, &7u32, "n", &XmlOptions::new()).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), "<n>7</n>");
}

#[test]
fn test_document_tree_is_inspectable() {
    #[derive(Serialize)]
    struct Pair {
        left: u8,
        right: u8,
    }

    let document = to_document(&Pair { left: 1, right: 2 }, "pair", &XmlOptions::new()).unwrap();
    assert_eq!(document.header, None);
    let children = document.root.content.as_children().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].name, "left");
    assert_eq!(children[1].content.as_text(), Some("2"));
}

#[test]
fn test_text_escaping_end_to_end() {
    #[derive(Serialize)]
    struct Note {
        body: String,
    }

    let xml = to_string(
        &Note {
            body: "1 < 2 && 3 > 2".to_string(),
        },
        "note",
        &XmlOptions::new(),
    )
    .unwrap();
    assert_eq!(
        xml,
        "<note><body>1 &lt; 2 &amp;&amp; 3 &gt; 2</body></note>"
    );
}
