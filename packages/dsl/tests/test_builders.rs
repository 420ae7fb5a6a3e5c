use rfw_dsl::dsl::{double, event_with, item, list, map_with, string, widget, widget_with};
use rfw_dsl::{serialize, Argument, RemoteWidgetLibraryBuilder, Value};

fn library_with_root(body: rfw_dsl::Expression) -> rfw_dsl::RemoteWidgetLibrary {
    let mut builder = RemoteWidgetLibraryBuilder::new("test").unwrap();
    builder.define_widget("root", body, None).unwrap();
    builder.build().unwrap()
}

#[test]
fn test_widget_with_configuration_closure() {
    let body = widget_with("Container", |args| {
        args.argument("width", 120.0)?
            .argument("height", 48i64)?
            .child(widget("Spacer", [])?)?;
        Ok(())
    })
    .unwrap();

    let text = library_with_root(body).to_text();
    let expected = "\
widget root = Container(
  width: 120,
  height: 48,
  child: Spacer(
  ),
);
";
    assert_eq!(text, expected);
}

#[test]
fn test_event_with_and_map_with() {
    let body = widget_with("GestureDetector", |args| {
        args.argument(
            "onTap",
            event_with("shop.checkout", |payload| {
                payload.argument("coupon", "WELCOME")?;
                Ok(())
            })?,
        )?;
        args.argument(
            "metadata",
            map_with(|entries| {
                entries.argument("version", 2i64)?;
                Ok(())
            })?,
        )?;
        Ok(())
    })
    .unwrap();

    let text = library_with_root(body).to_text();
    assert!(text.contains("onTap: event \"shop.checkout\" {\n    coupon: \"WELCOME\",\n  },"));
    assert!(text.contains("metadata: {\n    version: 2,\n  },"));
}

#[test]
fn test_argument_sugar_helpers() {
    let body = widget_with("Padding", |args| {
        args.padding([
            Value::from(16.0),
            Value::from(8.0),
            Value::from(16.0),
            Value::from(8.0),
        ])?;
        args.children([Value::from("one"), Value::from("two")])?;
        Ok(())
    })
    .unwrap();

    let text = library_with_root(body).to_text();
    assert!(text.contains("padding: [\n    16,\n    8,\n    16,\n    8,\n  ],"));
    assert!(text.contains("children: [\n    \"one\",\n    \"two\",\n  ],"));
}

#[test]
fn test_named_arguments_added_in_bulk() {
    let first = Argument::new("label", "Total").unwrap();
    let second = Argument::new("amount", double(12.5)).unwrap();

    let body = widget_with("PriceRow", |args| {
        args.add_all([first, second])?;
        Ok(())
    })
    .unwrap();

    let text = library_with_root(body).to_text();
    assert!(text.contains("label: \"Total\",\n  amount: 12.5,"));
}

#[test]
fn test_serialize_matches_to_text() {
    let library = library_with_root(widget("Spacer", []).unwrap());
    assert_eq!(serialize(&library), library.to_text());
}

#[test]
fn test_expression_serde_representation_is_tagged() {
    let expression = widget("Text", [("text", string("hi"))]).unwrap();
    let json = serde_json::to_value(&expression).unwrap();

    assert_eq!(json["type"], "Widget");
    assert_eq!(json["name"], "Text");
    assert_eq!(json["arguments"]["text"]["type"], "StringLiteral");

    let restored: rfw_dsl::Expression = serde_json::from_value(json).unwrap();
    assert_eq!(restored, expression);
}

#[test]
fn test_escaped_strings_round_trip() {
    let original = "tab\there \"quoted\" back\\slash\r\nend";
    let library = library_with_root(list([item(string(original))]));
    let text = library.to_text();

    let escaped = text
        .lines()
        .find(|line| line.trim_start().starts_with('"'))
        .unwrap()
        .trim()
        .trim_end_matches(',');
    let inner = &escaped[1..escaped.len() - 1];

    // Mechanically reverse the escape table.
    let mut recovered = String::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            recovered.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => recovered.push('\\'),
            Some('"') => recovered.push('"'),
            Some('n') => recovered.push('\n'),
            Some('r') => recovered.push('\r'),
            Some('t') => recovered.push('\t'),
            other => panic!("unexpected escape: {other:?}"),
        }
    }

    assert_eq!(recovered, original);
}
