//! Remote UI definition for the product-catalog sample.

use rfw_dsl::dsl::{
    double, event, for_in, hex_color, int, item, list, map, reference, string, widget,
};
use rfw_dsl::{Expression, RemoteWidgetLibrary, RemoteWidgetLibraryBuilder, RfwResult};

pub fn create_library() -> RfwResult<RemoteWidgetLibrary> {
    let mut builder = RemoteWidgetLibraryBuilder::new("catalog")?;
    builder.add_import("core.widgets")?.add_import("material")?;

    builder.define_widget(
        "root",
        widget("CatalogScreen", [])?,
        Some("Entry point widget used by the host application."),
    )?;

    builder.define_widget(
        "CatalogScreen",
        catalog_screen()?,
        Some("The primary scaffold layout containing the catalog list."),
    )?;

    builder.define_widget(
        "ProductCard",
        product_card()?,
        Some("Reusable tile that emits selection events back to the host."),
    )?;

    builder.define_widget(
        "ProductDetailScreen",
        product_detail_screen()?,
        Some("Detailed product layout with highlights and specifications."),
    )?;

    builder.define_widget(
        "SpecificationRow",
        specification_row()?,
        Some("Row displaying a specification label/value pair."),
    )?;

    builder.build()
}

pub fn create_library_text() -> RfwResult<String> {
    Ok(create_library()?.to_text())
}

fn padding(left: f64, top: f64, right: f64, bottom: f64) -> Expression {
    list([
        item(double(left)),
        item(double(top)),
        item(double(right)),
        item(double(bottom)),
    ])
}

fn text_line(content: Expression, style: Option<Expression>) -> RfwResult<Expression> {
    let mut arguments = vec![("text", list([item(content)]))];
    if let Some(style) = style {
        arguments.push(("style", style));
    }
    arguments.push(("textDirection", string("ltr")));
    widget("Text", arguments)
}

fn catalog_screen() -> RfwResult<Expression> {
    widget(
        "Scaffold",
        [
            ("backgroundColor", hex_color(0xFFF5F5F5)),
            (
                "appBar",
                widget(
                    "AppBar",
                    [(
                        "title",
                        text_line(string("Remote Catalog"), None)?,
                    )],
                )?,
            ),
            (
                "body",
                widget(
                    "Padding",
                    [
                        ("padding", padding(16.0, 16.0, 16.0, 16.0)),
                        (
                            "child",
                            widget(
                                "ListView",
                                [(
                                    "children",
                                    list([
                                        item(widget(
                                            "Padding",
                                            [
                                                ("padding", padding(8.0, 4.0, 12.0, 12.0)),
                                                (
                                                    "child",
                                                    text_line(
                                                        string("Today"),
                                                        Some(map([
                                                            ("fontSize", double(20.0)),
                                                            ("fontWeight", string("w600")),
                                                        ])?),
                                                    )?,
                                                ),
                                            ],
                                        )?),
                                        for_in(
                                            "product",
                                            reference(["data", "catalog", "items"])?,
                                            widget(
                                                "ProductCard",
                                                [("product", reference(["product"])?)],
                                            )?,
                                        )?,
                                    ]),
                                )],
                            )?,
                        ),
                    ],
                )?,
            ),
        ],
    )
}

fn product_card() -> RfwResult<Expression> {
    widget(
        "Card",
        [(
            "child",
            widget(
                "ListTile",
                [
                    (
                        "title",
                        text_line(
                            reference(["args", "product", "name"])?,
                            Some(map([("fontSize", double(18.0))])?),
                        )?,
                    ),
                    (
                        "subtitle",
                        widget(
                            "Text",
                            [
                                (
                                    "text",
                                    list([
                                        item(string("Rating ")),
                                        item(reference(["args", "product", "ratingText"])?),
                                        item(string(" • ")),
                                        item(reference(["args", "product", "category"])?),
                                    ]),
                                ),
                                ("style", map([("color", hex_color(0xFF666666))])?),
                                ("textDirection", string("ltr")),
                            ],
                        )?,
                    ),
                    (
                        "trailing",
                        text_line(
                            reference(["args", "product", "priceText"])?,
                            Some(map([("fontWeight", string("w600"))])?),
                        )?,
                    ),
                    (
                        "onTap",
                        event(
                            "catalog.select",
                            [
                                ("id", reference(["args", "product", "id"])?),
                                ("name", reference(["args", "product", "name"])?),
                            ],
                        )?,
                    ),
                ],
            )?,
        )],
    )
}

fn product_detail_screen() -> RfwResult<Expression> {
    widget(
        "Scaffold",
        [
            (
                "appBar",
                widget(
                    "AppBar",
                    [
                        (
                            "leading",
                            widget(
                                "GestureDetector",
                                [
                                    ("onTap", event("catalog.back", [])?),
                                    (
                                        "child",
                                        widget(
                                            "Padding",
                                            [
                                                ("padding", padding(8.0, 8.0, 8.0, 8.0)),
                                                (
                                                    "child",
                                                    widget(
                                                        "Icon",
                                                        [
                                                            ("codePoint", int(0xE5C4)),
                                                            (
                                                                "fontFamily",
                                                                string("MaterialIcons"),
                                                            ),
                                                        ],
                                                    )?,
                                                ),
                                            ],
                                        )?,
                                    ),
                                ],
                            )?,
                        ),
                        (
                            "title",
                            text_line(
                                reference(["data", "detail", "name"])?,
                                Some(map([("fontSize", double(18.0))])?),
                            )?,
                        ),
                    ],
                )?,
            ),
            (
                "body",
                widget(
                    "Padding",
                    [
                        ("padding", padding(20.0, 12.0, 20.0, 12.0)),
                        (
                            "child",
                            widget("ListView", [("children", detail_children()?)])?,
                        ),
                    ],
                )?,
            ),
        ],
    )
}

fn detail_children() -> RfwResult<Expression> {
    Ok(list([
        item(text_line(
            reference(["data", "detail", "category"])?,
            Some(map([
                ("fontSize", double(14.0)),
                ("color", hex_color(0xFF7A7A7A)),
            ])?),
        )?),
        item(widget(
            "Padding",
            [
                ("padding", padding(12.0, 0.0, 12.0, 16.0)),
                (
                    "child",
                    text_line(
                        reference(["data", "detail", "description"])?,
                        Some(map([
                            ("fontSize", double(16.0)),
                            ("height", double(1.4)),
                        ])?),
                    )?,
                ),
            ],
        )?),
        item(widget(
            "Card",
            [(
                "child",
                widget(
                    "ListTile",
                    [
                        (
                            "title",
                            text_line(
                                string("Price"),
                                Some(map([("fontWeight", string("w600"))])?),
                            )?,
                        ),
                        (
                            "subtitle",
                            text_line(
                                reference(["data", "detail", "priceText"])?,
                                Some(map([("fontSize", double(18.0))])?),
                            )?,
                        ),
                        (
                            "trailing",
                            widget(
                                "Card",
                                [
                                    ("color", hex_color(0xFFE1F5FE)),
                                    (
                                        "child",
                                        widget(
                                            "Padding",
                                            [
                                                ("padding", padding(8.0, 4.0, 8.0, 4.0)),
                                                (
                                                    "child",
                                                    text_line(
                                                        reference([
                                                            "data",
                                                            "detail",
                                                            "ratingText",
                                                        ])?,
                                                        None,
                                                    )?,
                                                ),
                                            ],
                                        )?,
                                    ),
                                ],
                            )?,
                        ),
                    ],
                )?,
            )],
        )?),
        item(widget(
            "Padding",
            [
                ("padding", padding(16.0, 8.0, 8.0, 4.0)),
                (
                    "child",
                    text_line(
                        string("Highlights"),
                        Some(map([
                            ("fontSize", double(16.0)),
                            ("fontWeight", string("w600")),
                        ])?),
                    )?,
                ),
            ],
        )?),
        for_in(
            "highlight",
            reference(["data", "detail", "highlights"])?,
            widget(
                "ListTile",
                [
                    (
                        "leading",
                        widget(
                            "Icon",
                            [
                                ("codePoint", int(0xE86C)),
                                ("fontFamily", string("MaterialIcons")),
                                ("color", hex_color(0xFF558B2F)),
                            ],
                        )?,
                    ),
                    ("title", text_line(reference(["highlight"])?, None)?),
                ],
            )?,
        )?,
        item(widget(
            "Padding",
            [
                ("padding", padding(16.0, 16.0, 8.0, 4.0)),
                (
                    "child",
                    text_line(
                        string("Specifications"),
                        Some(map([
                            ("fontSize", double(16.0)),
                            ("fontWeight", string("w600")),
                        ])?),
                    )?,
                ),
            ],
        )?),
        for_in(
            "spec",
            reference(["data", "detail", "specifications"])?,
            widget("SpecificationRow", [("spec", reference(["spec"])?)])?,
        )?,
        item(widget(
            "Padding",
            [
                ("padding", padding(16.0, 24.0, 16.0, 36.0)),
                (
                    "child",
                    widget(
                        "ElevatedButton",
                        [
                            (
                                "onPressed",
                                event(
                                    "catalog.buy",
                                    [
                                        ("id", reference(["data", "detail", "id"])?),
                                        ("name", reference(["data", "detail", "name"])?),
                                    ],
                                )?,
                            ),
                            ("child", text_line(string("Add to Cart"), None)?),
                        ],
                    )?,
                ),
            ],
        )?),
    ]))
}

fn specification_row() -> RfwResult<Expression> {
    widget(
        "ListTile",
        [
            (
                "title",
                text_line(
                    reference(["args", "spec", "label"])?,
                    Some(map([("fontWeight", string("w500"))])?),
                )?,
            ),
            (
                "trailing",
                text_line(
                    reference(["args", "spec", "value"])?,
                    Some(map([("color", hex_color(0xFF424242))])?),
                )?,
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_library_renders_every_widget() {
        let text = create_library_text().unwrap();

        assert!(text.starts_with("import core.widgets;\nimport material;\n\n"));
        for name in [
            "root",
            "CatalogScreen",
            "ProductCard",
            "ProductDetailScreen",
            "SpecificationRow",
        ] {
            assert!(text.contains(&format!("widget {name} = ")), "missing {name}");
        }
        assert!(text.contains("...for product in data.catalog.items:"));
        assert!(text.contains("event \"catalog.select\""));
    }
}
