//! Sample catalog data served alongside the remote widget library.

use rfw_dynamic::{DynamicContentBuilder, DynamicResult};
use serde_json::{json, Value};

struct Product {
    id: i64,
    name: &'static str,
    category: &'static str,
    price_text: &'static str,
    rating_text: &'static str,
    highlights: &'static [&'static str],
    description: &'static str,
    specifications: &'static [(&'static str, &'static str)],
}

static PRODUCTS: &[Product] = &[
    Product {
        id: 1,
        name: "Linden Desk",
        category: "Home Office",
        price_text: "$799",
        rating_text: "4.8",
        highlights: &[
            "Robust FSC-certified oak – diseño escandinavo",
            "Superficie protegida con aceite natural sin VOC",
            "Garantía de 10 años",
        ],
        description: "La mesa Linden combina líneas limpias con almacenamiento oculto. \
                      Perfecta para estudios creativos y espacios híbridos.",
        specifications: &[
            ("Ancho", "140 cm"),
            ("Alto", "76 cm"),
            ("Profundidad", "70 cm"),
            ("Peso", "32 kg"),
        ],
    },
    Product {
        id: 2,
        name: "Northwind Ergonomic Chair",
        category: "Home Office",
        price_text: "$389",
        rating_text: "4.6",
        highlights: &[
            "Soporte lumbar con memoria",
            "Tejido transpirable made in Łódź",
            "Apoyabrazos 4D",
        ],
        description: "Nuestra silla Northwind equilibra ventilación y soporte continuo \
                      durante jornadas largas, con certificación BIFMA.",
        specifications: &[
            ("Altura del asiento", "45 – 55 cm"),
            ("Peso máximo", "150 kg"),
            ("Tapizado", "Malla reciclada"),
        ],
    },
    Product {
        id: 3,
        name: "Glass Terrarium",
        category: "Decor",
        price_text: "$129",
        rating_text: "4.9",
        highlights: &[
            "Cristal templado hecho en Murano",
            "Incluye kit de musgo bosque-bañado",
            "Iluminación LED cálida integrada",
        ],
        description: "Terrario modular inspirado en bosques nórdicos; ideal para plantas \
                      de humedad media. Aroma a lluvia gracias al sustrato Kokedama.",
        specifications: &[
            ("Diámetro", "45 cm"),
            ("Altura", "38 cm"),
            ("Iluminación", "LED 2700K"),
        ],
    },
    Product {
        id: 4,
        name: "Espresso Machine Pro",
        category: "Kitchen",
        price_text: "$1199",
        rating_text: "4.7",
        highlights: &[
            "Caldera doble en acero 316L",
            "Válvula de perfilado para crema perfecta",
            "Pantalla táctil multilingüe (Español, Polski, 日本語)",
        ],
        description: "Máquina espresso de precisión con tecnología PID y preinfusión \
                      adaptativa. Diseño artesanal desde Trieste, edición limitada.",
        specifications: &[
            ("Voltaje", "120 V"),
            ("Caldera", "Doble"),
            ("Depósito", "2.5 L"),
            ("Peso", "18 kg"),
        ],
    },
];

pub fn product_ids() -> Vec<i64> {
    PRODUCTS.iter().map(|product| product.id).collect()
}

/// Catalog listing payload: the `data.catalog.items` tree referenced by the
/// `CatalogScreen` widget.
pub fn create_catalog_json() -> DynamicResult<String> {
    let items: Vec<Value> = PRODUCTS
        .iter()
        .map(|product| {
            json!({
                "id": product.id,
                "name": product.name,
                "priceText": product.price_text,
                "ratingText": product.rating_text,
                "category": product.category,
            })
        })
        .collect();

    let mut builder = DynamicContentBuilder::new();
    builder.set("catalog", json!({ "items": items }))?;
    builder.to_json_string(true)
}

/// Detail payload for one product: the `data.detail.*` tree referenced by the
/// `ProductDetailScreen` widget. Returns `None` for unknown ids.
pub fn create_detail_json(id: i64) -> DynamicResult<Option<String>> {
    let Some(product) = PRODUCTS.iter().find(|product| product.id == id) else {
        return Ok(None);
    };

    let specifications: Vec<Value> = product
        .specifications
        .iter()
        .map(|(label, value)| json!({ "label": label, "value": value }))
        .collect();

    let mut builder = DynamicContentBuilder::new();
    builder.set(
        "detail",
        json!({
            "id": product.id,
            "name": product.name,
            "priceText": product.price_text,
            "ratingText": product.rating_text,
            "category": product.category,
            "description": product.description,
            "highlights": product.highlights,
            "specifications": specifications,
        }),
    )?;
    builder.to_json_string(true).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_json_lists_every_product() {
        let text = create_catalog_json().unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();

        let items = parsed["catalog"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0]["name"], "Linden Desk");
        assert_eq!(items[3]["priceText"], "$1199");
    }

    #[test]
    fn test_detail_json_for_known_and_unknown_ids() {
        let text = create_detail_json(3).unwrap().unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["detail"]["name"], "Glass Terrarium");
        assert_eq!(parsed["detail"]["highlights"].as_array().unwrap().len(), 3);

        assert!(create_detail_json(99).unwrap().is_none());
    }
}
