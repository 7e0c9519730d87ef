//! Static page content: the promo slides, trending cards, and the
//! product catalog. Created once at page load and never mutated.

use petal_model::prelude::*;

/// The four promo slides the hero carousel cycles over.
pub fn slide_deck() -> SlideDeck {
    SlideDeck::from_content(vec![
        (
            "Red Roses",
            "For the perfect start of love.",
            "images/roses.png",
        ),
        (
            "Elegant Lilies",
            "Symbolizing purity and beauty.",
            "images/lily.png",
        ),
        (
            "Sun-Kissed Tulips",
            "Bringing spring cheer to any home.",
            "images/tulips.png",
        ),
        (
            "Custom Creations",
            "Design your dream bouquet today.",
            "images/custom.png",
        ),
    ])
    .expect("static slide content is well-formed")
}

/// Cards for the trending section (scroll-entrance only, no sequencing).
pub fn trending_cards() -> Vec<TrendingCard> {
    vec![
        TrendingCard::new("Romantic Roses", "images/trending1.png"),
        TrendingCard::new("Sunny Daisies", "images/trending2.png"),
        TrendingCard::new("Vibrant Tulips", "images/trending3.png"),
        TrendingCard::new("Elegant Orchids", "images/trending4.png"),
        TrendingCard::new("Colorful Mixed Bouquet", "images/trending5.png"),
    ]
}

/// The fixed product catalog for the horizontal showcase.
pub fn catalog() -> Catalog {
    let products = vec![
        product(101, "Pink Roses", 45_00, "images/custom.png", "Pink Roses"),
        product(
            102,
            "Sunflowers",
            38_00,
            "https://images.unsplash.com/photo-1517258024599-26a5048d0949?w=400&h=500&fit=crop",
            "Sunflowers",
        ),
        product(
            103,
            "Spring Tulips",
            42_00,
            "https://images.unsplash.com/photo-1508610048659-a06b669e3321?w=400&h=500&fit=crop",
            "Tulips",
        ),
        product(
            104,
            "White Lilies",
            50_00,
            "https://images.unsplash.com/photo-1518709594023-6eab9bab7b23?w=400&h=500&fit=crop",
            "Lilies",
        ),
        product(
            105,
            "Orchids",
            65_00,
            "https://images.unsplash.com/photo-1563241527-3004b7be0ffd?w=400&h=500&fit=crop",
            "Orchids",
        ),
        product(
            106,
            "Peonies",
            55_00,
            "https://images.unsplash.com/photo-1582794543139-8ac9cb0f7b11?w=400&h=500&fit=crop",
            "Peonies",
        ),
    ];
    Catalog::new(products).expect("static catalog has unique ids")
}

fn product(
    id: u32,
    name: &str,
    cents: u64,
    image: &str,
    alt: &str,
) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        price: Price::from_cents(cents),
        image: ImageRef::new(image),
        alt: alt.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_content_validates() {
        assert_eq!(slide_deck().len(), 4);
        assert_eq!(trending_cards().len(), 5);
        let catalog = catalog();
        assert_eq!(catalog.len(), 6);
        assert_eq!(
            catalog.lookup(ProductId(101)).unwrap().price,
            Price::from_cents(4500)
        );
    }
}
