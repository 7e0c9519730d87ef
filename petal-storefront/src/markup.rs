//! HTML fragment rendering for the content cards.
//!
//! Plain string templating from static, trusted model data. The strip
//! sizing rules live here too: each slide spans the full viewport, so
//! the track is `len * 100` viewport-widths wide.

use petal_model::prelude::*;

/// Render the slide strip's inner markup, one full-viewport slide per
/// deck entry.
pub fn render_slides(deck: &SlideDeck) -> String {
    deck.iter()
        .map(|slide| {
            format!(
                r#"<div class="carousel-slide" data-slide="{index}" style="background-image: url('{image}');">
    <div class="heading">
        <h2 class="bold">{title}</h2>
        <p>{body}</p>
    </div>
</div>
"#,
                index = slide.index,
                image = slide.image,
                title = slide.title,
                body = slide.body,
            )
        })
        .collect()
}

/// Track width in viewport-width units for a deck.
pub fn track_width_vw(deck: &SlideDeck) -> usize {
    deck.len() * 100
}

/// CSS custom property exposing the slide count to the stylesheet.
pub fn num_slides_property(deck: &SlideDeck) -> String {
    format!("--num-slides: {}", deck.len())
}

/// Render the trending card strip.
pub fn render_trending(cards: &[TrendingCard]) -> String {
    cards
        .iter()
        .map(|card| {
            format!(
                r#"<div class="trending-card" style="background-image: url('{image}');">
    <h2 class="trending-card-title bold">{title}</h2>
</div>
"#,
                image = card.image,
                title = card.title,
            )
        })
        .collect()
}

/// Render the product showcase cards with their add-to-cart buttons.
pub fn render_products(catalog: &Catalog) -> String {
    catalog
        .iter()
        .map(|p| {
            format!(
                r#"<div class="flower-card" data-product-id="{id}">
    <img src="{image}" alt="{alt}" class="flower-image">
    <div class="flower-info">
        <div class="flower-name">{name}</div>
        <div class="flower-price">
            <span>{price}</span>
            <button class="add-to-cart-btn" data-product-id="{id}">Add to Cart</button>
        </div>
    </div>
</div>
"#,
                id = p.id,
                image = p.image,
                alt = p.alt,
                name = p.name,
                price = p.price,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn slide_markup_carries_indices_and_titles() {
        let deck = content::slide_deck();
        let html = render_slides(&deck);
        assert!(html.contains(r#"data-slide="0""#));
        assert!(html.contains(r#"data-slide="3""#));
        assert!(html.contains("Red Roses"));
        assert!(html.contains("Design your dream bouquet today."));
    }

    #[test]
    fn track_sizing_tracks_deck_length() {
        let deck = content::slide_deck();
        assert_eq!(track_width_vw(&deck), 400);
        assert_eq!(num_slides_property(&deck), "--num-slides: 4");
    }

    #[test]
    fn product_markup_formats_prices_as_dollars() {
        let html = render_products(&content::catalog());
        assert!(html.contains("$45.00"));
        assert!(html.contains("$38.00"));
        assert!(html.contains(r#"data-product-id="106""#));
    }
}
