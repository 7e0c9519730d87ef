//! Promo slide content: the items the carousel sequencer cycles over.

use crate::error::{ModelError, Result};

/// Opaque handle to an image resource. The motion layer never inspects
/// the contents; the storefront resolves it at render time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single promo slide. Immutable after the deck is built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide {
    /// Position in the deck, dense and unique across the deck.
    pub index: usize,
    pub title: String,
    pub body: String,
    pub image: ImageRef,
}

/// Ordered, validated collection of slides.
///
/// Invariants enforced at construction: at least one slide, and slide
/// indices are exactly `0..len` in order.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(ModelError::InvalidDeck("deck must not be empty".into()));
        }
        for (position, slide) in slides.iter().enumerate() {
            if slide.index != position {
                return Err(ModelError::InvalidDeck(format!(
                    "slide at position {position} carries index {}",
                    slide.index
                )));
            }
        }
        Ok(Self { slides })
    }

    /// Build a deck from `(title, body, image)` triples, assigning dense
    /// indices in order.
    pub fn from_content<T, B, I>(content: Vec<(T, B, I)>) -> Result<Self>
    where
        T: Into<String>,
        B: Into<String>,
        I: Into<String>,
    {
        let slides = content
            .into_iter()
            .enumerate()
            .map(|(index, (title, body, image))| Slide {
                index,
                title: title.into(),
                body: body.into(),
                image: ImageRef::new(image),
            })
            .collect();
        Self::new(slides)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        // Cannot be empty by construction, but keep the std-collection pair.
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }
}

/// A trending-section card: entrance-revealed on scroll, never sequenced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrendingCard {
    pub title: String,
    pub image: ImageRef,
}

impl TrendingCard {
    pub fn new(title: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image: ImageRef::new(image),
        }
    }
}
