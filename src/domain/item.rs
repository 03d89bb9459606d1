use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::catalog::CatalogError;

/// Identifier of a catalog item. Stable for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed set of category tags a catalog item can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Chocolate,
    Gummies,
    Lollipops,
    HardCandy,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Chocolate,
        Category::Gummies,
        Category::Lollipops,
        Category::HardCandy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Chocolate => "chocolate",
            Category::Gummies => "gummies",
            Category::Lollipops => "lollipops",
            Category::HardCandy => "hard candy",
        }
    }

    /// Parses a category selector as the category buttons send it.
    ///
    /// `"all"` clears the filter and yields `None`.
    pub fn parse_filter(tag: &str) -> Result<Option<Category>, CatalogError> {
        if tag == "all" {
            return Ok(None);
        }
        tag.parse().map(Some)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// A purchasable item as listed in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Category,
    pub rating: f32,
    pub image: String,
}

impl Item {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        category: Category,
    ) -> Self {
        Self {
            id: ItemId(id),
            name: name.into(),
            description: description.into(),
            price,
            category,
            rating: 0.0,
            image: String::new(),
        }
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tags_round_trip_through_display() {
        for category in Category::ALL {
            let parsed: Category = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert_eq!("hard candy".parse::<Category>().unwrap(), Category::HardCandy);
    }

    #[test]
    fn test_parse_filter_all_clears_category() {
        assert_eq!(Category::parse_filter("all").unwrap(), None);
        assert_eq!(
            Category::parse_filter("gummies").unwrap(),
            Some(Category::Gummies)
        );
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let err = Category::parse_filter("Chocolate").unwrap_err();
        assert_eq!(err, CatalogError::UnknownCategory("Chocolate".to_string()));
    }
}
