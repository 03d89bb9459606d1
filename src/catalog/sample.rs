use rust_decimal_macros::dec;

use crate::domain::{Category, Item};

/// The candy shop's starting assortment.
pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new(
            1,
            "Chocolate Truffles",
            "Luxurious dark chocolate truffles with a smooth ganache center",
            dec!(120.99),
            Category::Chocolate,
        )
        .with_rating(4.8)
        .with_image("https://images.unsplash.com/photo-1582058091505-f87a2e55a40f?auto=format&fit=crop&q=80&w=1000"),
        Item::new(
            2,
            "Rainbow Gummy Bears",
            "Colorful and chewy gummy bears in assorted fruit flavors",
            dec!(50.99),
            Category::Gummies,
        )
        .with_rating(4.5)
        .with_image("https://images.unsplash.com/photo-1582058091505-f87a2e55a40f?auto=format&fit=crop&q=80&w=1000"),
        Item::new(
            3,
            "Artisan Lollipops",
            "Handcrafted gourmet lollipops with natural flavors",
            dec!(30.99),
            Category::Lollipops,
        )
        .with_rating(4.7)
        .with_image("https://images.unsplash.com/photo-1575224300306-1b8da36134ec?auto=format&fit=crop&q=80&w=1000"),
        Item::new(
            4,
            "Peppermint Sticks",
            "Traditional red and white striped peppermint candy sticks",
            dec!(40.99),
            Category::HardCandy,
        )
        .with_rating(4.3)
        .with_image("https://images.unsplash.com/photo-1481391319762-47dff72954d9?auto=format&fit=crop&q=80&w=1000"),
        Item::new(
            5,
            "Sea Salt Caramels",
            "Smooth caramel covered in dark chocolate with sea salt",
            dec!(140.99),
            Category::Chocolate,
        )
        .with_rating(4.9)
        .with_image("https://images.unsplash.com/photo-1549007994-cb92caebd54b?auto=format&fit=crop&q=80&w=1000"),
        Item::new(
            6,
            "Sour Worms",
            "Tangy and sweet sour gummy worms in vibrant colors",
            dec!(400.99),
            Category::Gummies,
        )
        .with_rating(4.6)
        .with_image("https://images.unsplash.com/photo-1499195333224-3ce974eecb47?auto=format&fit=crop&q=80&w=1000"),
        Item::new(
            7,
            "Fruit Lollipops",
            "Assorted fruit-flavored spiral lollipops",
            dec!(200.99),
            Category::Lollipops,
        )
        .with_rating(4.4)
        .with_image("https://images.unsplash.com/photo-1499195333224-3ce974eecb47?auto=format&fit=crop&q=80&w=1000"),
        Item::new(
            8,
            "Butterscotch Discs",
            "Classic butterscotch hard candies",
            dec!(300.99),
            Category::HardCandy,
        )
        .with_rating(4.2)
        .with_image("https://images.unsplash.com/photo-1600359746315-119f1360d663?auto=format&fit=crop&q=80&w=1000"),
    ]
}
