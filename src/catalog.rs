//! Static display content for the previewed screens.
//!
//! Everything here is hard-coded mockup data: the greeting block, the
//! category chip labels, and the recipe cards shown on the Home screen.
//! Nothing is fetched or persisted.

/// Greeting shown at the top of the Home screen
pub const GREETING_TITLE: &str = "Hello Jega";
pub const GREETING_SUBTITLE: &str = "What are you cooking today?";

/// Category filter chips, in display order. "All" is the default selection.
pub const CHIP_LABELS: &[&str] = &[
    "All",
    "Indian",
    "Italian",
    "Asian",
    "Chinese",
    "Fruit",
    "Vegetables",
    "Protein",
    "Cereal",
    "Local Dishes",
];

/// A card in the "New Recipes" row
#[derive(Debug, Clone)]
pub struct Recipe {
    pub title: &'static str,
    pub author: &'static str,
    pub minutes: u8,
    /// Star rating out of 5
    pub rating: u8,
}

/// A card in the "Popular" carousel; each one carries a bookmark toggle
#[derive(Debug, Clone)]
pub struct PopularDish {
    pub title: &'static str,
    pub rating: f32,
    pub minutes: u8,
}

/// New recipe cards, in display order
pub const NEW_RECIPES: &[Recipe] = &[
    Recipe {
        title: "Steak with tomato sauce and bulgur rice.",
        author: "James Milner",
        minutes: 20,
        rating: 5,
    },
    Recipe {
        title: "Pilaf sweet with lamb-and-raisins",
        author: "Laura wilson",
        minutes: 20,
        rating: 5,
    },
    Recipe {
        title: "Rice Pilaf, Broccoli and Chicken",
        author: "Lucas Moura",
        minutes: 20,
        rating: 5,
    },
    Recipe {
        title: "Chicken meal with sauce",
        author: "Issabella Ethan",
        minutes: 20,
        rating: 5,
    },
    Recipe {
        title: "Stir-fry chicken with broccoli in sweet and sour sauce and rice.",
        author: "Miquel Ferran",
        minutes: 20,
        rating: 5,
    },
];

/// Popular dish cards, in display order
pub const POPULAR_DISHES: &[PopularDish] = &[
    PopularDish {
        title: "Classic Greek Salad",
        rating: 4.5,
        minutes: 15,
    },
    PopularDish {
        title: "Crunchy Nut Coleslaw",
        rating: 3.5,
        minutes: 10,
    },
    PopularDish {
        title: "Shrimp Chicken Andouille Sausage Jambalaya",
        rating: 3.0,
        minutes: 10,
    },
    PopularDish {
        title: "Barbecue Chicken Jollof Rice",
        rating: 4.5,
        minutes: 10,
    },
    PopularDish {
        title: "Portuguese Piri Piri Chicken",
        rating: 4.5,
        minutes: 10,
    },
];
