//! Categorizer
//!
//! Keyword substring lookup over a fixed table. The table is walked in
//! declaration order and the first category with a matching keyword wins.

use serde::{Deserialize, Serialize};

/// Grocery aisle category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[serde(rename = "Fruits & légumes")]
    FruitsVegetables,
    #[serde(rename = "Viandes / poissons")]
    MeatFish,
    #[serde(rename = "Produits laitiers")]
    Dairy,
    #[serde(rename = "Épicerie")]
    Pantry,
    #[serde(rename = "Hygiène")]
    Hygiene,
    #[serde(rename = "Entretien")]
    Household,
    #[serde(rename = "Boissons")]
    Drinks,
    /// Catch-all
    #[default]
    #[serde(rename = "Divers")]
    Other,
}

impl Category {
    /// Display order, also the keyword lookup order
    pub const ALL: [Category; 8] = [
        Category::FruitsVegetables,
        Category::MeatFish,
        Category::Dairy,
        Category::Pantry,
        Category::Hygiene,
        Category::Household,
        Category::Drinks,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::FruitsVegetables => "Fruits & légumes",
            Category::MeatFish => "Viandes / poissons",
            Category::Dairy => "Produits laitiers",
            Category::Pantry => "Épicerie",
            Category::Hygiene => "Hygiène",
            Category::Household => "Entretien",
            Category::Drinks => "Boissons",
            Category::Other => "Divers",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::FruitsVegetables => &[
                "pomme", "banane", "orange", "fraise", "tomate", "carotte", "salade", "courgette",
                "poivron", "oignon", "ail", "citron", "légume", "fruit", "avocat", "concombre",
                "champignon", "épinard", "brocoli",
            ],
            Category::MeatFish => &[
                "viande", "poulet", "bœuf", "porc", "saumon", "thon", "poisson", "steak", "jambon",
                "bacon", "saucisse", "crevette", "cabillaud",
            ],
            Category::Dairy => &[
                "lait", "yaourt", "fromage", "beurre", "crème", "fromage blanc", "ricotta",
                "mozzarella", "emmental",
            ],
            Category::Pantry => &[
                "pâtes", "riz", "farine", "sucre", "huile", "vinaigre", "sel", "poivre", "épice",
                "céréale", "pain", "biscuit", "chocolat", "conserve",
            ],
            Category::Hygiene => &[
                "savon", "shampoing", "dentifrice", "brosse", "déodorant", "gel douche",
                "papier toilette", "serviette", "mouchoir", "couche",
            ],
            Category::Household => &[
                "lessive", "adoucissant", "produit vaisselle", "éponge", "serpillère", "détergent",
                "nettoyant", "javel",
            ],
            Category::Drinks => &[
                "eau", "jus", "soda", "café", "thé", "bière", "vin", "limonade", "boisson",
            ],
            Category::Other => &[],
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Pick the category for an item name
pub fn categorize(name: &str) -> Category {
    let lower = name.to_lowercase();
    Category::ALL
        .into_iter()
        .find(|category| category.keywords().iter().any(|kw| lower.contains(kw)))
        .unwrap_or(Category::Other)
}
