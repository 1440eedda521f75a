//! Reset-and-seed: populate one referentially consistent demo store.
//!
//! The fixture is nested (sections own categories own products), so every
//! category inherits its section's color and every product's `section_id`
//! is derived from its category's section. All four collections are wiped
//! first; the reset is destructive and unconditional, and like every other
//! multi-collection operation it is not atomic with concurrent writers.

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, instrument};

use trolley_core::{CategoryId, Price, ProductId, SectionId, StoreId};

use super::CatalogError;
use crate::models::{Category, Product, Section, Store};
use crate::store::{RecordStore, collections, encode};

/// Baked-in floor map. Every `map_element_id` in the fixture below refers
/// to an `id="..."` region of this SVG.
const SAMPLE_LAYOUT: &str = include_str!("../../assets/store_layout.svg");

const SAMPLE_STORE_NAME: &str = "SuperMart Central";
const SAMPLE_STORE_ADDRESS: &str = "123 Main Street, Downtown";

struct SectionFixture {
    name: &'static str,
    color: &'static str,
    map_element_id: &'static str,
    categories: &'static [CategoryFixture],
}

struct CategoryFixture {
    name: &'static str,
    products: &'static [ProductFixture],
}

struct ProductFixture {
    name: &'static str,
    price_cents: i64,
    description: &'static str,
}

const SAMPLE_SECTIONS: &[SectionFixture] = &[
    SectionFixture {
        name: "Fresh Produce",
        color: "#28a745",
        map_element_id: "produce-section",
        categories: &[
            CategoryFixture {
                name: "Fresh Fruits",
                products: &[
                    ProductFixture {
                        name: "Fresh Apples",
                        price_cents: 299,
                        description: "Crispy red apples",
                    },
                    ProductFixture {
                        name: "Bananas",
                        price_cents: 149,
                        description: "Fresh yellow bananas",
                    },
                ],
            },
            CategoryFixture {
                name: "Vegetables",
                products: &[
                    ProductFixture {
                        name: "Carrots",
                        price_cents: 189,
                        description: "Fresh organic carrots",
                    },
                    ProductFixture {
                        name: "Spinach",
                        price_cents: 249,
                        description: "Fresh baby spinach",
                    },
                ],
            },
        ],
    },
    SectionFixture {
        name: "Beverages",
        color: "#17a2b8",
        map_element_id: "beverages-section",
        categories: &[
            CategoryFixture {
                name: "Soft Drinks",
                products: &[
                    ProductFixture {
                        name: "Coca Cola",
                        price_cents: 199,
                        description: "Classic cola drink",
                    },
                    ProductFixture {
                        name: "Bottled Water",
                        price_cents: 99,
                        description: "Pure spring water",
                    },
                ],
            },
            CategoryFixture {
                name: "Juices",
                products: &[
                    ProductFixture {
                        name: "Orange Juice",
                        price_cents: 349,
                        description: "Fresh squeezed orange juice",
                    },
                    ProductFixture {
                        name: "Apple Juice",
                        price_cents: 299,
                        description: "100% apple juice",
                    },
                ],
            },
        ],
    },
    SectionFixture {
        name: "Snacks & Chips",
        color: "#fd7e14",
        map_element_id: "snacks-section",
        categories: &[
            CategoryFixture {
                name: "Chips & Crackers",
                products: &[
                    ProductFixture {
                        name: "Potato Chips",
                        price_cents: 249,
                        description: "Crispy salted chips",
                    },
                    ProductFixture {
                        name: "Chocolate Cookies",
                        price_cents: 399,
                        description: "Double chocolate chip cookies",
                    },
                ],
            },
            CategoryFixture {
                name: "Nuts & Candy",
                products: &[
                    ProductFixture {
                        name: "Mixed Nuts",
                        price_cents: 599,
                        description: "Roasted mixed nuts",
                    },
                    ProductFixture {
                        name: "Gummy Bears",
                        price_cents: 179,
                        description: "Fruity gummy candy",
                    },
                ],
            },
        ],
    },
    SectionFixture {
        name: "Cereal & Breakfast",
        color: "#ffc107",
        map_element_id: "cereal-section",
        categories: &[CategoryFixture {
            name: "Breakfast Cereals",
            products: &[
                ProductFixture {
                    name: "Corn Flakes",
                    price_cents: 429,
                    description: "Classic breakfast cereal",
                },
                ProductFixture {
                    name: "Granola",
                    price_cents: 549,
                    description: "Honey oat granola",
                },
            ],
        }],
    },
    SectionFixture {
        name: "Canned Goods",
        color: "#6c757d",
        map_element_id: "canned-section",
        categories: &[CategoryFixture {
            name: "Canned Soup",
            products: &[
                ProductFixture {
                    name: "Chicken Soup",
                    price_cents: 189,
                    description: "Hearty chicken noodle soup",
                },
                ProductFixture {
                    name: "Tomato Sauce",
                    price_cents: 129,
                    description: "Organic tomato sauce",
                },
            ],
        }],
    },
    SectionFixture {
        name: "Pasta & International",
        color: "#e83e8c",
        map_element_id: "pasta-section",
        categories: &[CategoryFixture {
            name: "Pasta",
            products: &[
                ProductFixture {
                    name: "Spaghetti",
                    price_cents: 199,
                    description: "Italian spaghetti pasta",
                },
                ProductFixture {
                    name: "Ramen Noodles",
                    price_cents: 89,
                    description: "Instant ramen",
                },
            ],
        }],
    },
    SectionFixture {
        name: "Baking & Spices",
        color: "#20c997",
        map_element_id: "baking-section",
        categories: &[CategoryFixture {
            name: "Baking Essentials",
            products: &[
                ProductFixture {
                    name: "All-Purpose Flour",
                    price_cents: 249,
                    description: "5lb bag of flour",
                },
                ProductFixture {
                    name: "Vanilla Extract",
                    price_cents: 499,
                    description: "Pure vanilla extract",
                },
            ],
        }],
    },
    SectionFixture {
        name: "Health & Beauty",
        color: "#6f42c1",
        map_element_id: "health-section",
        categories: &[CategoryFixture {
            name: "Personal Care",
            products: &[
                ProductFixture {
                    name: "Shampoo",
                    price_cents: 699,
                    description: "Moisturizing shampoo",
                },
                ProductFixture {
                    name: "Toothpaste",
                    price_cents: 349,
                    description: "Whitening toothpaste",
                },
            ],
        }],
    },
    SectionFixture {
        name: "Household & Cleaning",
        color: "#dc3545",
        map_element_id: "household-section",
        categories: &[CategoryFixture {
            name: "Cleaning Supplies",
            products: &[
                ProductFixture {
                    name: "Dish Soap",
                    price_cents: 449,
                    description: "Lemon scented dish soap",
                },
                ProductFixture {
                    name: "Paper Towels",
                    price_cents: 699,
                    description: "Absorbent paper towels",
                },
            ],
        }],
    },
    SectionFixture {
        name: "Pet Supplies",
        color: "#795548",
        map_element_id: "pet-section",
        categories: &[CategoryFixture {
            name: "Pet Food",
            products: &[
                ProductFixture {
                    name: "Dog Food",
                    price_cents: 1299,
                    description: "Premium dry dog food",
                },
                ProductFixture {
                    name: "Cat Treats",
                    price_cents: 399,
                    description: "Salmon flavored treats",
                },
            ],
        }],
    },
    SectionFixture {
        name: "Fresh Bakery",
        color: "#fd7e14",
        map_element_id: "bakery-section",
        categories: &[CategoryFixture {
            name: "Fresh Bread",
            products: &[
                ProductFixture {
                    name: "Sourdough Bread",
                    price_cents: 399,
                    description: "Fresh baked sourdough",
                },
                ProductFixture {
                    name: "Blueberry Muffins",
                    price_cents: 499,
                    description: "Pack of 6 muffins",
                },
            ],
        }],
    },
    SectionFixture {
        name: "Deli & Meats",
        color: "#dc3545",
        map_element_id: "deli-section",
        categories: &[CategoryFixture {
            name: "Deli Meats",
            products: &[
                ProductFixture {
                    name: "Sliced Turkey",
                    price_cents: 799,
                    description: "Fresh sliced turkey breast",
                },
                ProductFixture {
                    name: "Ham",
                    price_cents: 699,
                    description: "Honey glazed ham",
                },
            ],
        }],
    },
    SectionFixture {
        name: "Dairy",
        color: "#6f42c1",
        map_element_id: "dairy-section",
        categories: &[CategoryFixture {
            name: "Milk & Cheese",
            products: &[
                ProductFixture {
                    name: "Whole Milk",
                    price_cents: 349,
                    description: "1 gallon whole milk",
                },
                ProductFixture {
                    name: "Cheddar Cheese",
                    price_cents: 499,
                    description: "Sharp cheddar cheese",
                },
            ],
        }],
    },
    SectionFixture {
        name: "Frozen Foods",
        color: "#007bff",
        map_element_id: "frozen-section",
        categories: &[CategoryFixture {
            name: "Ice Cream",
            products: &[
                ProductFixture {
                    name: "Ice Cream",
                    price_cents: 599,
                    description: "Vanilla ice cream",
                },
                ProductFixture {
                    name: "Frozen Pizza",
                    price_cents: 449,
                    description: "Pepperoni pizza",
                },
            ],
        }],
    },
];

/// Result of a reset-and-seed run.
#[derive(Debug, Serialize)]
pub struct SeedSummary {
    pub message: String,
    pub store_id: StoreId,
}

/// Wipes the catalog and rebuilds the sample dataset.
pub struct SeedService<'a> {
    records: &'a dyn RecordStore,
}

impl<'a> SeedService<'a> {
    /// Create a new seed service over the given record store.
    #[must_use]
    pub const fn new(records: &'a dyn RecordStore) -> Self {
        Self { records }
    }

    /// Clear all four collections and insert the sample store.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Store` if the record store fails; a failure
    /// partway through leaves the catalog partially seeded.
    #[instrument(skip(self))]
    pub async fn reset_and_seed(&self) -> Result<SeedSummary, CatalogError> {
        for collection in [
            collections::STORES,
            collections::SECTIONS,
            collections::CATEGORIES,
            collections::PRODUCTS,
        ] {
            let removed = self.records.clear(collection).await?;
            debug!(collection, removed, "cleared collection");
        }

        let store = Store {
            id: StoreId::generate(),
            name: SAMPLE_STORE_NAME.to_owned(),
            address: SAMPLE_STORE_ADDRESS.to_owned(),
            layout_map: SAMPLE_LAYOUT.to_owned(),
            created_at: Utc::now(),
        };
        self.records
            .insert(
                collections::STORES,
                store.id.as_str(),
                encode(collections::STORES, &store)?,
            )
            .await?;

        let mut categories = 0_usize;
        let mut products = 0_usize;

        for section_fixture in SAMPLE_SECTIONS {
            let section = Section {
                id: SectionId::generate(),
                store_id: store.id.clone(),
                name: section_fixture.name.to_owned(),
                color: section_fixture.color.to_owned(),
                map_element_id: section_fixture.map_element_id.to_owned(),
            };
            self.records
                .insert(
                    collections::SECTIONS,
                    section.id.as_str(),
                    encode(collections::SECTIONS, &section)?,
                )
                .await?;

            for category_fixture in section_fixture.categories {
                let category = Category {
                    id: CategoryId::generate(),
                    store_id: store.id.clone(),
                    section_id: section.id.clone(),
                    name: category_fixture.name.to_owned(),
                    color: section.color.clone(),
                };
                self.records
                    .insert(
                        collections::CATEGORIES,
                        category.id.as_str(),
                        encode(collections::CATEGORIES, &category)?,
                    )
                    .await?;
                categories += 1;

                for product_fixture in category_fixture.products {
                    let product = Product {
                        id: ProductId::generate(),
                        category_id: category.id.clone(),
                        section_id: section.id.clone(),
                        name: product_fixture.name.to_owned(),
                        price: Price::from_cents(product_fixture.price_cents),
                        description: product_fixture.description.to_owned(),
                    };
                    self.records
                        .insert(
                            collections::PRODUCTS,
                            product.id.as_str(),
                            encode(collections::PRODUCTS, &product)?,
                        )
                        .await?;
                    products += 1;
                }
            }
        }

        info!(
            store_id = %store.id,
            sections = SAMPLE_SECTIONS.len(),
            categories,
            products,
            "sample data initialized"
        );

        Ok(SeedSummary {
            message: "Sample data initialized successfully!".to_owned(),
            store_id: store.id,
        })
    }
}
