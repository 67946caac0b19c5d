use super::Seed;

pub(crate) const SEEDS: &[Seed] = &[
    Seed {
        sku: 6416001,
        name: "Sonance - Volume Control Knob 100W - White",
        model: "VC100K",
        category: "Whole Home Audio Installation Accessories",
        color: "White",
        regular_price: Some(99.99),
        sale_price: None,
        rating: Some(4.3),
        review_count: 16,
        in_store: true,
        online: true,
    },
    Seed {
        sku: 6416002,
        name: "Sonance - Volume Control Slider 75W - White",
        model: "VC75S",
        category: "Whole Home Audio Installation Accessories",
        color: "White",
        regular_price: Some(89.99),
        sale_price: Some(69.99),
        rating: Some(4.1),
        review_count: 9,
        in_store: true,
        online: true,
    },
    Seed {
        sku: 6416003,
        name: "Sonance - 6.5\" Round Speaker Pre-Construction Brackets (Pair)",
        model: "PCB6R",
        category: "Whole Home Audio Installation Accessories",
        color: "Beige",
        regular_price: Some(29.99),
        sale_price: None,
        rating: Some(4.5),
        review_count: 48,
        in_store: true,
        online: true,
    },
    Seed {
        sku: 6416004,
        name: "Sonance - 8\" Speaker Fire Rated Back Cans (Pair)",
        model: "FRB8",
        category: "Whole Home Audio Installation Accessories",
        color: "Beige",
        regular_price: Some(100.0),
        sale_price: None,
        rating: None,
        review_count: 2,
        in_store: false,
        online: true,
    },
    Seed {
        sku: 6416005,
        name: "Sonance - Speaker Grille Replacement Kit - Paintable White",
        model: "",
        category: "Whole Home Audio Installation Accessories",
        color: "Paintable White",
        regular_price: Some(0.0),
        sale_price: None,
        rating: None,
        review_count: 0,
        in_store: false,
        online: true,
    },
    Seed {
        sku: 6416006,
        name: "Sonance - Planter Speaker - Green",
        model: "PLANTER1",
        category: "Outdoor Speakers",
        color: "Green",
        regular_price: Some(599.99),
        sale_price: None,
        rating: Some(3.9),
        review_count: 13,
        in_store: true,
        online: true,
    },
];
