use super::Seed;

pub(crate) const SEEDS: &[Seed] = &[
    Seed {
        sku: 6412001,
        name: "Sonance - MAG Series 6.5\" 2-Way In-Ceiling Speakers (Pair) - Paintable White",
        model: "MAG6R",
        category: "In-Ceiling Speakers",
        color: "Paintable White",
        regular_price: Some(299.99),
        sale_price: Some(249.99),
        rating: Some(4.7),
        review_count: 41,
        in_store: true,
        online: true,
    },
    Seed {
        sku: 6412002,
        name: "Sonance - MAG Series 8\" 2-Way In-Ceiling Speakers (Pair) - Paintable White",
        model: "MAG8R",
        category: "In-Ceiling Speakers",
        color: "Paintable White",
        regular_price: Some(399.99),
        sale_price: None,
        rating: Some(4.6),
        review_count: 18,
        in_store: true,
        online: true,
    },
    Seed {
        sku: 6412003,
        name: "Sonance - VX Series 6\" Round In-Ceiling Speakers (Pair) - Paintable White",
        model: "VX62R",
        category: "In-Ceiling Speakers",
        color: "Paintable White",
        regular_price: Some(500.0),
        sale_price: None,
        rating: Some(4.8),
        review_count: 9,
        in_store: false,
        online: true,
    },
    Seed {
        sku: 6412004,
        name: "Sonance - Visual Performance 6\" In-Ceiling Speaker (Each) - White",
        model: "VP62R",
        category: "In-Ceiling Speakers",
        color: "White",
        regular_price: Some(349.99),
        sale_price: Some(279.99),
        rating: Some(4.5),
        review_count: 27,
        in_store: true,
        online: true,
    },
    Seed {
        sku: 6412005,
        name: "Sonance - Visual Performance 8\" Extreme In-Ceiling Speaker (Each) - White",
        model: "VP82R-XT",
        category: "In-Ceiling Speakers",
        color: "White",
        regular_price: Some(1000.0),
        sale_price: None,
        rating: Some(4.9),
        review_count: 5,
        in_store: false,
        online: true,
    },
    Seed {
        sku: 6412006,
        name: "Sonance - Invisible Series 2\" Micro In-Ceiling Speaker - Paintable White",
        model: "",
        category: "In-Ceiling Speakers",
        color: "Paintable White",
        regular_price: Some(1899.99),
        sale_price: None,
        rating: None,
        review_count: 0,
        in_store: false,
        online: true,
    },
];
