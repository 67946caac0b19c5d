use super::Seed;

pub(crate) const SEEDS: &[Seed] = &[
    Seed {
        sku: 6414001,
        name: "Sonance - Mariner 66 Outdoor Speakers (Pair) - White",
        model: "MARINER66",
        category: "Outdoor Speakers",
        color: "White",
        regular_price: Some(499.99),
        sale_price: Some(399.99),
        rating: Some(4.6),
        review_count: 33,
        in_store: true,
        online: true,
    },
    Seed {
        sku: 6414002,
        name: "Sonance - Mariner 66 Outdoor Speakers (Pair) - Black",
        model: "MARINER66",
        category: "Outdoor Speakers",
        color: "Black",
        regular_price: Some(499.99),
        sale_price: None,
        rating: Some(4.5),
        review_count: 19,
        in_store: true,
        online: true,
    },
    Seed {
        sku: 6414003,
        name: "Sonance - Landscape Series 6\" Satellite Speakers (Pair) - Dark Gray",
        model: "SLS6",
        category: "Outdoor Speakers",
        color: "Dark Gray",
        regular_price: Some(1099.99),
        sale_price: None,
        rating: Some(4.7),
        review_count: 8,
        in_store: false,
        online: true,
    },
    Seed {
        sku: 6414004,
        name: "Sonance - Landscape Series Patio Speaker System - Terra Cotta",
        model: "",
        category: "Outdoor Speakers",
        color: "Terra Cotta",
        regular_price: Some(3499.99),
        sale_price: Some(2999.99),
        rating: Some(4.2),
        review_count: 4,
        in_store: false,
        online: true,
    },
    Seed {
        sku: 6414005,
        name: "Sonance - Mariner 86 Outdoor Speakers (Pair) - White",
        model: "MARINER86",
        category: "Outdoor Speakers",
        color: "White",
        regular_price: Some(699.99),
        sale_price: None,
        rating: Some(4.8),
        review_count: 22,
        in_store: true,
        online: true,
    },
    Seed {
        sku: 6414006,
        name: "Sonance - Landscape Series 12\" In-Ground Subwoofer - Brown",
        model: "SLS12SUB",
        category: "Subwoofers",
        color: "Brown",
        regular_price: Some(1599.99),
        sale_price: None,
        rating: Some(4.4),
        review_count: 6,
        in_store: false,
        online: true,
    },
];
