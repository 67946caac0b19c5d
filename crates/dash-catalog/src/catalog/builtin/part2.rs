use super::Seed;

pub(crate) const SEEDS: &[Seed] = &[
    Seed {
        sku: 6413001,
        name: "Sonance - MAG Series 6.5\" 2-Way In-Wall Speakers (Pair) - Paintable White",
        model: "MAG6W",
        category: "In-Wall Speakers",
        color: "Paintable White",
        regular_price: Some(329.99),
        sale_price: None,
        rating: Some(4.4),
        review_count: 12,
        in_store: true,
        online: true,
    },
    Seed {
        sku: 6413002,
        name: "Sonance - Visual Performance 8\" In-Wall LCR Speaker (Each) - White",
        model: "VP82W",
        category: "In-Wall Speakers",
        color: "White",
        regular_price: Some(649.99),
        sale_price: Some(519.99),
        rating: Some(4.6),
        review_count: 14,
        in_store: true,
        online: true,
    },
    Seed {
        sku: 6413003,
        name: "Sonance - VX Series 6\" In-Wall Speakers (Pair) - Black",
        model: "VX62W",
        category: "In-Wall Speakers",
        color: "Black",
        regular_price: Some(549.99),
        sale_price: None,
        rating: Some(4.3),
        review_count: 3,
        in_store: false,
        online: true,
    },
    Seed {
        sku: 6413004,
        name: "Sonance - Professional Series 3-Way In-Wall Speaker - Paintable White",
        model: "PS-W43",
        category: "In-Wall Speakers",
        color: "Paintable White",
        regular_price: Some(2199.99),
        sale_price: Some(1799.99),
        rating: Some(4.8),
        review_count: 7,
        in_store: false,
        online: true,
    },
    Seed {
        sku: 6413005,
        name: "Sonance - Visual Performance In-Wall Subwoofer - White",
        model: "VP10SUB",
        category: "Subwoofers",
        color: "White",
        regular_price: Some(1299.99),
        sale_price: None,
        rating: Some(4.7),
        review_count: 11,
        in_store: false,
        online: true,
    },
    Seed {
        sku: 6413006,
        name: "Sonance - SDA 10\" Sealed Subwoofer Enclosure - Black",
        model: "SDA-10",
        category: "Subwoofers",
        color: "Black",
        regular_price: Some(2999.99),
        sale_price: None,
        rating: Some(5.0),
        review_count: 2,
        in_store: false,
        online: true,
    },
];
