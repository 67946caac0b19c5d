use super::Seed;

pub(crate) const SEEDS: &[Seed] = &[
    Seed {
        sku: 6415001,
        name: "Sonance - Sonamp 2-125 2-Channel Amplifier - Black",
        model: "SONAMP 2-125",
        category: "Home Theater Amplifiers",
        color: "Black",
        regular_price: Some(899.99),
        sale_price: None,
        rating: Some(4.6),
        review_count: 15,
        in_store: true,
        online: true,
    },
    Seed {
        sku: 6415002,
        name: "Sonance - DSP 2-750 MKIII 2-Channel Amplifier - Black",
        model: "DSP 2-750",
        category: "Home Theater Amplifiers",
        color: "Black",
        regular_price: Some(2499.99),
        sale_price: Some(1999.99),
        rating: Some(4.9),
        review_count: 6,
        in_store: false,
        online: true,
    },
    Seed {
        sku: 6415003,
        name: "Sonance - Sonamp 8-130 MKII 8-Channel Amplifier - Black",
        model: "SONAMP 8-130",
        category: "Home Theater Amplifiers",
        color: "Black",
        regular_price: Some(3199.99),
        sale_price: None,
        rating: Some(4.8),
        review_count: 3,
        in_store: false,
        online: true,
    },
    Seed {
        sku: 6415004,
        name: "Sonance - Sonamp 875D SE 8-Channel Amplifier - Silver",
        model: "",
        category: "Home Theater Amplifiers",
        color: "Silver",
        regular_price: None,
        sale_price: None,
        rating: Some(4.0),
        review_count: 1,
        in_store: false,
        online: false,
    },
    Seed {
        sku: 6415005,
        name: "Sonance - Sound Bar for Flat Panel TVs - Black",
        model: "SB46",
        category: "Soundbars",
        color: "Black",
        regular_price: Some(1199.99),
        sale_price: None,
        rating: Some(4.1),
        review_count: 10,
        in_store: true,
        online: true,
    },
    Seed {
        sku: 6415006,
        name: "Sonance - Passive Soundbar - Silver",
        model: "SB60",
        category: "Soundbars",
        color: "Silver",
        regular_price: Some(1399.99),
        sale_price: Some(1099.99),
        rating: None,
        review_count: 0,
        in_store: false,
        online: true,
    },
];
