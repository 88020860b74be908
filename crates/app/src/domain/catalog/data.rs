//! Catalog Data

use crate::domain::catalog::models::{Product, spec};

pub(crate) const PRODUCTS: &[Product] = &[
    Product {
        id: "ecopower-400w",
        name: "EcoPower 400W",
        category: "Residential",
        wattage: "400W",
        efficiency: "22.5%",
        price: 349.99,
        image: "images/1.png",
        description: "Perfect for residential rooftops with high efficiency and durability.",
        specs: &[
            spec("Max Power", "400W"),
            spec("Efficiency", "22.5%"),
            spec("Cell Type", "Monocrystalline"),
            spec("Dimensions", "78.74\" x 39.37\" x 1.57\""),
            spec("Weight", "44.1 lbs"),
            spec("Warranty", "25 years"),
        ],
    },
    Product {
        id: "sunmax-450w",
        name: "SunMax 450W",
        category: "High Efficiency",
        wattage: "450W",
        efficiency: "24.2%",
        price: 449.99,
        image: "images/2.png",
        description: "Premium high-efficiency panels with advanced cell technology.",
        specs: &[
            spec("Max Power", "450W"),
            spec("Efficiency", "24.2%"),
            spec("Cell Type", "PERC Monocrystalline"),
            spec("Dimensions", "82.68\" x 41.34\" x 1.57\""),
            spec("Weight", "48.5 lbs"),
            spec("Warranty", "25 years"),
        ],
    },
    Product {
        id: "solarpro-500w",
        name: "SolarPro 500W",
        category: "Commercial",
        wattage: "500W",
        efficiency: "23.8%",
        price: 549.99,
        image: "images/3.png",
        description: "Built for commercial installations with maximum power output.",
        specs: &[
            spec("Max Power", "500W"),
            spec("Efficiency", "23.8%"),
            spec("Cell Type", "Half-Cut Monocrystalline"),
            spec("Dimensions", "87.40\" x 43.31\" x 1.57\""),
            spec("Weight", "55.1 lbs"),
            spec("Warranty", "25 years"),
        ],
    },
    Product {
        id: "ultracell-550w",
        name: "UltraCell 550W",
        category: "Premium",
        wattage: "550W",
        efficiency: "25.1%",
        price: 649.99,
        image: "images/4.png",
        description: "Top-tier premium panels with cutting-edge technology.",
        specs: &[
            spec("Max Power", "550W"),
            spec("Efficiency", "25.1%"),
            spec("Cell Type", "N-Type Monocrystalline"),
            spec("Dimensions", "89.76\" x 44.88\" x 1.57\""),
            spec("Weight", "59.2 lbs"),
            spec("Warranty", "30 years"),
        ],
    },
];
