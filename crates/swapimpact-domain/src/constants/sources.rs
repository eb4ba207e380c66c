//! Citation registry for the reference coefficients

use crate::model::DataSource;

/// Where the reference tables come from
pub static DATA_SOURCES: &[DataSource] = &[
    DataSource {
        key: "higg_msi",
        name: "Higg Materials Sustainability Index (MSI)",
        year: "2023",
    },
    DataSource {
        key: "quantis_2018",
        name: "Quantis - Measuring Fashion Environmental Impact",
        year: "2018",
    },
    DataSource {
        key: "wrap_uk",
        name: "WRAP UK - Valuing Our Clothes",
        year: "2017",
    },
    DataSource {
        key: "kering_epl",
        name: "Kering Environmental P&L",
        year: "2022",
    },
    DataSource {
        key: "indian_textile_lca",
        name: "Various Reports on Indian Textile Industry & Brands",
        year: "2020-2024",
    },
];
