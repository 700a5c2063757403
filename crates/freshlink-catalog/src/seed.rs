//! Built-in mock catalogs used when no catalog file is configured.

use freshlink_core::listing::{Coordinates, ListingId, Product, Vendor};
use rust_decimal::Decimal;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn unsplash(photo: &str, width: u32, height: u32) -> String {
    format!("https://images.unsplash.com/{photo}?w={width}&h={height}&fit=crop")
}

struct ProductSeed {
    id: ListingId,
    name: &'static str,
    vendor: &'static str,
    vendor_id: ListingId,
    distance: f64,
    price_cents: i64,
    original_cents: Option<i64>,
    discount: Option<u8>,
    unit: &'static str,
    photo: &'static str,
    rating: f64,
    review_count: u32,
    is_organic: bool,
    category: &'static str,
    tags: &'static [&'static str],
}

impl ProductSeed {
    fn build(self) -> Product {
        Product {
            id: self.id,
            name: self.name.to_string(),
            vendor: self.vendor.to_string(),
            vendor_id: self.vendor_id,
            vendor_distance: self.distance,
            price: Decimal::new(self.price_cents, 2),
            original_price: self.original_cents.map(|c| Decimal::new(c, 2)),
            discount: self.discount,
            unit: self.unit.to_string(),
            image: unsplash(self.photo, 400, 400),
            distance: self.distance,
            rating: self.rating,
            review_count: self.review_count,
            available: true,
            is_organic: self.is_organic,
            category: self.category.to_string(),
            categories: strings(self.tags),
        }
    }
}

/// The ten mock products of the products page.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn products() -> Vec<Product> {
    [
        ProductSeed {
            id: 1,
            name: "Tomate Orgânico Premium",
            vendor: "Fazenda Verde Orgânicos",
            vendor_id: 1,
            distance: 0.8,
            price_cents: 850,
            original_cents: Some(1000),
            discount: Some(15),
            unit: "kg",
            photo: "photo-1546470427-e5ac89c8ba37",
            rating: 4.8,
            review_count: 45,
            is_organic: true,
            category: "organicos",
            tags: &["Orgânicos", "Legumes"],
        },
        ProductSeed {
            id: 2,
            name: "Banana Prata Doce",
            vendor: "Sítio das Frutas",
            vendor_id: 3,
            distance: 1.5,
            price_cents: 690,
            original_cents: None,
            discount: None,
            unit: "kg",
            photo: "photo-1571771894821-ce9b6c11b08e",
            rating: 4.5,
            review_count: 34,
            is_organic: false,
            category: "frutas",
            tags: &["Frutas", "Natural"],
        },
        ProductSeed {
            id: 3,
            name: "Alface Hidropônica",
            vendor: "Hortifruti do João",
            vendor_id: 2,
            distance: 1.2,
            price_cents: 320,
            original_cents: None,
            discount: None,
            unit: "unidade",
            photo: "photo-1556909114-f6e7ad7d3136",
            rating: 4.6,
            review_count: 18,
            is_organic: false,
            category: "verduras",
            tags: &["Verduras", "Hidropônico"],
        },
        ProductSeed {
            id: 4,
            name: "Cenoura Orgânica",
            vendor: "Fazenda Orgânica São José",
            vendor_id: 5,
            distance: 2.5,
            price_cents: 580,
            original_cents: Some(725),
            discount: Some(20),
            unit: "kg",
            photo: "photo-1598170845058-32b9d6a5da37",
            rating: 4.7,
            review_count: 29,
            is_organic: true,
            category: "organicos",
            tags: &["Orgânicos", "Legumes"],
        },
        ProductSeed {
            id: 5,
            name: "Manjericão Fresco",
            vendor: "Horta Urbana",
            vendor_id: 6,
            distance: 1.8,
            price_cents: 250,
            original_cents: None,
            discount: None,
            unit: "maço",
            photo: "photo-1618375569909-3c8616cf7733",
            rating: 4.9,
            review_count: 15,
            is_organic: true,
            category: "temperos",
            tags: &["Orgânicos", "Temperos"],
        },
        ProductSeed {
            id: 6,
            name: "Maçã Fuji",
            vendor: "Pomar do Vale",
            vendor_id: 7,
            distance: 3.1,
            price_cents: 990,
            original_cents: None,
            discount: None,
            unit: "kg",
            photo: "photo-1560806887-1e4cd0b6cbd6",
            rating: 4.4,
            review_count: 41,
            is_organic: false,
            category: "frutas",
            tags: &["Frutas", "Doces"],
        },
        ProductSeed {
            id: 7,
            name: "Rúcula Orgânica",
            vendor: "Verde Vida",
            vendor_id: 8,
            distance: 2.2,
            price_cents: 400,
            original_cents: None,
            discount: None,
            unit: "maço",
            photo: "photo-1576045057995-568f588f82fb",
            rating: 4.6,
            review_count: 22,
            is_organic: true,
            category: "verduras",
            tags: &["Orgânicos", "Verduras"],
        },
        ProductSeed {
            id: 8,
            name: "Abóbora Cabotiá",
            vendor: "Fazenda Verde",
            vendor_id: 1,
            distance: 0.8,
            price_cents: 420,
            original_cents: None,
            discount: None,
            unit: "kg",
            photo: "photo-1570197788417-0e82375c9371",
            rating: 4.3,
            review_count: 8,
            is_organic: true,
            category: "legumes",
            tags: &["Orgânicos", "Legumes"],
        },
        ProductSeed {
            id: 9,
            name: "Leite Orgânico",
            vendor: "Fazenda São José",
            vendor_id: 5,
            distance: 2.5,
            price_cents: 650,
            original_cents: None,
            discount: None,
            unit: "litro",
            photo: "photo-1550583724-b2692b85b150",
            rating: 4.8,
            review_count: 67,
            is_organic: true,
            category: "laticinios",
            tags: &["Orgânicos", "Laticínios"],
        },
        ProductSeed {
            id: 10,
            name: "Queijo Minas Frescal",
            vendor: "Laticínios da Serra",
            vendor_id: 9,
            distance: 4.2,
            price_cents: 1890,
            original_cents: None,
            discount: None,
            unit: "kg",
            photo: "photo-1486297678162-eb2a19b0a32d",
            rating: 4.7,
            review_count: 33,
            is_organic: false,
            category: "laticinios",
            tags: &["Laticínios", "Artesanal"],
        },
    ]
    .into_iter()
    .map(ProductSeed::build)
    .collect()
}

struct VendorSeed {
    id: ListingId,
    name: &'static str,
    photo: &'static str,
    rating: f64,
    review_count: u32,
    distance: f64,
    location: &'static str,
    tags: &'static [&'static str],
    is_open: bool,
    hours: &'static str,
    is_sponsored: bool,
    product_count: u32,
    description: &'static str,
}

impl VendorSeed {
    fn build(self) -> Vendor {
        Vendor {
            id: self.id,
            name: self.name.to_string(),
            image: unsplash(self.photo, 400, 300),
            rating: self.rating,
            review_count: self.review_count,
            distance: self.distance,
            location: self.location.to_string(),
            categories: strings(self.tags),
            is_open: self.is_open,
            hours: self.hours.to_string(),
            phone: format!("119876543{:02}", 20 + self.id),
            is_sponsored: self.is_sponsored,
            product_count: self.product_count,
            description: self.description.to_string(),
            category: None,
            address: None,
            coordinates: None,
        }
    }
}

/// The nine mock vendors of the vendors page.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn vendors() -> Vec<Vendor> {
    [
        VendorSeed {
            id: 1,
            name: "Fazenda Verde Orgânicos",
            photo: "photo-1500937386664-56d1dfef3854",
            rating: 4.8,
            review_count: 127,
            distance: 0.8,
            location: "Vila Madalena",
            tags: &["Orgânicos", "Frutas", "Verduras"],
            is_open: true,
            hours: "6:00 - 18:00",
            is_sponsored: true,
            product_count: 24,
            description: "Produtos orgânicos frescos direto da fazenda",
        },
        VendorSeed {
            id: 2,
            name: "Hortifruti do João",
            photo: "photo-1542838132-92c53300491e",
            rating: 4.6,
            review_count: 89,
            distance: 1.2,
            location: "Pinheiros",
            tags: &["Frutas", "Verduras", "Legumes"],
            is_open: true,
            hours: "7:00 - 19:00",
            is_sponsored: false,
            product_count: 18,
            description: "Tradição em qualidade há mais de 20 anos",
        },
        VendorSeed {
            id: 3,
            name: "Sítio das Frutas",
            photo: "photo-1619566636858-adf3ef46400b",
            rating: 4.9,
            review_count: 156,
            distance: 1.5,
            location: "Butantã",
            tags: &["Frutas", "Sucos", "Polpas"],
            is_open: false,
            hours: "8:00 - 17:00",
            is_sponsored: true,
            product_count: 32,
            description: "As melhores frutas da região com entrega rápida",
        },
        VendorSeed {
            id: 4,
            name: "Mercado da Terra",
            photo: "photo-1488459716781-31db52582fe9",
            rating: 4.4,
            review_count: 73,
            distance: 2.1,
            location: "Perdizes",
            tags: &["Verduras", "Legumes", "Temperos"],
            is_open: true,
            hours: "6:30 - 18:30",
            is_sponsored: false,
            product_count: 15,
            description: "Produtos frescos colhidos diariamente",
        },
        VendorSeed {
            id: 5,
            name: "Fazenda Orgânica São José",
            photo: "photo-1574323347407-f5e1ad6d020b",
            rating: 4.7,
            review_count: 112,
            distance: 2.5,
            location: "Lapa",
            tags: &["Orgânicos", "Laticínios", "Ovos"],
            is_open: true,
            hours: "7:00 - 17:00",
            is_sponsored: false,
            product_count: 28,
            description: "Fazenda familiar com certificação orgânica",
        },
        VendorSeed {
            id: 6,
            name: "Empório Natural",
            photo: "photo-1506976785307-8732e854ad03",
            rating: 4.5,
            review_count: 94,
            distance: 3.2,
            location: "Vila Madalena",
            tags: &["Orgânicos", "Grãos", "Cereais"],
            is_open: false,
            hours: "8:00 - 19:00",
            is_sponsored: false,
            product_count: 22,
            description: "Alimentação natural e saudável",
        },
        VendorSeed {
            id: 7,
            name: "Quintal da Vovó",
            photo: "photo-1560472354-b33ff0c44a43",
            rating: 4.8,
            review_count: 168,
            distance: 3.8,
            location: "Pompéia",
            tags: &["Frutas", "Verduras", "Conservas"],
            is_open: true,
            hours: "6:00 - 18:00",
            is_sponsored: false,
            product_count: 28,
            description: "Produtos caseiros e tradicionais",
        },
        VendorSeed {
            id: 8,
            name: "Feira do Produtor",
            photo: "photo-1441986300917-64674bd600d8",
            rating: 4.3,
            review_count: 67,
            distance: 4.2,
            location: "Barra Funda",
            tags: &["Frutas", "Verduras", "Legumes", "Temperos"],
            is_open: true,
            hours: "5:00 - 14:00",
            is_sponsored: false,
            product_count: 15,
            description: "Direto do produtor para sua mesa",
        },
        VendorSeed {
            id: 9,
            name: "Horta Comunitária",
            photo: "photo-1574323347407-f5e1ad6d020b",
            rating: 4.6,
            review_count: 92,
            distance: 2.8,
            location: "Vila Olímpia",
            tags: &["Orgânicos", "Verduras", "Temperos"],
            is_open: false,
            hours: "7:00 - 16:00",
            is_sponsored: false,
            product_count: 20,
            description: "Cultivo sustentável e comunitário",
        },
    ]
    .into_iter()
    .map(VendorSeed::build)
    .collect()
}

/// The five vendors placed on the map page, with coordinates and a primary category.
#[must_use]
pub fn map_vendors() -> Vec<Vendor> {
    let placements: [(ListingId, &str, &str, Coordinates, f64); 5] = [
        (
            1,
            "organicos",
            "Rua Harmonia, 123 - Vila Madalena",
            Coordinates::new(-23.5505, -46.6333),
            0.8,
        ),
        (
            2,
            "frutas",
            "Av. Faria Lima, 456 - Pinheiros",
            Coordinates::new(-23.5629, -46.6825),
            1.2,
        ),
        (
            3,
            "frutas",
            "Rua do Matão, 789 - Butantã",
            Coordinates::new(-23.5732, -46.7234),
            2.5,
        ),
        (
            4,
            "verduras",
            "Rua Cardoso de Almeida, 321 - Perdizes",
            Coordinates::new(-23.5365, -46.6731),
            1.8,
        ),
        (
            5,
            "laticinios",
            "Rua Clélia, 654 - Lapa",
            Coordinates::new(-23.5280, -46.7042),
            3.1,
        ),
    ];

    let base = vendors();
    placements
        .into_iter()
        .filter_map(|(id, category, address, coordinates, distance)| {
            let vendor = base.iter().find(|v| v.id == id)?;
            Some(Vendor {
                category: Some(category.to_string()),
                address: Some(address.to_string()),
                coordinates: Some(coordinates),
                distance,
                is_sponsored: false,
                ..vendor.clone()
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_catalog_sizes() {
        assert_eq!(products().len(), 10);
        assert_eq!(vendors().len(), 9);
        assert_eq!(map_vendors().len(), 5);
    }

    #[test]
    fn two_vendors_are_sponsored() {
        let sponsored: Vec<_> = vendors()
            .into_iter()
            .filter(|v| v.is_sponsored)
            .map(|v| v.id)
            .collect();
        assert_eq!(sponsored, vec![1, 3]);
    }

    #[test]
    fn vendor_phones_follow_sequence() {
        let vendors = vendors();
        assert_eq!(vendors[0].phone, "11987654321");
        assert_eq!(vendors[8].phone, "11987654329");
    }

    #[test]
    fn map_vendors_have_coordinates_and_categories() {
        for vendor in map_vendors() {
            assert!(vendor.coordinates.is_some(), "vendor {} has no coordinates", vendor.id);
            assert!(vendor.category.is_some());
        }
    }
}
