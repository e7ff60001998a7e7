use super::Laptop;

/// The example records written the first time the inventory key is empty.
pub fn seed_laptops() -> Vec<Laptop> {
    vec![
        Laptop {
            id: 1,
            brand: "Acer".into(),
            model: "Swift 3".into(),
            price: 84500,
            cpu: "Ryzen 5 4500U".into(),
            ram: "8GB".into(),
            storage: "512GB SSD".into(),
            description: "Lightweight and great battery life".into(),
            image: Some(
                "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=1200&q=80".into(),
            ),
        },
        Laptop {
            id: 2,
            brand: "Dell".into(),
            model: "Inspiron 15".into(),
            price: 109900,
            cpu: "Intel i5-1135G7".into(),
            ram: "8GB".into(),
            storage: "1TB HDD".into(),
            description: "Reliable office laptop".into(),
            image: Some(
                "https://images.unsplash.com/photo-1518770660439-4636190af475?w=1200&q=80".into(),
            ),
        },
        Laptop {
            id: 3,
            brand: "Lenovo".into(),
            model: "IdeaPad 3".into(),
            price: 72000,
            cpu: "Intel i3-1005G1".into(),
            ram: "4GB".into(),
            storage: "256GB SSD".into(),
            description: "Affordable daily driver".into(),
            image: Some(
                "https://images.unsplash.com/photo-1587825140708-0b8a6f7d8f7f?w=1200&q=80".into(),
            ),
        },
    ]
}
