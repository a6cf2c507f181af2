use business::domain::product::model::Product;

/// Static catalog row.
#[derive(Debug, Clone, Copy)]
pub struct ProductEntity {
    pub name: &'static str,
    pub price: u32,
    pub color: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::new(
            self.name,
            self.price,
            self.color,
            self.description,
            self.image_url,
        )
    }
}

/// The mock catalog, in display order.
pub const SEED_PRODUCTS: [ProductEntity; 6] = [
    ProductEntity {
        name: "T-shirt",
        price: 5000,
        color: "white",
        description: "Comfortable everyday white T-shirt",
        image_url: "https://images.satu.kz/72306194_futbolka-sols-imperial.jpg",
    },
    ProductEntity {
        name: "T-shirt",
        price: 5500,
        color: "black",
        description: "Comfortable everyday black T-shirt",
        image_url: "https://images.satu.kz/72305201_w600_h600_72305201.jpg",
    },
    ProductEntity {
        name: "Jeans",
        price: 10000,
        color: "white",
        description: "Stylish white jeans for your look",
        image_url: "https://imgcdn.loverepublic.ru/upload/images/22554/2255436764_1_5.jpg",
    },
    ProductEntity {
        name: "Jeans",
        price: 6000,
        color: "black",
        description: "Stylish black jeans for your look",
        image_url: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQ-fRBJWhu5Q5GTJBq6Ki7RvR5Hzo6vDrC16w&usqp=CAU",
    },
    ProductEntity {
        name: "Jacket",
        price: 12000,
        color: "white",
        description: "Warm jacket for cold days",
        image_url: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSiab0q1ZL5fW_6XKIEvNJ-fAcoyufnBmG7Hg&usqp=CAU",
    },
    ProductEntity {
        name: "Jacket",
        price: 9000,
        color: "black",
        description: "Warm jacket for cold days",
        image_url: "https://momsbox.kz/upload/iblock/6b7/jy8tibyta1vv7fpwr9f7s7qghaxhzygg/%D0%91%D0%B5%D0%B7-%D0%B8%D0%BC%D0%B5%D0%BD%D0%B8-39.jpg",
    },
];
