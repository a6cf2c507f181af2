pub mod application {
    pub mod product {
        pub mod get_all;
        pub mod get_filtered;
    }
}

pub mod domain {
    pub mod logger;
    pub mod product {
        pub mod catalog;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_filtered;
        }
    }
}
