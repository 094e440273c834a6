use litemapper_engine::TypeUniverse;

pub mod domain {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct User {
        pub first_name: String,
        pub last_name: String,
    }
}

pub mod dto {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct UserDto {
        pub first_name: String,
        pub last_name: String,
    }
}

pub fn domain_universe() -> TypeUniverse {
    TypeUniverse::new("Domain").with::<domain::User>()
}

pub fn dto_universe() -> TypeUniverse {
    TypeUniverse::new("DTO").with::<dto::UserDto>()
}
