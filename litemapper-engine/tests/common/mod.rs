//! Shared models for mapping tests.

#![allow(dead_code)]

use litemapper_engine::TypeUniverse;

pub mod domain {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct User {
        pub first_name: String,
        pub last_name: String,
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Address {
        pub street: String,
        pub city: String,
    }

    /// Asymmetric with its DTO: `internal_note` has no counterpart.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Profile {
        pub name: String,
        pub tags: Vec<String>,
        pub address: Address,
        pub visits: u64,
        pub rating: f64,
        pub nickname: Option<String>,
        pub internal_note: String,
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Order {
        pub quantity: String,
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Item {
        pub count: i64,
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Session {
        pub token: String,
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub enum Plan {
        #[default]
        Free,
        Pro {
            seats: u32,
        },
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Contact {
        pub email: String,
        pub phone: Option<String>,
        pub plan: Plan,
        pub retries: Option<u32>,
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Survey {
        pub age: String,
    }

    /// Has no counterpart in the DTO universe.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Orphan {
        pub value: String,
    }
}

pub mod dto {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct UserDto {
        pub first_name: String,
        pub last_name: String,
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct ProfileDto {
        pub name: String,
        pub tags: Vec<String>,
        pub address: super::domain::Address,
        pub visits: u64,
        pub rating: f64,
        pub nickname: Option<String>,
        pub verified: bool,
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct OrderDto {
        pub quantity: u32,
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct ItemDto {
        pub count: u8,
    }

    /// `phone` is left out of the serialized default; `retries` defaults to
    /// `Some`.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct ContactDto {
        pub email: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub phone: Option<String>,
        pub plan: super::domain::Plan,
        pub retries: Option<u32>,
    }

    impl Default for ContactDto {
        fn default() -> Self {
            Self {
                email: String::new(),
                phone: None,
                plan: super::domain::Plan::Free,
                retries: Some(3),
            }
        }
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct SurveyDto {
        pub age: Option<i32>,
    }

    /// No `Default`: can be mapped from, never into.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct SessionDto {
        pub token: String,
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct SuperUserDto {
        pub first_name: String,
        pub last_name: String,
        pub level: u8,
    }
}

use domain::*;
use dto::*;

pub fn domain_universe() -> TypeUniverse {
    TypeUniverse::new("Domain")
        .with::<User>()
        .with::<Profile>()
        .with::<Order>()
        .with::<Item>()
        .with::<Session>()
        .with::<Contact>()
        .with::<Survey>()
        .with::<Orphan>()
}

pub fn dto_universe() -> TypeUniverse {
    TypeUniverse::new("DTO")
        .with::<UserDto>()
        .with::<ProfileDto>()
        .with::<OrderDto>()
        .with::<ItemDto>()
        .with_opaque::<SessionDto>()
        .with::<ContactDto>()
        .with::<SurveyDto>()
}

pub fn sample_user() -> User {
    User {
        first_name: "FirstName".into(),
        last_name: "LastName".into(),
    }
}

pub fn sample_profile() -> Profile {
    Profile {
        name: "Ada".into(),
        tags: vec!["admin".into(), "beta".into()],
        address: Address {
            street: "1 Analytical Way".into(),
            city: "London".into(),
        },
        visits: 42,
        rating: 4.5,
        nickname: Some("countess".into()),
        internal_note: "do not export".into(),
    }
}

/// Appends `suffix` to a string value, stringifying anything else.
pub fn append(value: serde_json::Value, suffix: &str) -> serde_json::Value {
    match value {
        serde_json::Value::String(s) => serde_json::Value::String(format!("{s}{suffix}")),
        other => serde_json::Value::String(format!("{other}{suffix}")),
    }
}
