//! Models and wiring for the LiteMapper demo.

pub mod models;

use clap::ValueEnum;
use litemapper_engine::{
    DataTransformer, MapResult, Mapper, MapperBuilder, MapperConfig, MatchMode,
};
use models::domain::User;
use models::dto::UserDto;
use serde_json::Value;

/// `--mode` values accepted by the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Exact,
    Regex,
}

impl From<ModeArg> for MatchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Exact => MatchMode::Exact,
            ModeArg::Regex => MatchMode::Regex,
        }
    }
}

/// Applies command-line overrides on top of a loaded config.
#[must_use]
pub fn with_overrides(
    mut config: MapperConfig,
    suffix: Option<String>,
    mode: Option<ModeArg>,
) -> MapperConfig {
    if let Some(suffix) = suffix {
        config.naming.suffix = suffix;
    }
    if let Some(mode) = mode {
        config.naming.mode = mode.into();
    }
    config
}

/// Appends `-transformed` to whatever it is given.
pub struct FirstNameMask;

impl DataTransformer for FirstNameMask {
    fn transform(&self, data: Value) -> Value {
        match data {
            Value::String(s) => Value::String(format!("{s}-transformed")),
            other => Value::String(format!("{other}-transformed")),
        }
    }
}

/// Builds the demo mapper: `User.last_name` gains `-lastname` on the way to
/// the DTO, `UserDto.first_name` gains `-transformed` on the way back.
pub fn build_mapper(config: MapperConfig) -> MapResult<Mapper> {
    MapperBuilder::new(models::domain_universe(), models::dto_universe())
        .with_config(config)
        .on_typed::<User, String, String>("last_name", |last_name| last_name + "-lastname")?
        .on_transformer::<UserDto>("first_name", FirstNameMask)?
        .build()
}
