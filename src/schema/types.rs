// src/schema/types.rs
use async_graphql::SimpleObject;
use serde::Deserialize;

/// Sprite image URLs. Field names stay snake_case on the wire and in the schema.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, SimpleObject)]
#[graphql(rename_fields = "snake_case", cache_control(max_age = 50))]
pub struct SpeciesSprites {
    pub front_default: String,
    pub front_shiny: String,
    pub front_female: String,
    pub front_shiny_female: String,
    pub back_default: String,
    pub back_shiny: String,
    pub back_female: String,
    pub back_shiny_female: String,
}

/// Decoded in one piece from the upstream payload, so a missing or null
/// field fails the whole value rather than producing a partial object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, SimpleObject)]
#[graphql(cache_control(max_age = 50))]
pub struct Species {
    pub id: i64,
    pub name: String,
    pub height: i64,
    pub weight: i64,
    pub sprites: SpeciesSprites,
}
