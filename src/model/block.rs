//! Block: a set of elements under a shared access constraint.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::creation::{checked_name, creation_to, deserialize_name};
use super::{Color, PropertyBag};
use crate::Result;

/// The constraint a block imposes on its members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    /// At most one vehicle inside the block.
    #[default]
    SingleVehicleOnly,
    /// Any number of vehicles, all travelling the same direction.
    SameDirectionOnly,
}

impl BlockType {
    pub const ALL: [BlockType; 2] = [BlockType::SingleVehicleOnly, BlockType::SameDirectionOnly];
}

/// A transfer object describing a block in the plant model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockCreationTo {
    #[serde(deserialize_with = "deserialize_name")]
    name: String,
    #[serde(default)]
    properties: PropertyBag,
    #[serde(rename = "type", default)]
    block_type: BlockType,
    #[serde(default, deserialize_with = "deserialize_members")]
    member_names: Vec<String>,
    #[serde(default)]
    layout: BlockLayout,
}

creation_to!(BlockCreationTo, "block");

impl BlockCreationTo {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: checked_name("block", name.into())?,
            properties: PropertyBag::new(),
            block_type: BlockType::default(),
            member_names: Vec::new(),
            layout: BlockLayout::default(),
        })
    }

    pub fn block_type(&self) -> BlockType {
        self.block_type
    }

    pub fn with_type(&self, block_type: BlockType) -> Self {
        Self { block_type, ..self.clone() }
    }

    /// Member names in insertion order, without duplicates.
    pub fn member_names(&self) -> &[String] {
        &self.member_names
    }

    /// Later duplicates are dropped; the first occurrence keeps its place.
    pub fn with_member_names(&self, member_names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self { member_names: distinct(member_names.into_iter().map(Into::into)), ..self.clone() }
    }

    pub fn layout(&self) -> &BlockLayout {
        &self.layout
    }

    pub fn with_layout(&self, layout: BlockLayout) -> Self {
        Self { layout, ..self.clone() }
    }
}

fn distinct(names: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in names {
        if !out.contains(&name) {
            out.push(name);
        }
    }
    out
}

fn deserialize_members<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<String>, D::Error> {
    Ok(distinct(Vec::<String>::deserialize(deserializer)?.into_iter()))
}

impl fmt::Display for BlockCreationTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BlockCreationTo{{name={}, type={:?}, memberNames={:?}, layout={:?}, properties={}}}",
            self.name, self.block_type, self.member_names, self.layout, self.properties,
        )
    }
}

/// Presentation hints for a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockLayout {
    #[serde(default = "default_color")]
    color: Color,
}

fn default_color() -> Color {
    Color::RED
}

impl Default for BlockLayout {
    fn default() -> Self {
        Self { color: Color::RED }
    }
}

impl BlockLayout {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}
