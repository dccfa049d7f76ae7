// src/grape.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Berry skin color. The set of labels is closed; lookups are case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Black,
    White,
    Red,
    Rose,
    Grey,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::Black,
        Color::White,
        Color::Red,
        Color::Rose,
        Color::Grey,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Color::Black => "BLACK",
            Color::White => "WHITE",
            Color::Red => "RED",
            Color::Rose => "ROSE",
            Color::Grey => "GREY",
        }
    }

    /// Returns the color whose label is exactly `label`, if any.
    pub fn from_label(label: &str) -> Option<Color> {
        Color::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color label '{0}'")]
pub struct UnknownColorLabel(pub String);

impl FromStr for Color {
    type Err = UnknownColorLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_label(s).ok_or_else(|| UnknownColorLabel(s.to_string()))
    }
}

/// A single grape cultivar as described by one line of the input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grape {
    pub name: String,
    pub color: Color,
    pub parent1: String,
    pub parent2: String,
    pub regions: Vec<String>,
    pub alt_names: Vec<String>,
}
