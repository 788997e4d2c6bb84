//! Package value objects
//!
//! A package is a subscription tier whose menu and feature entitlements are
//! edited through the builder trees.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Numeric package identifier as issued by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(i64);

impl PackageId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PackageId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for PackageId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Publication status written alongside a package selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PackageStatus {
    #[default]
    Active,
    Inactive,
}

impl PackageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageStatus::Active => "active",
            PackageStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" | "1" | "true" => Ok(PackageStatus::Active),
            "inactive" | "0" | "false" => Ok(PackageStatus::Inactive),
            other => Err(format!("unknown package status '{other}'")),
        }
    }
}

/// A selectable package as listed by the package catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageOption {
    pub id: PackageId,
    #[serde(alias = "package_name", alias = "packageName", alias = "title")]
    pub name: String,
}

impl PackageOption {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: PackageId::new(id),
            name: name.into(),
        }
    }
}
