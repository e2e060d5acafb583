//! Marketplace platforms that campaigns can target.

use crate::TypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The e-commerce platform a product is purchased and reviewed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Amazon,
    Etsy,
    Walmart,
    Shopify,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amazon => "Amazon",
            Self::Etsy => "Etsy",
            Self::Walmart => "Walmart",
            Self::Shopify => "Shopify",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Amazon" => Ok(Self::Amazon),
            "Etsy" => Ok(Self::Etsy),
            "Walmart" => Ok(Self::Walmart),
            "Shopify" => Ok(Self::Shopify),
            other => Err(TypeError::UnknownPlatform(other.to_string())),
        }
    }
}
