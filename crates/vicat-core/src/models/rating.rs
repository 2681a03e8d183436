//! Audience rating for catalog videos.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Free,
    Age10,
    Age12,
    Age14,
    Age16,
    Age18,
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Rating::Free => write!(f, "free"),
            Rating::Age10 => write!(f, "age_10"),
            Rating::Age12 => write!(f, "age_12"),
            Rating::Age14 => write!(f, "age_14"),
            Rating::Age16 => write!(f, "age_16"),
            Rating::Age18 => write!(f, "age_18"),
        }
    }
}

impl FromStr for Rating {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(Rating::Free),
            "age_10" => Ok(Rating::Age10),
            "age_12" => Ok(Rating::Age12),
            "age_14" => Ok(Rating::Age14),
            "age_16" => Ok(Rating::Age16),
            "age_18" => Ok(Rating::Age18),
            _ => Err(anyhow::anyhow!("Invalid rating: {}", s)),
        }
    }
}
