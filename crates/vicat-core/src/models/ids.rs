//! Aggregate identifiers.
//!
//! Each aggregate has its own opaque identifier type so that a category id
//! cannot be handed to a genre lookup by accident. Identifiers are generated
//! at creation, immutable, and compared by value.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! identifier {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

identifier!(
    /// Identifies a catalog category.
    CategoryId
);
identifier!(
    /// Identifies a genre.
    GenreId
);
identifier!(
    /// Identifies a cast member.
    CastMemberId
);
identifier!(
    /// Identifies a video aggregate.
    VideoId
);
identifier!(
    /// Identifies a single media value (image or video asset) within a video.
    MediaId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(VideoId::new(), VideoId::new());
        assert_ne!(CategoryId::new(), CategoryId::new());
    }

    #[test]
    fn test_display_parse_round_trip() {
        let id = MediaId::new();
        let parsed: MediaId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("not-a-uuid".parse::<CategoryId>().is_err());
    }

    #[test]
    fn test_equality_is_by_value() {
        let raw = Uuid::new_v4();
        assert_eq!(GenreId::from_uuid(raw), GenreId::from_uuid(raw));
    }
}
