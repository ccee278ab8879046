//! Synthetic identities for archive entities.
//!
//! Collections decide membership by id, never by field values, so two cameras
//! with the same name stay distinct entries. Ids live only in memory; the JSON
//! file never stores them and every read mints fresh ones.

use std::fmt;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(CameraId);
define_id!(FilmId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(CameraId::new(), CameraId::new());
        assert_ne!(FilmId::new(), FilmId::new());
    }

    #[test]
    fn test_display_is_hyphenated_uuid() {
        let id = CameraId::new();
        assert!(Uuid::parse_str(&id.to_string()).is_ok());
    }
}
