/// ID types for Chinook entities
///
/// Both ids wrap the 64-bit integer keys of the authoritative track and
/// playlist tables. They carry no validation: zero and negative values are
/// representable, and checking them is the producer's job.
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "sqlx-support")]
use sqlx::{
    encode::IsNull,
    error::BoxDynError,
    sqlite::{SqliteArgumentValue, SqliteTypeInfo, SqliteValueRef},
    Decode, Encode, Sqlite, Type,
};

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw database key
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the raw database key
            pub const fn get(self) -> i64 {
                self.0
            }

            /// Whether this is the zero key, which never names a stored row
            pub const fn is_unset(self) -> bool {
                self.0 == 0
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        #[cfg(feature = "sqlx-support")]
        impl Type<Sqlite> for $name {
            fn type_info() -> SqliteTypeInfo {
                <i64 as Type<Sqlite>>::type_info()
            }

            fn compatible(ty: &SqliteTypeInfo) -> bool {
                <i64 as Type<Sqlite>>::compatible(ty)
            }
        }

        #[cfg(feature = "sqlx-support")]
        impl<'q> Encode<'q, Sqlite> for $name {
            fn encode_by_ref(
                &self,
                args: &mut Vec<SqliteArgumentValue<'q>>,
            ) -> Result<IsNull, BoxDynError> {
                <i64 as Encode<Sqlite>>::encode_by_ref(&self.0, args)
            }
        }

        #[cfg(feature = "sqlx-support")]
        impl<'r> Decode<'r, Sqlite> for $name {
            fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
                let id = <i64 as Decode<Sqlite>>::decode(value)?;
                Ok(Self(id))
            }
        }
    };
}

integer_id!(
    /// Track identifier
    ///
    /// Correlation key back to the authoritative track row.
    TrackId
);

integer_id!(
    /// Playlist identifier
    PlaylistId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_id_from_integer() {
        let id = TrackId::from(12);
        assert_eq!(id.get(), 12);
        assert_eq!(i64::from(id), 12);
    }

    #[test]
    fn playlist_id_display() {
        let id = PlaylistId::new(456);
        assert_eq!(format!("{}", id), "456");
    }

    #[test]
    fn zero_is_unset() {
        assert!(TrackId::default().is_unset());
        assert!(!TrackId::new(-1).is_unset());
    }

    #[test]
    fn ids_serialize_as_bare_integers() {
        let json = serde_json::to_string(&PlaylistId::new(3)).unwrap();
        assert_eq!(json, "3");

        let id: TrackId = serde_json::from_str("9223372036854775807").unwrap();
        assert_eq!(id.get(), i64::MAX);
    }

    #[test]
    fn playlist_ids_order_numerically() {
        let mut ids = vec![PlaylistId::new(9), PlaylistId::new(-2), PlaylistId::new(7)];
        ids.sort();
        assert_eq!(ids, vec![PlaylistId::new(-2), PlaylistId::new(7), PlaylistId::new(9)]);
    }
}
