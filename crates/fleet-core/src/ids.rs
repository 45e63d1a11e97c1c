//! Strongly typed identifier wrappers.
//!
//! Fleet identifiers come from upstream transit systems as opaque strings
//! (`"BUS_001"`, `"ROUTE_42"`), so the wrappers hold a `String` rather than a
//! dense integer index.  All IDs are `Ord + Hash` so they can be used as map
//! keys without ceremony.

use std::fmt;

/// Generate a typed ID wrapper around an owned string.
macro_rules! string_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub String);

        impl $name {
            /// Borrow the raw identifier.
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                $name(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id! {
    /// Identifier of a bus in the fleet (e.g. `"BUS_001"`).  Unique.
    pub struct BusId;
}

string_id! {
    /// Identifier of a service route (e.g. `"ROUTE_42"`).
    pub struct RouteId;
}

string_id! {
    /// Identifier of an alert entry (e.g. `"ALT_001"`).
    pub struct AlertId;
}
