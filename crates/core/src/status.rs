//! Status helper enums mapping to SMALLINT lookup columns.
//!
//! Each enum variant's discriminant matches the seed data order (1-based)
//! used by the corresponding `status_id` column.

/// Status ID type matching SMALLINT in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_status_enum! {
    /// Car inventory status.
    CarStatus {
        Available = 1,
        Reserved = 2,
        Sold = 3,
        Archived = 4,
    }
}

define_status_enum! {
    /// Reservation lifecycle status.
    ReservationStatus {
        Pending = 1,
        Confirmed = 2,
        Completed = 3,
        Cancelled = 4,
    }
}

define_status_enum! {
    /// Customer request handling status.
    RequestStatus {
        New = 1,
        InProgress = 2,
        Resolved = 3,
        Closed = 4,
    }
}
