//! Command handlers.
//!
//! | Module | Commands |
//! |--------|----------|
//! | `records` | QueryHouseAddress, InitLedger, CreateEntry, ChangeTreeQuantity |
//! | `listing` | QueryAllOwners |

pub mod listing;
pub mod records;
