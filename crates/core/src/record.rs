//! The tree credit record
//!
//! A `Record` is a flat object of six text fields stored under a single
//! ledger key. Nothing is coerced: quantities and credit amounts are kept
//! exactly as the caller wrote them.
//!
//! # Wire format
//!
//! Records are stored as a JSON object with the field names below, in this
//! order:
//!
//! ```text
//! {"types":"Red Maple","address":"3456 Oxford Street","owner":"3yh654",
//!  "quantity":"4","credit":"$17.66","company":"Tree Inc."}
//! ```
//!
//! Decoding is tolerant: unknown fields are ignored and missing fields become
//! empty strings.

use serde::{Deserialize, Serialize};

/// Tree credit record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    /// Category label (tree species)
    #[serde(rename = "types")]
    pub kind: String,
    /// Location / house address
    pub address: String,
    /// Owner or holder identifier
    pub owner: String,
    /// Number of trees, as text
    pub quantity: String,
    /// Credit granted, as text
    pub credit: String,
    /// Supplier / origin label
    #[serde(rename = "company")]
    pub supplier: String,
}

impl Record {
    /// Create a record from its six fields in wire order.
    pub fn new(
        kind: impl Into<String>,
        address: impl Into<String>,
        owner: impl Into<String>,
        quantity: impl Into<String>,
        credit: impl Into<String>,
        supplier: impl Into<String>,
    ) -> Self {
        Record {
            kind: kind.into(),
            address: address.into(),
            owner: owner.into(),
            quantity: quantity.into(),
            credit: credit.into(),
            supplier: supplier.into(),
        }
    }

    /// Record with every field empty except `quantity`.
    pub fn with_quantity(quantity: impl Into<String>) -> Self {
        Record {
            quantity: quantity.into(),
            ..Record::default()
        }
    }

    /// Serialize to the stored JSON form.
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Deserialize from the stored JSON form.
    pub fn from_bytes(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}
