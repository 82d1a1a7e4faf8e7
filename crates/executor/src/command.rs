//! Operation table and Command enum.
//!
//! [`Operation`] is the lookup table from wire names to behaviors, and owns
//! each operation's arity contract. [`Command`] is the typed, validated form
//! of an invocation: once a `Command` exists, its arguments are known to be
//! complete.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON
//! - **Typed**: No positional argument lists past the parse step

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use treeledger_core::Record;

use crate::{Error, Result};

/// The five operations a caller can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Point lookup of a stored record
    QueryHouseAddress,
    /// Seed the four demo records
    InitLedger,
    /// Insert or overwrite a record
    CreateEntry,
    /// List every record in the seeded key range
    QueryAllOwners,
    /// Update the quantity field of a record
    ChangeTreeQuantity,
}

impl Operation {
    /// Every operation, in table order.
    pub const ALL: [Operation; 5] = [
        Operation::QueryHouseAddress,
        Operation::InitLedger,
        Operation::CreateEntry,
        Operation::QueryAllOwners,
        Operation::ChangeTreeQuantity,
    ];

    /// Wire name, matched exactly and case-sensitively.
    pub fn name(self) -> &'static str {
        match self {
            Operation::QueryHouseAddress => "queryHouseAddress",
            Operation::InitLedger => "initLedger",
            Operation::CreateEntry => "createEntry",
            Operation::QueryAllOwners => "queryAllOwners",
            Operation::ChangeTreeQuantity => "changeTreeQuantity",
        }
    }

    /// Exact number of positional arguments the operation takes.
    pub fn arity(self) -> usize {
        match self {
            Operation::QueryHouseAddress => 1,
            Operation::InitLedger => 0,
            // key followed by the six record fields
            Operation::CreateEntry => 7,
            Operation::QueryAllOwners => 0,
            Operation::ChangeTreeQuantity => 2,
        }
    }

    /// Whether the operation writes to the ledger.
    pub fn is_write(self) -> bool {
        matches!(
            self,
            Operation::InitLedger | Operation::CreateEntry | Operation::ChangeTreeQuantity
        )
    }

    /// Look an operation up by wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Operation::from_name(s).ok_or_else(|| Error::UnknownOperation {
            name: s.to_string(),
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated invocation.
///
/// # Example
///
/// ```ignore
/// use treeledger_executor::Command;
///
/// let cmd = Command::parse("changeTreeQuantity", vec!["CAR0".into(), "12".into()])?;
/// assert_eq!(
///     cmd,
///     Command::ChangeTreeQuantity { key: "CAR0".into(), quantity: "12".into() },
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Read the record stored under `key`.
    /// Returns: `Output::Value`
    QueryHouseAddress { key: String },

    /// Write the four demo records.
    /// Returns: `Output::Unit`
    InitLedger,

    /// Write `record` under `key`, replacing any previous value.
    /// Returns: `Output::Unit`
    CreateEntry { key: String, record: Record },

    /// List every record in the seeded key range.
    /// Returns: `Output::Json`
    QueryAllOwners,

    /// Replace the quantity of the record under `key`.
    /// Returns: `Output::Unit`
    ChangeTreeQuantity { key: String, quantity: String },
}

impl Command {
    /// Route an operation name and positional arguments to a command.
    ///
    /// # Errors
    ///
    /// - `UnknownOperation` if `name` is not in the operation table
    /// - `Arity` if `args.len()` differs from the operation's arity
    pub fn parse(name: &str, args: Vec<String>) -> Result<Command> {
        let op: Operation = name.parse()?;
        if args.len() != op.arity() {
            return Err(Error::Arity {
                operation: op.name().to_string(),
                expected: op.arity(),
                actual: args.len(),
            });
        }

        let mut args = args.into_iter();
        // Arity is checked above, so every `next_arg` call has an argument.
        let mut next_arg = move || args.next().unwrap_or_default();

        Ok(match op {
            Operation::QueryHouseAddress => Command::QueryHouseAddress { key: next_arg() },
            Operation::InitLedger => Command::InitLedger,
            Operation::CreateEntry => {
                let key = next_arg();
                let record = Record {
                    kind: next_arg(),
                    address: next_arg(),
                    owner: next_arg(),
                    quantity: next_arg(),
                    credit: next_arg(),
                    supplier: next_arg(),
                };
                Command::CreateEntry { key, record }
            }
            Operation::QueryAllOwners => Command::QueryAllOwners,
            Operation::ChangeTreeQuantity => Command::ChangeTreeQuantity {
                key: next_arg(),
                quantity: next_arg(),
            },
        })
    }

    /// The operation this command performs.
    pub fn operation(&self) -> Operation {
        match self {
            Command::QueryHouseAddress { .. } => Operation::QueryHouseAddress,
            Command::InitLedger => Operation::InitLedger,
            Command::CreateEntry { .. } => Operation::CreateEntry,
            Command::QueryAllOwners => Operation::QueryAllOwners,
            Command::ChangeTreeQuantity { .. } => Operation::ChangeTreeQuantity,
        }
    }

    /// Wire name of the command's operation.
    pub fn name(&self) -> &'static str {
        self.operation().name()
    }

    /// Whether the command writes to the ledger.
    pub fn is_write(&self) -> bool {
        self.operation().is_write()
    }
}
