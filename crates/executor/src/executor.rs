//! The Executor - single entry point to the ledger.
//!
//! The Executor is a stateless dispatcher that routes commands to the
//! record handlers and converts results to outputs and responses.

use std::sync::Arc;

use tracing::{debug, info_span, warn, Dispatch};
use treeledger_core::LedgerStore;

use crate::config::LedgerConfig;
use crate::handlers::{listing, records};
use crate::invocation::Invocation;
use crate::{logging, Command, Output, Response, Result};

/// The command executor - single entry point to the ledger.
///
/// The Executor is **stateless**: it holds the store handle, the
/// configuration and the logging capability, but keeps no record state of
/// its own. All state lives in the ledger.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads. Concurrent
/// invocations get whatever isolation the ledger provides; a quantity update
/// is a read followed by a write and is not atomic here.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use treeledger_executor::{Command, Executor};
/// use treeledger_storage::MemoryLedger;
///
/// let executor = Executor::new(Arc::new(MemoryLedger::new()));
///
/// // Host-style invocation
/// let response = executor.invoke("initLedger", vec![]);
/// assert!(response.is_success());
///
/// // Typed execution
/// let output = executor.execute(Command::QueryAllOwners)?;
/// ```
pub struct Executor {
    store: Arc<dyn LedgerStore>,
    config: LedgerConfig,
    dispatch: Dispatch,
}

impl Executor {
    /// Create an executor with the default configuration and no logging.
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self::with_config(store, LedgerConfig::default(), logging::silent())
    }

    /// Create an executor with explicit configuration and logging capability.
    pub fn with_config(store: Arc<dyn LedgerStore>, config: LedgerConfig, dispatch: Dispatch) -> Self {
        Self {
            store,
            config,
            dispatch,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// The ledger this executor writes to.
    pub fn store(&self) -> &Arc<dyn LedgerStore> {
        &self.store
    }

    /// Instantiate hook called once when the host installs the contract.
    ///
    /// Touches no state; seeding is the separate `initLedger` operation.
    pub fn instantiate(&self) -> Response {
        Response::success(Vec::new())
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        tracing::dispatcher::with_default(&self.dispatch, || self.run(cmd))
    }

    /// Execute multiple commands sequentially.
    ///
    /// Returns all results in the same order as the input commands.
    /// A failing command does not stop the ones after it, and its earlier
    /// writes are not rolled back.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        tracing::dispatcher::with_default(&self.dispatch, || {
            cmds.into_iter().map(|cmd| self.run(cmd)).collect()
        })
    }

    /// Invoke an operation by name with positional arguments.
    ///
    /// Name lookup and arity checks happen before any store access.
    pub fn invoke(&self, name: &str, args: Vec<String>) -> Response {
        tracing::dispatcher::with_default(&self.dispatch, || {
            let span = info_span!("invoke", function = name, args = args.len());
            let _entered = span.enter();

            let result = Command::parse(name, args).and_then(|cmd| self.run(cmd));
            match &result {
                Ok(_) => debug!("invocation succeeded"),
                Err(err) => warn!(error = %err, "invocation failed"),
            }
            Response::from(result)
        })
    }

    /// Invoke from a host envelope whose first argument is the function name.
    pub fn invoke_request(&self, invocation: &Invocation) -> Response {
        let (function, params) = invocation.function_and_parameters();
        self.invoke(function, params.to_vec())
    }

    fn run(&self, cmd: Command) -> Result<Output> {
        let store = self.store.as_ref();
        match cmd {
            Command::QueryHouseAddress { key } => records::query_house_address(store, key),
            Command::InitLedger => records::init_ledger(store, &self.config),
            Command::CreateEntry { key, record } => records::create_entry(store, key, record),
            Command::QueryAllOwners => listing::query_all_owners(store, &self.config),
            Command::ChangeTreeQuantity { key, quantity } => {
                records::change_tree_quantity(store, &self.config, key, quantity)
            }
        }
    }
}
