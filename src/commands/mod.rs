//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain nutrition
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod init;
pub mod list;
pub mod loader;
pub mod nutrients;
pub mod pick;
pub mod total;

pub use init::{execute_init, InitOptions};
pub use list::{execute_list, filtered_view, ListOptions};
pub use loader::{load_session, DataOptions};
pub use nutrients::{execute_categories, execute_nutrients};
pub use pick::{execute_pick, PickOptions};
pub use total::{apply_toggles, execute_total, TotalOptions};
