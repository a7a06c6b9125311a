/// Customer account record.
pub mod account;

/// Account directory interface, plus "in memory" implementation keyed by
/// account id.
pub mod directory;

/// Actions a customer can pick from the menu.
pub mod action;

/// Banknote breakdown of a withdrawn amount.
pub mod cash;

/// Console helpers used while serving a customer: prompts, input parsing
/// and applying an action to the directory.
pub mod teller;

/// Loads the accounts from CSV and runs the console session. Lives in the
/// library so integration tests can drive it with in-memory buffers.
pub mod bin_utils;
