//! Fixed-capacity telephone directory built on an open-addressing hash table,
//! comparing linear and quadratic probing by the number of slots each examines.

pub mod directory;
pub mod error;
pub mod fixed_hash_table;
pub mod hash_function;
pub mod input;
pub mod logger;
pub mod probe;
pub mod report;

pub use directory::{run, run_all, InsertOptions, Insertion, StrategyRun};
pub use error::{PhoneBookError, Result};
pub use fixed_hash_table::{FixedHashTable, InsertionReport, Slot, DEFAULT_CAPACITY};
pub use probe::{Linear, ProbeSequence, ProbeStrategy, Quadratic};
