use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhoneBookError {
    #[error("Number of inputs must be between 1 and the hash table size {capacity}, got {requested}")]
    InputCount { requested: i64, capacity: usize },
    #[error("Telephone number {0} is negative")]
    InvalidKey(i64),
    #[error("'{input}' is not a telephone number")]
    Parse { input: String },
    #[error("Input ended before all telephone numbers were read")]
    UnexpectedEof,
    #[error("Cannot insert {key}: hash table is full ({capacity} slots)")]
    CapacityExceeded { key: u64, capacity: usize },
    #[error("Cannot insert {key}: no empty slot reachable after {attempts} probes")]
    ProbeExhausted { key: u64, attempts: usize },
    #[error("Telephone number {key} is already stored at index {slot}")]
    DuplicateKey { key: u64, slot: usize },
    #[error("Hash table capacity must be at least 1")]
    ZeroCapacity,
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, PhoneBookError>;
