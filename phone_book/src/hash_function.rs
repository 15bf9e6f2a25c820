/// Home slot of `key` in a table of `capacity` slots.
///
/// `capacity` must be non-zero; tables refuse to be built otherwise.
pub fn hash(key: u64, capacity: usize) -> usize {
    (key % capacity as u64) as usize
}
