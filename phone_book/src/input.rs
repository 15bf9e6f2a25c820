use std::io::{BufRead, Write};

use log::debug;

use crate::error::{PhoneBookError, Result};

/// Reads the insertion count and the telephone numbers, one value per line.
///
/// With prompts enabled every value is preceded by a prompt on `writer`, as in an
/// interactive session. Blank lines are skipped.
pub struct InputReader<R, W> {
    reader: R,
    writer: W,
    prompts: bool,
}

impl<R: BufRead, W: Write> InputReader<R, W> {
    pub fn new(reader: R, writer: W, prompts: bool) -> Self {
        Self {
            reader,
            writer,
            prompts,
        }
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        if self.prompts {
            write!(self.writer, "{}", text)?;
            self.writer.flush()?;
        }
        Ok(())
    }

    fn next_value(&mut self) -> Result<i64> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(PhoneBookError::UnexpectedEof);
            }
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return parse_value(trimmed);
            }
        }
    }

    pub fn read_count(&mut self, capacity: usize) -> Result<usize> {
        self.prompt(&format!(
            "Enter number of telephone numbers to insert (max {}): ",
            capacity
        ))?;
        let requested = self.next_value()?;
        validate_count(requested, capacity)
    }

    pub fn read_numbers(&mut self, count: usize) -> Result<Vec<u64>> {
        let mut numbers = Vec::with_capacity(count);
        for i in 0..count {
            self.prompt(&format!("Enter telephone number {}: ", i + 1))?;
            let number = to_key(self.next_value()?)?;
            debug!("Read telephone number {} of {}: {}", i + 1, count, number);
            numbers.push(number);
        }
        Ok(numbers)
    }

    /// Count followed by that many numbers.
    pub fn read_session(&mut self, capacity: usize) -> Result<Vec<u64>> {
        let count = self.read_count(capacity)?;
        self.read_numbers(count)
    }
}

fn parse_value(text: &str) -> Result<i64> {
    text.parse::<i64>().map_err(|_| PhoneBookError::Parse {
        input: text.to_string(),
    })
}

pub fn validate_count(requested: i64, capacity: usize) -> Result<usize> {
    match usize::try_from(requested) {
        Ok(count) if (1..=capacity).contains(&count) => Ok(count),
        _ => Err(PhoneBookError::InputCount {
            requested,
            capacity,
        }),
    }
}

pub fn to_key(value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| PhoneBookError::InvalidKey(value))
}
