//! Result line format: `hostname,0x<processor id>,<strategy>,<elapsed ns>`

use std::fmt;

use crate::core::error::{BenchError, Result};
use crate::core::types::{ProcessorId, TrialResult};

pub const FIELD_COUNT: usize = 4;

impl fmt::Display for TrialResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{:#x},{},{}",
            self.hostname, self.processor_id, self.strategy, self.elapsed_ns
        )
    }
}

/// Parses one result line back into its fields
pub fn parse_line(line: &str) -> Result<TrialResult> {
    let malformed = || BenchError::MalformedLine(line.to_owned());

    let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split(',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(malformed());
    }

    let hex = fields[1].strip_prefix("0x").ok_or_else(malformed)?;
    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }
    let processor_id = u64::from_str_radix(hex, 16).map_err(|_| malformed())?;

    if fields[3].is_empty() || !fields[3].bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let elapsed_ns = fields[3].parse::<u64>().map_err(|_| malformed())?;

    if fields[2].is_empty() {
        return Err(malformed());
    }

    Ok(TrialResult {
        hostname: fields[0].to_owned(),
        processor_id: ProcessorId::new(processor_id),
        strategy: fields[2].to_owned(),
        elapsed_ns,
    })
}
