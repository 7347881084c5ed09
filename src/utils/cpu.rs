//! Processor identity. The source is chosen per target at compile time;
//! nothing outside this module knows which one is in use.

#[cfg(not(target_arch = "x86_64"))]
use crate::core::error::BenchError;
use crate::core::error::Result;
use crate::core::types::ProcessorId;

#[cfg(not(any(target_arch = "x86_64", all(target_arch = "aarch64", target_os = "linux"))))]
const CPUINFO: &str = "/proc/cpuinfo";

/// Processor Version Register, as reported by the kernel (`mfspr 0x11f`
/// is not reachable from stable inline asm on POWER)
#[cfg(any(target_arch = "powerpc64", target_arch = "powerpc"))]
pub fn processor_id() -> Result<ProcessorId> {
    let info = std::fs::read_to_string(CPUINFO)
        .map_err(|e| BenchError::ProcessorId(format!("{}: {}", CPUINFO, e)))?;
    parse_pvr(&info)
        .map(ProcessorId::new)
        .ok_or_else(|| BenchError::ProcessorId(format!("no pvr in {}", CPUINFO)))
}

/// CPUID leaf 1 signature: stepping, model, family and their extensions
#[cfg(target_arch = "x86_64")]
pub fn processor_id() -> Result<ProcessorId> {
    #[allow(unused_unsafe)]
    let leaf = unsafe { std::arch::x86_64::__cpuid(1) };
    Ok(ProcessorId::new(leaf.eax as u64))
}

/// MIDR_EL1, exported by the kernel through sysfs
#[cfg(all(target_arch = "aarch64", target_os = "linux"))]
pub fn processor_id() -> Result<ProcessorId> {
    const MIDR: &str = "/sys/devices/system/cpu/cpu0/regs/identification/midr_el1";
    let raw = std::fs::read_to_string(MIDR)
        .map_err(|e| BenchError::ProcessorId(format!("{}: {}", MIDR, e)))?;
    parse_hex_register(&raw)
        .map(ProcessorId::new)
        .ok_or_else(|| BenchError::ProcessorId(format!("unparsable {}: {:?}", MIDR, raw)))
}

/// Fingerprint of the model-name line for targets without a readable id register
#[cfg(not(any(
    target_arch = "powerpc64",
    target_arch = "powerpc",
    target_arch = "x86_64",
    all(target_arch = "aarch64", target_os = "linux")
)))]
pub fn processor_id() -> Result<ProcessorId> {
    let info = std::fs::read_to_string(CPUINFO)
        .map_err(|e| BenchError::ProcessorId(format!("{}: {}", CPUINFO, e)))?;
    model_name(&info)
        .map(|name| ProcessorId::new(fnv1a(name.as_bytes())))
        .ok_or_else(|| BenchError::ProcessorId(format!("no model name in {}", CPUINFO)))
}

/// Extracts the PVR from a POWER `/proc/cpuinfo`, e.g.
/// `revision : 2.1 (pvr 004e 1201)` gives `0x004e1201`.
pub fn parse_pvr(cpuinfo: &str) -> Option<u64> {
    cpuinfo.lines().find_map(|line| {
        let start = line.find("(pvr ")? + "(pvr ".len();
        let rest = &line[start..];
        let digits: String = rest[..rest.find(')')?].split_whitespace().collect();
        if digits.is_empty() {
            return None;
        }
        u64::from_str_radix(&digits, 16).ok()
    })
}

/// Parses a `0x`-prefixed hex register dump such as `0x00000000410fd083\n`
pub fn parse_hex_register(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    let hex = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    u64::from_str_radix(hex, 16).ok()
}

/// Value of the first model-describing `/proc/cpuinfo` key
pub fn model_name(cpuinfo: &str) -> Option<&str> {
    const KEYS: [&str; 4] = ["model name", "cpu model", "cpu", "uarch"];
    cpuinfo.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        let value = value.trim();
        (KEYS.contains(&key.trim()) && !value.is_empty()).then_some(value)
    })
}

/// 64-bit FNV-1a
pub fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    bytes
        .iter()
        .fold(OFFSET, |hash, &b| (hash ^ b as u64).wrapping_mul(PRIME))
}
