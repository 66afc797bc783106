//! Server monitoring wire types.
//!
//! Shapes for the panel's process/host monitoring endpoints, decoded
//! verbatim from the server's snake_case JSON.

use serde::{Deserialize, Serialize};

/// Host and process snapshot from `GET /api/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SysInfo {
    /// Host CPU usage, percent.
    pub cpu_percent: f64,
    /// Host memory usage.
    pub memory: MemoryInfo,
    /// Host disk usage.
    pub disk: DiskInfo,
    /// Host boot time, unix seconds.
    pub boot_time: u64,
    /// The panel process itself.
    pub process: ProcessInfo,
}

/// Host memory usage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryInfo {
    pub total: u64,
    pub available: u64,
    pub percent: f64,
}

/// Host disk usage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskInfo {
    pub total: u64,
    pub free: u64,
    pub percent: f64,
}

/// Panel process details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessInfo {
    pub pid: u32,
    pub status: String,
    pub memory_used: u64,
    pub cpu_percent: f64,
    /// Process start time, unix milliseconds.
    pub start_time: i64,
}

/// A known player, from `GET /api/player`.
///
/// `last_online` is preformatted by the server (`YYYY-MM-DD HH:MM:SS`) and
/// passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub steamid: String,
    pub playeruid: String,
    pub last_online: String,
    pub online: bool,
}
