use serde::Serialize;

/// Status column of an attendance export row.
///
/// Only `ClockIn` and `ClockOut` drive the break/hours computation; any
/// other value is kept verbatim and travels along as a passenger.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub enum EventStatus {
    ClockIn,
    ClockOut,
    Other(String),
}

impl EventStatus {
    /// Convert raw export string → enum
    pub fn from_export_str(s: &str) -> Self {
        match s.trim() {
            "C/In" => EventStatus::ClockIn,
            "C/Out" => EventStatus::ClockOut,
            other => EventStatus::Other(other.to_string()),
        }
    }

    /// Convert enum → raw export string
    pub fn as_export_str(&self) -> &str {
        match self {
            EventStatus::ClockIn => "C/In",
            EventStatus::ClockOut => "C/Out",
            EventStatus::Other(s) => s.as_str(),
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, EventStatus::ClockIn)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, EventStatus::ClockOut)
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_export_str())
    }
}
