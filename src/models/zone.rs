use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Home,
    Pueblo,
    Valley,
}

impl Zone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Home => "home",
            Zone::Pueblo => "pueblo",
            Zone::Valley => "valley",
        }
    }

    /// Display name used in customer-facing messages.
    pub fn title(&self) -> &'static str {
        match self {
            Zone::Home => "Home",
            Zone::Pueblo => "Pueblo",
            Zone::Valley => "Valley",
        }
    }

    /// Whether the zone takes part in the alternating day rotation.
    pub fn is_rotating(&self) -> bool {
        !matches!(self, Zone::Home)
    }

    /// The rotation partner. Home has none and maps to itself.
    pub fn opposite(&self) -> Zone {
        match self {
            Zone::Home => Zone::Home,
            Zone::Pueblo => Zone::Valley,
            Zone::Valley => Zone::Pueblo,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Zone {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(Zone::Home),
            "pueblo" => Ok(Zone::Pueblo),
            "valley" => Ok(Zone::Valley),
            _ => Err(anyhow::anyhow!("unknown zone: {s}")),
        }
    }
}

/// Result of looking a ZIP code up against the service area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    Serviced(Zone),
    Unserviced,
}

impl Coverage {
    pub fn zone(&self) -> Option<Zone> {
        match self {
            Coverage::Serviced(zone) => Some(*zone),
            Coverage::Unserviced => None,
        }
    }
}
