//! Typed attribute values that compatibility rules operate on.
//!
//! Inventory exports spell these inconsistently ("mATX", "Micro-ATX",
//! "micro atx"), so every parser normalizes before matching and rejects
//! anything it does not recognize.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strip everything but ASCII alphanumerics and uppercase the rest.
fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_uppercase()
}

/// CPU / motherboard socket identifier (e.g. "AM5", "LGA1700").
///
/// Sockets are an open set, so this is a normalized string rather than an
/// enum. Two sockets are equal when they match after trimming and
/// uppercasing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Socket(String);

impl Socket {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Socket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Socket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err("Socket cannot be empty".to_string());
        }
        Ok(Socket::new(s))
    }
}

/// Memory generation shared by motherboards and RAM kits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MemoryType {
    #[serde(rename = "DDR3")]
    Ddr3,
    #[serde(rename = "DDR4")]
    Ddr4,
    #[serde(rename = "DDR5")]
    Ddr5,
}

impl MemoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemoryType::Ddr3 => "DDR3",
            MemoryType::Ddr4 => "DDR4",
            MemoryType::Ddr5 => "DDR5",
        }
    }
}

impl fmt::Display for MemoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match squash(s).as_str() {
            "DDR3" => Ok(MemoryType::Ddr3),
            "DDR4" => Ok(MemoryType::Ddr4),
            "DDR5" => Ok(MemoryType::Ddr5),
            _ => Err(format!("Unknown memory type: {s}")),
        }
    }
}

/// Motherboard form factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FormFactor {
    #[serde(rename = "E-ATX")]
    Eatx,
    #[serde(rename = "ATX")]
    Atx,
    #[serde(rename = "mATX")]
    MicroAtx,
    #[serde(rename = "Mini-ITX")]
    MiniItx,
}

impl FormFactor {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormFactor::Eatx => "E-ATX",
            FormFactor::Atx => "ATX",
            FormFactor::MicroAtx => "mATX",
            FormFactor::MiniItx => "Mini-ITX",
        }
    }
}

impl fmt::Display for FormFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormFactor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match squash(s).as_str() {
            "EATX" | "EXTENDEDATX" => Ok(FormFactor::Eatx),
            "ATX" => Ok(FormFactor::Atx),
            "MATX" | "MICROATX" | "UATX" => Ok(FormFactor::MicroAtx),
            "MINIITX" | "ITX" => Ok(FormFactor::MiniItx),
            _ => Err(format!("Unknown form factor: {s}")),
        }
    }
}

/// Cooler radiator size. `AirCooler` is the sentinel for tower coolers,
/// which fit in any cabinet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RadiatorSize {
    #[serde(rename = "Air Cooler")]
    AirCooler,
    #[serde(rename = "120mm")]
    Mm120,
    #[serde(rename = "140mm")]
    Mm140,
    #[serde(rename = "240mm")]
    Mm240,
    #[serde(rename = "280mm")]
    Mm280,
    #[serde(rename = "360mm")]
    Mm360,
    #[serde(rename = "420mm")]
    Mm420,
}

impl RadiatorSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            RadiatorSize::AirCooler => "Air Cooler",
            RadiatorSize::Mm120 => "120mm",
            RadiatorSize::Mm140 => "140mm",
            RadiatorSize::Mm240 => "240mm",
            RadiatorSize::Mm280 => "280mm",
            RadiatorSize::Mm360 => "360mm",
            RadiatorSize::Mm420 => "420mm",
        }
    }

    pub fn is_air(&self) -> bool {
        matches!(self, RadiatorSize::AirCooler)
    }
}

impl fmt::Display for RadiatorSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RadiatorSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match squash(s).as_str() {
            "AIRCOOLER" | "AIR" => Ok(RadiatorSize::AirCooler),
            "120" | "120MM" => Ok(RadiatorSize::Mm120),
            "140" | "140MM" => Ok(RadiatorSize::Mm140),
            "240" | "240MM" => Ok(RadiatorSize::Mm240),
            "280" | "280MM" => Ok(RadiatorSize::Mm280),
            "360" | "360MM" => Ok(RadiatorSize::Mm360),
            "420" | "420MM" => Ok(RadiatorSize::Mm420),
            _ => Err(format!("Unknown radiator size: {s}")),
        }
    }
}

/// Operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OsFamily {
    Windows,
    Linux,
}

impl OsFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            OsFamily::Windows => "Windows",
            OsFamily::Linux => "Linux",
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OsFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match squash(s).as_str() {
            "WINDOWS" => Ok(OsFamily::Windows),
            "LINUX" => Ok(OsFamily::Linux),
            _ => Err(format!("Unknown OS family: {s}")),
        }
    }
}

/// Windows edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OsSeries {
    Home,
    Pro,
}

impl OsSeries {
    pub fn as_str(&self) -> &'static str {
        match self {
            OsSeries::Home => "Home",
            OsSeries::Pro => "Pro",
        }
    }
}

impl fmt::Display for OsSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OsSeries {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match squash(s).as_str() {
            "HOME" => Ok(OsSeries::Home),
            "PRO" | "PROFESSIONAL" => Ok(OsSeries::Pro),
            _ => Err(format!("Unknown OS series: {s}")),
        }
    }
}

/// Render a list of displayable values as "A, B, C".
pub fn join_display<T: fmt::Display>(values: impl IntoIterator<Item = T>) -> String {
    values
        .into_iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
