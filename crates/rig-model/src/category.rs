//! Part categories and selection slots.
//!
//! A [`Category`] classifies catalog rows. A [`Slot`] is a named position in a
//! build; every slot accepts exactly one category, but the OS category has two
//! slots so a dual-boot build can carry a secondary operating system.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog category of a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cpu,
    Motherboard,
    Gpu,
    Ram,
    Storage,
    Cooler,
    Psu,
    Cabinet,
    Monitor,
    Keyboard,
    Mouse,
    Combo,
    Os,
}

impl Category {
    /// Every category, in configurator display order.
    pub const ALL: [Category; 13] = [
        Category::Cpu,
        Category::Motherboard,
        Category::Gpu,
        Category::Ram,
        Category::Storage,
        Category::Cooler,
        Category::Psu,
        Category::Cabinet,
        Category::Monitor,
        Category::Keyboard,
        Category::Mouse,
        Category::Combo,
        Category::Os,
    ];

    /// Returns the canonical lowercase key used in catalog rows.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cpu => "cpu",
            Category::Motherboard => "motherboard",
            Category::Gpu => "gpu",
            Category::Ram => "ram",
            Category::Storage => "storage",
            Category::Cooler => "cooler",
            Category::Psu => "psu",
            Category::Cabinet => "cabinet",
            Category::Monitor => "monitor",
            Category::Keyboard => "keyboard",
            Category::Mouse => "mouse",
            Category::Combo => "combo",
            Category::Os => "os",
        }
    }

    /// Returns a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Cpu => "CPU",
            Category::Motherboard => "Motherboard",
            Category::Gpu => "GPU",
            Category::Ram => "RAM",
            Category::Storage => "Storage",
            Category::Cooler => "Cooler",
            Category::Psu => "PSU",
            Category::Cabinet => "Cabinet",
            Category::Monitor => "Monitor",
            Category::Keyboard => "Keyboard",
            Category::Mouse => "Mouse",
            Category::Combo => "Keyboard & Mouse Combo",
            Category::Os => "Operating System",
        }
    }

    /// Returns true for the components that draw power inside the chassis.
    ///
    /// Any of these being selected turns on the PSU safety buffer.
    pub fn is_core(&self) -> bool {
        matches!(
            self,
            Category::Cpu
                | Category::Gpu
                | Category::Motherboard
                | Category::Ram
                | Category::Storage
                | Category::Cooler
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Parse a category key (case-insensitive).
    /// Accepts a few common aliases seen in inventory exports.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "cpu" | "processor" => Ok(Category::Cpu),
            "motherboard" | "mobo" => Ok(Category::Motherboard),
            "gpu" | "graphics card" => Ok(Category::Gpu),
            "ram" | "memory" => Ok(Category::Ram),
            "storage" => Ok(Category::Storage),
            "cooler" => Ok(Category::Cooler),
            "psu" | "power supply" => Ok(Category::Psu),
            "cabinet" | "case" => Ok(Category::Cabinet),
            "monitor" => Ok(Category::Monitor),
            "keyboard" => Ok(Category::Keyboard),
            "mouse" => Ok(Category::Mouse),
            "combo" => Ok(Category::Combo),
            "os" | "operating system" => Ok(Category::Os),
            _ => Err(format!("Unknown category: {s}")),
        }
    }
}

/// One named position in a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Slot {
    Cpu,
    Motherboard,
    Gpu,
    Ram,
    Storage,
    Cooler,
    Psu,
    Cabinet,
    Monitor,
    Keyboard,
    Mouse,
    Combo,
    OsPrimary,
    OsSecondary,
}

impl Slot {
    pub const COUNT: usize = 14;

    /// Every slot, in configurator display order.
    pub const ALL: [Slot; Slot::COUNT] = [
        Slot::Cpu,
        Slot::Motherboard,
        Slot::Gpu,
        Slot::Ram,
        Slot::Storage,
        Slot::Cooler,
        Slot::Psu,
        Slot::Cabinet,
        Slot::Monitor,
        Slot::Keyboard,
        Slot::Mouse,
        Slot::Combo,
        Slot::OsPrimary,
        Slot::OsSecondary,
    ];

    /// The category of part this slot accepts.
    pub fn category(&self) -> Category {
        match self {
            Slot::Cpu => Category::Cpu,
            Slot::Motherboard => Category::Motherboard,
            Slot::Gpu => Category::Gpu,
            Slot::Ram => Category::Ram,
            Slot::Storage => Category::Storage,
            Slot::Cooler => Category::Cooler,
            Slot::Psu => Category::Psu,
            Slot::Cabinet => Category::Cabinet,
            Slot::Monitor => Category::Monitor,
            Slot::Keyboard => Category::Keyboard,
            Slot::Mouse => Category::Mouse,
            Slot::Combo => Category::Combo,
            Slot::OsPrimary | Slot::OsSecondary => Category::Os,
        }
    }

    /// The slot that holds the primary pick for a category.
    pub fn primary_for(category: Category) -> Slot {
        match category {
            Category::Cpu => Slot::Cpu,
            Category::Motherboard => Slot::Motherboard,
            Category::Gpu => Slot::Gpu,
            Category::Ram => Slot::Ram,
            Category::Storage => Slot::Storage,
            Category::Cooler => Slot::Cooler,
            Category::Psu => Slot::Psu,
            Category::Cabinet => Slot::Cabinet,
            Category::Monitor => Slot::Monitor,
            Category::Keyboard => Slot::Keyboard,
            Category::Mouse => Slot::Mouse,
            Category::Combo => Slot::Combo,
            Category::Os => Slot::OsPrimary,
        }
    }

    /// Attribute key used in the cart hand-off bag.
    pub fn key(&self) -> &'static str {
        match self {
            Slot::OsPrimary => "osPrimary",
            Slot::OsSecondary => "osSecondary",
            other => other.category().as_str(),
        }
    }

    /// Returns true if the slot takes part in compatibility predicates.
    ///
    /// The secondary OS only contributes to price.
    pub fn is_constrained(&self) -> bool {
        !matches!(self, Slot::OsSecondary)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Slot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "osprimary" | "os" => Ok(Slot::OsPrimary),
            "ossecondary" => Ok(Slot::OsSecondary),
            _ => s
                .parse::<Category>()
                .map(Slot::primary_for)
                .map_err(|_| format!("Unknown slot: {s}")),
        }
    }
}
