use std::fmt;
use std::str::FromStr;

/// Sections of the instance-info panel, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    System,
    Resources,
    Network,
    Runtime,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::System, Tab::Resources, Tab::Network, Tab::Runtime];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::System => "system",
            Tab::Resources => "resources",
            Tab::Network => "network",
            Tab::Runtime => "runtime",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::System => "System Information",
            Tab::Resources => "Resource Usage",
            Tab::Network => "Network Configuration",
            Tab::Runtime => "Runtime Information",
        }
    }

    /// Short label for the tab control.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::System => "System",
            Tab::Resources => "Resources",
            Tab::Network => "Network",
            Tab::Runtime => "Runtime",
        }
    }

    /// Instance-info fields shown in this section, in order.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Tab::System => &[
                "hostname", "platform", "platform_release", "architecture",
                "processor", "container_type", "cloud_provider",
            ],
            Tab::Resources => &[
                "cpu_cores", "cpu_threads", "cpu_usage", "cpu_frequency",
                "memory_total", "memory_used", "memory_usage", "memory_available",
            ],
            Tab::Network => &["private_ip", "public_ip", "network_interfaces"],
            Tab::Runtime => &[
                "uptime", "boot_time", "disk_total", "disk_used", "disk_free", "disk_usage",
            ],
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|t| t.id() == s.trim().to_lowercase())
            .ok_or_else(|| format!("unknown tab: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("network".parse::<Tab>(), Ok(Tab::Network));
        assert_eq!("Runtime".parse::<Tab>(), Ok(Tab::Runtime));
        assert!("disks".parse::<Tab>().is_err());
    }

    #[test]
    fn test_default_is_system() {
        assert_eq!(Tab::default(), Tab::System);
    }
}
