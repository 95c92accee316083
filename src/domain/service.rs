use super::brand::Brand;

/// Services a quote can be requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    SolarInstallation,
    BatteryStorage,
    EvCharging,
    EnergyAudit,
    Maintenance,
    VideoProduction,
    Photography,
    SocialMedia,
    Branding,
    WebDesign,
}

impl ServiceType {
    pub const ALL: [ServiceType; 10] = [
        Self::SolarInstallation,
        Self::BatteryStorage,
        Self::EvCharging,
        Self::EnergyAudit,
        Self::Maintenance,
        Self::VideoProduction,
        Self::Photography,
        Self::SocialMedia,
        Self::Branding,
        Self::WebDesign,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::SolarInstallation => "solar-installation",
            Self::BatteryStorage => "battery-storage",
            Self::EvCharging => "ev-charging",
            Self::EnergyAudit => "energy-audit",
            Self::Maintenance => "maintenance",
            Self::VideoProduction => "video-production",
            Self::Photography => "photography",
            Self::SocialMedia => "social-media",
            Self::Branding => "branding",
            Self::WebDesign => "web-design",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SolarInstallation => "Solar Installation",
            Self::BatteryStorage => "Battery Storage",
            Self::EvCharging => "EV Charging",
            Self::EnergyAudit => "Energy Audit",
            Self::Maintenance => "Maintenance & Repairs",
            Self::VideoProduction => "Video Production",
            Self::Photography => "Photography",
            Self::SocialMedia => "Social Media Management",
            Self::Branding => "Branding",
            Self::WebDesign => "Web Design",
        }
    }

    /// The brand that delivers this service.
    pub fn brand(&self) -> Brand {
        match self {
            Self::SolarInstallation
            | Self::BatteryStorage
            | Self::EvCharging
            | Self::EnergyAudit
            | Self::Maintenance => Brand::Energy,
            _ => Brand::Media,
        }
    }
}

impl TryFrom<String> for ServiceType {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|s| s.slug() == value)
            .ok_or_else(|| {
                let slugs: Vec<_> = Self::ALL.iter().map(|s| s.slug()).collect();
                format!("must be one of: {}", slugs.join(", "))
            })
    }
}
