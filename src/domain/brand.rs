use super::email::EmailAddress;

/// The two sites served by this backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brand {
    Energy,
    Media,
}

impl TryFrom<String> for Brand {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "energy" => Ok(Self::Energy),
            "media" => Ok(Self::Media),
            _ => Err("must be one of: energy, media".into()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BrandProfile {
    pub display_name: String,
    pub inbox: EmailAddress,
}

impl BrandProfile {
    pub fn new(display_name: String, inbox: EmailAddress) -> Self {
        Self {
            display_name,
            inbox,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BrandDirectory {
    energy: BrandProfile,
    media: BrandProfile,
}

impl BrandDirectory {
    pub fn new(energy: BrandProfile, media: BrandProfile) -> Self {
        Self { energy, media }
    }

    pub fn get(&self, brand: Brand) -> &BrandProfile {
        match brand {
            Brand::Energy => &self.energy,
            Brand::Media => &self.media,
        }
    }
}
