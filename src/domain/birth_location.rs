/// Separator between city and district, a full-width comma.
pub const LOCATION_SEPARATOR: char = '，';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthLocation {
    city: String,
    district: String,
}

impl BirthLocation {
    pub fn new(city: String, district: String) -> Self {
        Self { city, district }
    }
}

impl std::fmt::Display for BirthLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.city, LOCATION_SEPARATOR, self.district)
    }
}

impl serde::Serialize for BirthLocation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
