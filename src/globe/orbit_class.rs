use strum_macros::{Display, EnumIter};

/// Globe sphere radius in scene units.
pub const GLOBE_RADIUS: f64 = 15.0;

/// Categorical orbit bucket for one satellite instance.
#[derive(Debug, Display, EnumIter, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OrbitClass {
    #[strum(serialize = "LEO")]
    Leo,
    #[strum(serialize = "MEO")]
    Meo,
    #[strum(serialize = "GEO")]
    Geo,
}

impl OrbitClass {
    /// Radius of the visual shell this class is placed on.
    pub fn shell_radius(self) -> f64 {
        match self {
            OrbitClass::Leo => GLOBE_RADIUS + 1.0,
            OrbitClass::Meo => GLOBE_RADIUS + 3.0,
            OrbitClass::Geo => GLOBE_RADIUS + 5.0,
        }
    }
}

/// Named dataset snapshot the globe can display.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq)]
pub enum DatasetEpoch {
    #[strum(serialize = "1980s")]
    Eighties,
    #[strum(serialize = "today")]
    Today,
}
