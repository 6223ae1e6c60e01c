mod astronauts;
mod timeline;

pub use astronauts::AstronautPanel;
pub use timeline::TimelinePanel;
