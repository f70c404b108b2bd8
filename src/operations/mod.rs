pub mod compliance;
pub mod sampling;
pub mod scan;
pub mod select;

pub use compliance::{ComplianceCheck, RaseCheck};
pub use sampling::SampleSegment;
pub use scan::{CorridorScan, EdgeWidth, ScanParams};
pub use select::{round_width, CorridorWidth, MinimumWidth};
