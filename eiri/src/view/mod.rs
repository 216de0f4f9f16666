mod detail;
mod map_marker;
mod ranking;
mod readiness_tier;
mod scatter;

pub use detail::{DetailPanel, DetailView, ScoreBand};
pub use map_marker::{build_markers, markers_to_geojson, MapMarker};
pub use ranking::{top_n, RankField, RankedEntry, Rankings};
pub use readiness_tier::{marker_radius, ReadinessTier};
pub use scatter::{scatter_points, ScatterPoint};
