mod junction_type;
mod road_role;
mod speed_source;

pub use junction_type::JunctionType;
pub use road_role::RoadRole;
pub use speed_source::SpeedSource;
