pub mod epoch;
mod model;
pub use self::model::CprStats;
pub use self::model::LocalStats;
pub use self::model::RemoteStats;
pub use self::model::StatsPayload;
pub use self::model::StatsRecord;
pub use self::model::TrackStats;

mod parser;
pub use self::parser::parse_stats;
pub use self::parser::ParseError;

pub(crate) mod test_data;
