pub mod body;
pub mod fetch;
pub mod response;

pub use body::BodyAccumulator;
pub use fetch::fetch_streaming;
pub use response::ProbeResponse;
