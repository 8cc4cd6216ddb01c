pub mod influx;

pub use influx::InfluxClient;
