pub mod factories;
pub mod factory;
pub mod fake_influx;
