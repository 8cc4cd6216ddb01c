pub mod annotated_csv;
pub mod client;
pub mod flux;

pub use client::InfluxClient;

#[cfg(test)]
mod flux_test;
