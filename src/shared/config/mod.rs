pub mod model;

pub use model::{
    EngineConfig, InfluxConfig, InfluxCredentials, LoggingConfig, OrgRef, Settings,
    SettingsError, load_settings,
};
