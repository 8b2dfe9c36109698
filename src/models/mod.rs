pub mod company;
pub mod config;
pub mod request;

pub use company::CompanyProfile;
pub use config::{AppConfig, FramerConfig, ServiceConfig};
pub use request::{
    AnalyzeRequest, ComposeRequest, ImageSource, LogoAnalysis, NamedColor, PlatformSize,
};
