pub mod models {
    pub mod conversion;
    pub mod error;
    pub mod execution;
    pub mod shader;
}

pub mod service {
    pub mod config_service;
    pub mod executor;
    pub mod toolkit;
    pub mod workspace;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod facade {
    pub mod conversion_facade;
    pub mod traits {
        pub mod i_conversion;
    }
}

pub mod action {
    pub mod cli;
    pub mod interactive;
}

pub mod utils {
    pub mod utils;
}

pub use crate::config::ports::ToolkitConfig;
pub use crate::facade::conversion_facade::ConversionFacade;
pub use crate::facade::traits::i_conversion::ConversionFacadeTrait;
pub use crate::models::conversion::{ConversionRequest, ConversionResult};
pub use crate::models::error::ConvertError;
pub use crate::models::execution::ExecutionOutcome;
pub use crate::models::shader::ShaderKind;
pub use crate::service::executor::ShellExecutor;
pub use crate::service::traits::i_service::ExecutorServiceTrait;
