pub mod config;
pub mod root_build_file;
pub mod wrapper_paths;

// Re-export the step types for convenience
pub use config::StepConfig;
pub use root_build_file::RootBuildFile;
pub use wrapper_paths::WrapperPaths;
