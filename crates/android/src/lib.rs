//! # wrapgen-android
//!
//! Android/Gradle specifics of wrapper provisioning: locating the root
//! build file of a (possibly multi-module) project, generating the wrapper
//! either through a local Gradle installation or from the Android SDK's
//! bundled template, accepting the SDK licenses that template generation
//! requires, and fetching Gradle distribution archives.

pub mod distribution;
pub mod finder;
pub mod licenses;
pub mod properties;
pub mod sdk;
pub mod wrapper;

pub use finder::filter_root_build_files;
pub use properties::rewrite_distribution_url;
pub use sdk::AndroidSdk;
