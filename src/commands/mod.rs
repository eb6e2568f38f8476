//! Command implementations for the ohsdk CLI

pub mod install;
