//! Operations that drive the SDK collaborators

pub mod install;
