// Business domains
pub mod access;
pub mod export;
pub mod geophysics;
