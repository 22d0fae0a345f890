pub mod client_service;
pub mod functional_patterns;
pub mod policy_service;
