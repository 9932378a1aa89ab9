pub mod dispatch;
pub mod import;
pub mod languages;
pub mod situation;
pub mod situations;
