pub mod export;
pub mod maintain;
pub mod rename;
