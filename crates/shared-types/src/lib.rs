pub mod config;
pub mod error;
pub mod icon;
pub mod locale;
pub mod preferences;
pub mod role;
pub mod section;
pub mod shell;
pub mod sidebar;

pub use config::*;
pub use error::*;
pub use icon::*;
pub use locale::*;
pub use preferences::*;
pub use role::*;
pub use section::*;
pub use shell::*;
pub use sidebar::*;
