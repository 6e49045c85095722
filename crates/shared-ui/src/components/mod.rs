// Leaf components
pub mod button;
pub mod footer;
pub mod icon;
pub mod page_header;

// Shell chrome: depends on button and icon
pub mod header;
pub mod sidebar;

pub use button::*;
pub use footer::*;
pub use header::*;
pub use icon::*;
pub use page_header::*;
pub use sidebar::*;
