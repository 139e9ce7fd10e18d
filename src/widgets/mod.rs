//! Fixed UI elements around the thermal image.
//!
//! - [`sidebar`]: max/ave/min numeric readout in the left strip
//! - [`status`]: transient status text flashed over the image area
//!
//! Both follow the same rule as the image grid: the display is only touched
//! when something actually changed.

pub mod sidebar;
pub mod status;

pub use sidebar::Sidebar;
pub use status::flash_status;
