//! status-icons: toolbar status icon generator
//!
//! This crate renders the small colored-dot PNG icons that browser
//! extensions show in the toolbar to signal a connection or activity state.
//! Each icon is a filled circle, inset by 10% of the side length, on a
//! transparent square canvas.
//!
//! # Example
//!
//! ```no_run
//! use status_icons::{generate_all, IconProfile};
//!
//! // Writes icons/icon-{inactive,connected,error}-{16,48,128}.png
//! let report = generate_all(&IconProfile::watch_party())?;
//! println!("wrote {} icons", report.written_count());
//! # Ok::<(), status_icons::Error>(())
//! ```
//!
//! Single icons can be rendered in memory:
//!
//! ```
//! use status_icons::{render_circle, Color};
//!
//! let icon = render_circle(16, Color::ERROR).unwrap();
//! assert_eq!(icon.data.get_pixel(8, 8).0, [255, 0, 0, 255]);
//! assert_eq!(icon.data.get_pixel(0, 0).0, [0, 0, 0, 0]);
//! ```

mod color;
mod error;
mod generator;
mod icon;
mod profile;

pub use color::Color;
pub use error::{Error, Result};
pub use generator::{generate_all, GenerationReport, IconFailure};
pub use icon::{
    circle_bounds, padding_for, render_circle, render_icon, IconImage, IconSpec, RectPx, SizePx,
};
pub use profile::{
    Exclusion, IconProfile, Preset, StatusColor, DEFAULT_OUTPUT_DIR, DEFAULT_PREFIX,
    DEFAULT_SIZES,
};
