//! Terminal presentation: banner, boxes, colors and the progress indicator.

mod banner;
mod boxed;
mod spinner;
mod style;

pub use banner::{BannerOptions, render_banner};
pub use boxed::{Align, BorderStyle, BoxOptions, render_box};
pub use spinner::{IndicatorError, IndicatorState, IndicatorSummary, PALETTE, ProgressIndicator};
pub use style::{Style, colorize, colorize_dimmed, parse_color};
