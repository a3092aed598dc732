//! dashcoch's visualization library.
//!
//! Turns dashboard payloads and user-interface selections into Plotly chart
//! descriptions. The callbacks never fail on odd data: missing tables, regions
//! or dates show up as empty series and nulls in the returned [figure::Figure].

#![warn(missing_docs)]

pub(crate) mod template;

pub mod axes;
pub mod error;
pub mod figure;
pub mod hover;
pub mod map;
pub mod registry;
pub mod render;
pub mod selection;
pub mod text;
pub mod trend;
