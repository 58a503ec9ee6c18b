/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public tasklist client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod panel;
pub mod render;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Result,
    TasklistClient,
    TasklistError,
};

// Re-export the panel facade
pub use panel::{PanelSurface, TaskPanel};

// Re-export the rendering projection
pub use render::{render_lines, task_line};

// Re-export all types
pub use types::*;
