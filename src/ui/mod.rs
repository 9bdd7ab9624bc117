pub mod panel;
pub mod status;

pub use panel::{DisplayBlock, Row, Tone};
pub use status::{render_error, render_overview, render_sequential_thinking_status};
