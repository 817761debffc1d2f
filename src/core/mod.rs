pub mod config;
pub mod edit_state;
pub mod highlighter;
pub mod length;
pub mod record_list;
pub mod session;

pub use edit_state::EditState;
pub use highlighter::{RecencyHighlighter, Tick};
pub use session::{FormFields, FormSession, SubmitOutcome};
