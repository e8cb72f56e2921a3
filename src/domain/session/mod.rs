//! Session module - the conversational stage machine.
//!
//! A `DecisionSession` is the per-conversation record the external
//! driver owns and passes in by `&mut`. Each user turn is one call to
//! [`DecisionSession::apply_input`]: the text is validated for the
//! current stage, appended to the dataset, and the stage advances. A
//! rejection leaves the stage unchanged so the driver can re-prompt.
//!
//! The engine itself holds no cross-call state; independent sessions
//! need no coordination.

mod errors;
mod session;
mod stage;

pub use errors::SessionError;
pub use session::{DecisionSession, Prompt, TurnOutcome};
pub use stage::Stage;
