// Library surface for embedding a quiz session in a host app.
// The session reports outward through the observer seam in `events`;
// nothing here renders, persists, or spawns threads.
pub mod events;
pub mod question;
pub mod session;
pub mod util;

pub use events::{ChannelObserver, NullObserver, SessionEvent, SessionObserver};
pub use question::Question;
pub use session::{QuizSession, SessionPhase};
