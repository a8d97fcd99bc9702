//! Game logic
//!
//! Hint scheduling, the session state machine, share text and daily
//! persistence. Nothing here touches the terminal.

pub mod clock;
pub mod config;
pub mod hints;
pub mod persist;
pub mod session;
pub mod share;

pub use clock::{Clock, FixedClock, SystemClock, Ticker};
pub use config::{DEFAULT_SHARE_URL, GameConfig, MAX_GUESSES};
pub use hints::{DEFINITION_SLOTS, HintPolicy, HintProgress, HintUsage, censor};
pub use persist::{
    FileStore, KeyValueStore, MemoryStore, NullStore, SavedState, restore, resume, save,
};
pub use session::{GameStatus, Session, Submission};
pub use share::{emoji_row, share_text, share_url};
