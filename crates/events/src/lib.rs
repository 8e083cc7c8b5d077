//! UI events and the rate-limiting gates that sit between a host page's
//! event listeners and the handlers they drive.
//!
//! Every gate takes the current time explicitly. Nothing here spawns timers
//! or threads: the host calls `poll`/`fire` from its own timer callbacks.

pub mod debounce;
pub mod event;
pub mod throttle;
pub mod timer;

pub use debounce::Debouncer;
pub use event::UiEvent;
pub use throttle::FrameThrottle;
pub use timer::Timer;
