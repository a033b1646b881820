//! The quiz engine: shuffling, category-deduplicated sampling, grading,
//! and the session state machine. Everything here is pure and synchronous;
//! randomness always comes in through an injected `RngCore`.

mod grader;
mod sampler;
mod session;
mod shuffle;

pub use grader::grade;
pub use sampler::{sample, GeneratorFn, SampleError, Template, DEFAULT_MAX_ATTEMPTS};
pub use session::{Session, SessionError, SessionState, Summary, DEFAULT_QUIZ_LEN};
pub use shuffle::{shuffle_options, shuffled};
