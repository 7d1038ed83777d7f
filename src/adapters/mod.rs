// Adapters layer: concrete implementations of the domain ports (clock, console, randomness).

pub mod clock;
pub mod console;
pub mod random;
pub mod testing;

pub use clock::TokioClock;
pub use console::StdConsole;
pub use random::StdRandom;
