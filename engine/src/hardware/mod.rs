mod clock;
mod io;
mod pins;

pub use clock::{Clock, SystemClock};
pub use io::CabinetIo;
pub use pins::{INPUT_CHANNELS, InputBank, InputChannel, Level, OutputPin, Port};
