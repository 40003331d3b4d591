mod input;

pub use input::{ControlScheme, Controls, InputTranslator};
