pub mod code;
pub mod detect;

pub use code::Lang;
pub use detect::detect;
