pub mod answer;
pub mod catalog;
pub mod envelope;
pub mod groups;
pub mod hint;

pub use answer::*;
pub use catalog::*;
pub use envelope::*;
pub use groups::*;
pub use hint::*;
