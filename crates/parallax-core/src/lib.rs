pub mod config;
pub mod constants;
pub mod layer;
pub mod markup;
pub mod page;
pub mod scroll;
pub mod style;
pub mod theme;
pub mod view;

pub use config::*;
pub use layer::*;
pub use page::*;
pub use scroll::*;
pub use view::*;
