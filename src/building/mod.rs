mod category;
mod room;

pub use category::UseCategory;
pub use room::Room;
