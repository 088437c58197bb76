mod order;
mod position;
mod session;
mod ticker;

pub use order::{Order, OrderDraft, OrderId, OrderStatus, OrderType, Side};
pub use position::Position;
pub use session::Session;
pub use ticker::Ticker;
