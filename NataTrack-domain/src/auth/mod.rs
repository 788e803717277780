// Identity provider boundary
pub mod session;

pub use session::{greeting_name, Session};
