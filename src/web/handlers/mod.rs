pub mod candidate_handlers;
pub mod screening_handlers;
pub mod search_handlers;
pub mod system_handlers;

pub use candidate_handlers::*;
pub use screening_handlers::*;
pub use search_handlers::*;
pub use system_handlers::*;
