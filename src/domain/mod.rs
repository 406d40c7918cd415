//! Domain layer of the demo server.
//!
//! Holds the work snapshot the `/app/web/work` endpoint answers from.

pub mod work_board;

pub use work_board::WorkBoard;
