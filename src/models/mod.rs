pub mod facts;
pub mod report;
pub mod request;
pub mod response;

pub use facts::*;
pub use report::*;
pub use request::*;
pub use response::*;
