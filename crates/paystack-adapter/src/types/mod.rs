/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Wire models for banks, transactions and the response envelope
[POS]:    Data layer - module wiring for API types
[UPDATE]: When adding a new model module
*/

pub mod enums;
pub mod models;
pub mod requests;
pub mod responses;

pub use enums::*;
pub use models::*;
pub use requests::*;
pub use responses::*;
