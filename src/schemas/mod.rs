pub mod validator;

pub use validator::{trip_request_schema, RequestValidator};
