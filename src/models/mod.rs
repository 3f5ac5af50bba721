pub mod request_example;

pub use request_example::{
    DEFAULT_ENDPOINT, Method, PLACEHOLDER_API_KEY, RequestExample, ServicePayload,
};
