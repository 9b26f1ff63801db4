pub mod calc_client;
pub use calc_client::CalcClient;
pub mod endpoint;
pub use endpoint::Endpoint;
pub mod error;
pub mod results;
pub use results::{CalcResults, ResultField, is_error_flag};
pub mod traits;
pub use traits::CalcApi;
