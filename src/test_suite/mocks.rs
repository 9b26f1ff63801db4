use crate::api::error::ClientError;
use crate::api::{CalcApi, CalcResults, Endpoint};
use mockall::mock;

mock! {
    pub(crate) Calculator {}

    impl CalcApi for Calculator {
        fn calculate(&self, endpoint: Endpoint, date: &str) -> Result<CalcResults, ClientError>;
    }
}
