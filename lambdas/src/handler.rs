use lambda_http::{Request, Response};

use crate::common::errors::Error;
use crate::gateway::PersistenceGateway;
use crate::record::Record;
use crate::store::RecordStore;

/// Records the request headers and answers `200 successful` or
/// `500 error`. Only a failure to build the response itself is an `Err`.
#[tracing::instrument(skip_all)]
pub async fn process_request<S: RecordStore>(
    request: Request,
    gateway: &PersistenceGateway<S>,
) -> Result<Response<String>, Error> {
    let record = Record::from_request(&request);

    gateway.persist(&record).await.into_response()
}
