use lambda_http::http::StatusCode;
use lambda_http::Response;
use tracing::{error, info};

use crate::common::errors::{Error, StoreError};
use crate::common::utils::text_response;
use crate::common::{ERROR_BODY, SUCCESS_BODY};
use crate::config::TableName;
use crate::record::Record;
use crate::store::RecordStore;

/// Terminal state of a single write attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Persisted,
    Failed(StoreError),
}

impl Outcome {
    pub fn status(&self) -> StatusCode {
        match self {
            Outcome::Persisted => StatusCode::OK,
            Outcome::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            Outcome::Persisted => SUCCESS_BODY,
            Outcome::Failed(_) => ERROR_BODY,
        }
    }

    /// The failure detail never reaches the caller.
    pub fn into_response(self) -> Result<Response<String>, Error> {
        text_response(self.status(), self.body())
    }
}

pub struct PersistenceGateway<S> {
    store: S,
    table_name: TableName,
}

impl<S: RecordStore> PersistenceGateway<S> {
    pub fn new(store: S, table_name: TableName) -> Self {
        Self { store, table_name }
    }

    /// Writes `record` once. Store failures are logged and reported as
    /// [`Outcome::Failed`]; there is no retry.
    #[tracing::instrument(skip_all, fields(table_name = %self.table_name, id = %record.id()))]
    pub async fn persist(&self, record: &Record) -> Outcome {
        match self.store.put(self.table_name.as_str(), record).await {
            Ok(()) => {
                info!("Record persisted");
                Outcome::Persisted
            }
            Err(err) => {
                error!("{}", err);
                Outcome::Failed(err)
            }
        }
    }
}
