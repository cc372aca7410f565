use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use tracing::info;

use crate::common::errors::StoreError;
use crate::record::Record;

/// Keyed write access to the table records end up in.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Unconditionally writes `record` under its id, replacing any item
    /// already stored with that id.
    async fn put(&self, table_name: &str, record: &Record) -> Result<(), StoreError>;
}

#[async_trait]
impl<S: RecordStore + ?Sized> RecordStore for Arc<S> {
    async fn put(&self, table_name: &str, record: &Record) -> Result<(), StoreError> {
        (**self).put(table_name, record).await
    }
}

#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: aws_sdk_dynamodb::Client,
}

impl DynamoDbStore {
    pub fn new(client: aws_sdk_dynamodb::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecordStore for DynamoDbStore {
    async fn put(&self, table_name: &str, record: &Record) -> Result<(), StoreError> {
        let response = self
            .client
            .put_item()
            .table_name(table_name)
            .set_item(Some(record.clone().into()))
            .send()
            .await
            .map_err(|err| StoreError::new(table_name, DisplayErrorContext(&err)))?;

        info!("dynamo_client::put_item response: {:?}", response);

        Ok(())
    }
}
