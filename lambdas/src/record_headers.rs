use aws_config::BehaviorVersion;
use lambda_http::{run, service_fn, Error as LambdaError, Request as LambdaRequest};

use header_recorder::config::Config;
use header_recorder::gateway::PersistenceGateway;
use header_recorder::handler::process_request;
use header_recorder::store::DynamoDbStore;

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .without_time() // CloudWatch will add the ingestion time
        .with_target(false)
        .init();

    let config = Config::from_env()?;

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let dynamo_client = aws_sdk_dynamodb::Client::new(&aws_config);
    let gateway = PersistenceGateway::new(DynamoDbStore::new(dynamo_client), config.table_name);
    let gateway = &gateway;

    run(service_fn(move |request: LambdaRequest| async move {
        process_request(request, gateway)
            .await
            .map_err(LambdaError::from)
    }))
    .await
}
