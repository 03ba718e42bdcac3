use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::{get, post_service},
};

use super::FolioSchema;
use crate::error::Result;

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// GraphiQL on `GET /`, GraphQL on `POST /graphql`.
pub fn app(schema: FolioSchema) -> Router {
    Router::new()
        .route("/", get(graphiql))
        .route("/graphql", post_service(GraphQL::new(schema)))
}

pub async fn run_server(schema: FolioSchema, host: &str, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!(%host, port, "serving GraphQL");
    axum::serve(listener, app(schema)).await?;
    Ok(())
}
