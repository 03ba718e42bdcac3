use anyhow::Result;

use super::CommandContext;
use crate::graphql::{build_schema, run_server};

pub fn handle_serve(ctx: CommandContext, port: Option<u16>, host: Option<String>) -> Result<()> {
    let schema = build_schema();
    let port = port.unwrap_or(ctx.config.server.port);
    let host = host.unwrap_or(ctx.config.server.host);

    println!("Starting GraphQL server on http://{}:{}", host, port);
    println!("GraphiQL: http://{}:{}/  (endpoint /graphql)", host, port);

    tokio::runtime::Runtime::new()?.block_on(async { run_server(schema, &host, port).await })?;
    Ok(())
}
