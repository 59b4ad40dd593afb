//! Send-message demo against a real Letta deployment
//!
//! Sends one user message to an agent and prints the per-item output
//! records the host runtime would receive.
//!
//! Run with:
//!   cargo run --example send_message_demo -- <api-token> <agent-id> [base-url]

use anyhow::{bail, Result};
use letta_node::{
    node, HttpClient, LettaCredentials, MessageRole, SendMessageOptions, SendMessageParams,
    StaticCredentials,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "letta_node=debug".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(api_token), Some(agent_id)) = (args.next(), args.next()) else {
        bail!("usage: send_message_demo <api-token> <agent-id> [base-url]");
    };

    let credentials = match args.next() {
        Some(base_url) => LettaCredentials::new(base_url, api_token),
        None => LettaCredentials::for_token(api_token),
    };
    credentials.validate()?;

    let dispatcher = HttpClient::new()?;
    println!("Verifying credentials against {}...", credentials.endpoint_base());
    dispatcher.verify_credentials(&credentials).await?;
    println!("Credentials OK\n");

    let resolver = StaticCredentials::new(node::CREDENTIAL_PROFILE, credentials);
    let items = vec![SendMessageParams {
        agent_id,
        role: MessageRole::User,
        message: "Hello! What do you remember about me?".to_string(),
        additional_options: SendMessageOptions::default()
            .with_max_steps(10)
            .with_return_message_types(["reasoning", "function_call"]),
    }];

    let records = node::execute(&dispatcher, &resolver, "sendMessage", &items, false).await?;

    for record in &records {
        println!("--- item {} ---", record.paired_item.item);
        println!("{}", serde_json::to_string_pretty(&record.json)?);
    }

    Ok(())
}
