//! Wirecall CLI - invoke JSON-RPC methods from the command line

use anyhow::Result;
use serde_json::Value;
use tracing_subscriber::EnvFilter;
use wirecall_client::{ClientError, RpcClient};
use wirecall_rpc::ProtocolVersion;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("wirecall=info".parse()?))
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_help();
        return Ok(());
    }

    let command = &args[1];

    match command.as_str() {
        "help" | "--help" | "-h" => print_help(),
        "call" => {
            if args.len() < 3 {
                eprintln!("Usage: wirecall-cli call <method> [args...]");
                std::process::exit(2);
            }
            call(&args[2], &args[3..]).await?;
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_help();
        }
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"Wirecall CLI - JSON-RPC method invocation

USAGE:
    wirecall-cli call <method> [args...]

Arguments that parse as JSON are sent as-is; anything else is sent
as a string.

ENVIRONMENT:
    WIRECALL_ENDPOINT   Server URL, may embed basic-auth credentials
                        (default: http://127.0.0.1:8332)
    WIRECALL_VERSION    Protocol dialect: 1.0, 1.1 or 2.0 (default: 2.0)

EXAMPLES:
    wirecall-cli call getblockcount
    wirecall-cli call getaccount 1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa
    WIRECALL_VERSION=1.1 wirecall-cli call getbalance myaccount 6
"#
    );
}

async fn call(method: &str, raw_args: &[String]) -> Result<()> {
    let client = connect()?;
    let args: Vec<Value> = raw_args.iter().map(|raw| parse_arg(raw)).collect();

    match client.invoke(method, &args).await {
        Ok(result) => println!("{}", serde_json::to_string_pretty(&result)?),
        Err(ClientError::Rpc { message, payload }) => {
            println!("Got an error: {}: {}", message, payload);
            std::process::exit(1);
        }
        Err(other) => return Err(other.into()),
    }

    Ok(())
}

/// Arguments that parse as JSON go over the wire typed; the rest are strings.
fn parse_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn connect() -> Result<RpcClient> {
    let endpoint = std::env::var("WIRECALL_ENDPOINT")
        .unwrap_or_else(|_| "http://127.0.0.1:8332".to_string());
    let version = match std::env::var("WIRECALL_VERSION") {
        Ok(raw) => raw.parse::<ProtocolVersion>()?,
        Err(_) => ProtocolVersion::default(),
    };
    Ok(RpcClient::with_version(&endpoint, version)?)
}
