//! Minimal interactive chat against Novita AI.
//!
//! ```bash
//! NOVITA_API_KEY=... cargo run --example chat -- meta-llama/llama-3.1-8b-instruct
//! NOVITA_API_KEY=... cargo run --example chat -- deepseek/deepseek_v3 --coder
//! ```

use novita_chat::{InterfaceOptions, registry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let model = args
        .iter()
        .find(|arg| !arg.starts_with("--"))
        .cloned()
        .unwrap_or_else(|| "meta-llama/llama-3.1-8b-instruct".to_string());
    let coder = args.iter().any(|arg| arg == "--coder");

    let options = InterfaceOptions::new()
        .with_title(format!("novita-chat ({model})"))
        .with_description("type a message, or `exit` to quit");

    let mut interface = registry(&model, None, coder, options)?;
    interface.launch().await?;
    Ok(())
}
