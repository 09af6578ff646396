//! GigaChat demo — list models, unary chat, streaming chat.
//!
//! Configuration comes from the environment:
//!   API_HOST        gRPC host of the API (required)
//!   GIGA_API_KEY    Base64 API key for the token endpoint (required)
//!   RQ_UID          request-tracking identifier (required)
//!   CERT_PATH       PEM trust anchor, defaults to cert.pem
//!
//! Usage:
//!   API_HOST=... GIGA_API_KEY=... RQ_UID=... cargo run --bin gigachat-demo
//!
//! Each demo call is reported individually so one failing operation does not
//! abort the others.

use gigachat_client::{ChatOptions, GigaChatClient, Message};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Fails before any network call when a required setting is absent.
    let client = GigaChatClient::from_env().await?;

    list_models_example(&client).await;
    chat_example(&client).await;
    stream_example(&client).await;
    custom_stream_example(&client).await;

    Ok(())
}

async fn list_models_example(client: &GigaChatClient) {
    match client.list_models().await {
        Ok(models) => {
            println!("Available models:");
            for model in models {
                println!("- {} (owned by {})", model.id, model.owned_by);
            }
        }
        Err(e) => eprintln!("Failed to list models: {e}"),
    }
}

async fn chat_example(client: &GigaChatClient) {
    let messages = vec![Message::user("Hello! Tell me about yourself.")];
    let options = ChatOptions {
        temperature: Some(0.5),
        max_tokens: Some(1000),
        ..Default::default()
    };

    match client.send_message(messages, options).await {
        Ok(response) => {
            if let Some(alt) = response.alternatives.first() {
                let content = alt.message.as_ref().map(|m| m.content.as_str()).unwrap_or("");
                println!("\nResponse text: {content}");
            }
            if let Some(usage) = response.usage {
                println!("Usage: {} total tokens", usage.total_tokens);
            }
        }
        Err(e) => eprintln!("Failed to send message: {e}"),
    }
}

async fn stream_example(client: &GigaChatClient) {
    let messages = vec![Message::user(
        "Write a five-line poem about programming",
    )];
    let options = ChatOptions {
        temperature: Some(0.8),
        max_tokens: Some(200),
        ..Default::default()
    };

    println!("\nGenerating a streamed response:");
    match client.send_message_stream(messages, options).await {
        Ok(full_text) => println!("Full response saved, length: {}", full_text.len()),
        Err(e) => eprintln!("Streaming failed: {e}"),
    }
}

async fn custom_stream_example(client: &GigaChatClient) {
    let messages = vec![Message::user("Briefly describe the gRPC protocol")];

    println!("\nStreaming with a custom chunk handler:");
    let mut parts = 0usize;
    let result = client
        .send_message_stream_with(messages, ChatOptions::default(), |chunk| {
            parts += 1;
            print!("[part {parts}] {chunk}");
        })
        .await;

    match result {
        Ok(_) => println!("\n--- custom handler stream finished ({parts} parts) ---"),
        Err(e) => eprintln!("Streaming with custom handler failed: {e}"),
    }
}
