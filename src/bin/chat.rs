use deepseek_chat::chat::ChatClient;
use deepseek_chat::config::DeepseekConfig;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    deepseek_chat::setup_logging();

    let config = DeepseekConfig::from_env()?;
    let client = ChatClient::new(config)?;

    let prompt = "What is artificial intelligence?";
    let response = client.chat(prompt);

    println!("Prompt: {prompt}");
    println!("Response: {response}");

    Ok(())
}
