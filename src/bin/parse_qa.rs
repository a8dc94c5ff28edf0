use deepseek_chat::config::DeepseekConfig;
use deepseek_chat::errors::ChatError;
use deepseek_chat::qa::QuestionAnswerParser;

fn main() {
    dotenv::dotenv().ok();
    deepseek_chat::setup_logging();

    if let Err(e) = run() {
        println!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ChatError> {
    let config = DeepseekConfig::from_env()?;
    let parser = QuestionAnswerParser::new(config)?;

    let input_text = "Which is the longest river in the world? The Nile River.";
    let result = parser.parse_qa(input_text)?;

    println!("Input: {input_text}");
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
