use dotenvy::dotenv;
use gptlife_llm::{
    openrouter::{OpenRouterChatModel, OpenRouterChatModelOptions},
    ChatInput, ChatModel, ChatTurn,
};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let model = OpenRouterChatModel::new(
        "openai/gpt-oss-20b:free",
        OpenRouterChatModelOptions {
            api_key: std::env::var("OPENROUTER_API_KEY")
                .expect("OPENROUTER_API_KEY environment variable must be set"),
            ..Default::default()
        },
    );

    let response = model
        .complete(ChatInput {
            messages: vec![
                ChatTurn::system("You are a friendly habit coach."),
                ChatTurn::user("Give me one tip for building a reading habit."),
            ],
            temperature: Some(0.7),
            ..Default::default()
        })
        .await
        .unwrap();

    println!("{response:#?}");
}
