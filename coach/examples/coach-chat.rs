use dotenvy::dotenv;
use gptlife_coach::{AppState, Coach, CoachSession, Config};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = Config::from_env().expect("provider configuration must be set");
    let coach = Coach::builder(Arc::new(config.build_model())).build();
    let mut session = CoachSession::new(coach, AppState::with_sample_data());

    let reply = session.send("Add a new habit to read 10 pages a day").await;
    println!("coach: {}", reply.content);

    let state = session.state();
    println!("habits: {}", state.habits().len());
    println!("completion rate: {}%", state.completion_rate());
    println!("longest streak: {}", state.longest_streak());
}
