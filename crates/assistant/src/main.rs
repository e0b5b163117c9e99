//! Terminal chat front-end for the Actalon virtual assistant.

#[macro_use]
extern crate tracing;

mod render;

use std::env;
use std::io::Write as _;
use std::time::Duration;

use actalon_core::{AssistantBuilder, persona};
use actalon_gemini_model::{GeminiConfigBuilder, GeminiProvider};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tokio::io::{self, AsyncBufReadExt};
use tokio::select;
use tokio::time::sleep;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let Ok(api_key) = env::var("GEMINI_API_KEY") else {
        eprintln!("GEMINI_API_KEY environment variable is not set");
        return;
    };

    let mut config = GeminiConfigBuilder::with_api_key(api_key);
    if let Ok(model) = env::var("GEMINI_MODEL") {
        config = config.with_model(model);
    }
    if let Ok(base_url) = env::var("GEMINI_BASE_URL") {
        config = config.with_base_url(base_url);
    }
    let provider = GeminiProvider::new(config.build());

    let assistant = AssistantBuilder::with_provider(provider)
        .with_temperature(persona::DEFAULT_TEMPERATURE)
        .with_greeting(persona::WELCOME)
        .build();

    println!("{}", "Assistant Actalon".bold());
    println!("{}", "Réponses instantanées 24/7".dimmed());
    println!();
    for message in assistant.transcript() {
        render::print_message(&message);
    }
    print_suggestions(assistant.suggestions());

    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");

    loop {
        print!("> ");
        std::io::stdout().flush().unwrap();

        let Some(line) = read_line().await else {
            break;
        };
        let line = line.trim();

        // A bare number picks the matching suggested prompt.
        let input = match line
            .parse::<usize>()
            .ok()
            .and_then(|n| assistant.suggestions().get(n.wrapping_sub(1)))
        {
            Some(prompt) => {
                println!("{}", prompt.italic());
                (*prompt).to_owned()
            }
            None => line.to_owned(),
        };

        let progress_bar = ProgressBar::new_spinner();
        progress_bar.set_style(progress_style.clone());
        progress_bar.set_message("L'assistant rédige...");

        let submit = assistant.submit(&input);
        tokio::pin!(submit);
        let reply = loop {
            progress_bar.inc(1);
            select! {
                reply = &mut submit => break reply,
                _ = sleep(Duration::from_millis(100)) => {}
            }
        };
        progress_bar.finish_and_clear();

        if let Some(message) = reply {
            render::print_message(&message);
        }
    }

    println!();
    println!(
        "{}",
        "L'assistant fournit des informations générales. Pour un conseil \
         personnalisé, veuillez prendre rendez-vous."
            .dimmed()
    );
}

fn print_suggestions(suggestions: &[&str]) {
    println!("{}", "Questions fréquentes :".dimmed());
    for (idx, prompt) in suggestions.iter().enumerate() {
        println!("  {} {prompt}", format!("{}.", idx + 1).dimmed());
    }
    println!();
}

async fn read_line() -> Option<String> {
    let mut stdin = io::BufReader::new(io::stdin());
    let mut line = String::new();

    match stdin.read_line(&mut line).await {
        Ok(count) => {
            if count == 0 {
                return None;
            }
            Some(line)
        }
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}
