//! Renders transcript messages as styled terminal text.

use actalon_core::conversation::{Author, Message};
use actalon_core::format::{self, Block, Span};
use owo_colors::OwoColorize;

const BAR_CHAR: &str = "▎";

/// Prints one transcript message, block by block.
pub fn print_message(message: &Message) {
    let who = match message.author() {
        Author::User => "Vous",
        Author::Assistant => "Assistant",
    };
    let time = message.timestamp().format("%H:%M");
    println!("{}", format!("{who} · {time}").dimmed());

    let bar = if message.is_failure() {
        BAR_CHAR.bright_yellow().to_string()
    } else {
        match message.author() {
            Author::User => BAR_CHAR.dimmed().to_string(),
            Author::Assistant => BAR_CHAR.bright_cyan().to_string(),
        }
    };

    for block in format::message_blocks(message.author(), message.text()) {
        match block {
            Block::Heading(spans) => {
                println!("{bar}{}", join_spans(&spans).bold().underline());
            }
            Block::Bullet(spans) => {
                println!("{bar}  {} {}", "•".bright_yellow(), style_spans(&spans));
            }
            Block::Paragraph(spans) => {
                // User paragraphs keep their embedded line breaks.
                let text = style_spans(&spans);
                for line in text.split('\n') {
                    println!("{bar}{line}");
                }
            }
            Block::Spacer => println!("{bar}"),
        }
    }
    println!();
}

fn style_spans(spans: &[Span]) -> String {
    let mut out = String::new();
    for span in spans {
        match span {
            Span::Plain(text) => out.push_str(text),
            Span::Emphasis(text) => {
                out.push_str(&text.bold().to_string());
            }
        }
    }
    out
}

fn join_spans(spans: &[Span]) -> String {
    spans.iter().map(Span::text).collect()
}
