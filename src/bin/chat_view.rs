use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use chat_relay::client::{ChatView, DEFAULT_BACKEND_URL, HttpRelayClient, TranscriptRenderer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let backend_url =
        std::env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
    let api = HttpRelayClient::new(backend_url);
    println!("AI Chat ({})", api.base_url());

    let mut view = ChatView::new(api);
    let mut renderer = TranscriptRenderer::new();

    view.load().await;
    if view.take_scroll_request() {
        print_lines(renderer.render_updates(view.messages()));
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;
    while let Some(line) = lines.next_line().await? {
        view.set_draft(line);
        let Some(text) = view.begin_submit() else {
            prompt()?;
            continue;
        };

        if view.is_sending() {
            println!("Sending...");
        }
        let result = view.exchange(&text).await;
        view.finish_submit(result);

        if view.take_scroll_request() {
            print_lines(renderer.render_updates(view.messages()));
        }
        prompt()?;
    }

    Ok(())
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}
