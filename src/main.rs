mod config;
mod models;
mod services;
mod utils;

use chrono::NaiveDate;
use config::Config;
use services::generator::{PostRequest, generate_post, record_post};
use services::input::{prompt_optional, prompt_required};
use services::llm::LLMClient;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

const SUCCESS: u8 = 0;
const FAILURE: u8 = 1;

#[tokio::main]
async fn main() -> ExitCode {
    // A .env file is optional; real environment variables win over it.
    dotenv::dotenv().ok();

    // Initialize tracing
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let today = chrono::Local::now().date_naive();

    ExitCode::from(run(Config::from_env, &mut input, &mut output, today).await)
}

/// One full run of the generator, talking to the user through `input` and
/// `output`. Returns the process exit status.
async fn run<C, R, W>(load_config: C, input: &mut R, output: &mut W, today: NaiveDate) -> u8
where
    C: FnOnce() -> anyhow::Result<Config>,
    R: BufRead,
    W: Write,
{
    match converse(load_config, input, output, today).await {
        Ok(status) => status,
        Err(e) => {
            tracing::debug!(error = %e, "terminal output failed");
            FAILURE
        }
    }
}

async fn converse<C, R, W>(
    load_config: C,
    input: &mut R,
    output: &mut W,
    today: NaiveDate,
) -> io::Result<u8>
where
    C: FnOnce() -> anyhow::Result<Config>,
    R: BufRead,
    W: Write,
{
    // The key check comes before any prompt, request or file write
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::debug!(error = %e, "configuration error");
            writeln!(output, "{}", e)?;
            return Ok(FAILURE);
        }
    };
    tracing::debug!(?config, "loaded configuration");

    let llm_client = LLMClient::new(&config);

    writeln!(output, "\n--- Blog Post Content Generator ---\n")?;
    let request = match read_request(input, output) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!(error = %e, "failed to read input");
            writeln!(output, "\n{}", e)?;
            return Ok(FAILURE);
        }
    };

    writeln!(output, "\nGenerating content with Gemini...\n")?;
    tracing::info!(model = llm_client.model(), title = %request.title, "generating post");

    let publication = match generate_post(&request, &llm_client, &config, today).await {
        Ok(publication) => publication,
        Err(e) => {
            tracing::debug!(error = ?e, "post generation failed");
            writeln!(output, "{:#}", e)?;
            return Ok(FAILURE);
        }
    };
    writeln!(
        output,
        "Blog post successfully saved to: {}",
        publication.html_path.display()
    )?;
    tracing::info!(link = %publication.record.link, "post page published");

    match record_post(&config, &publication.record) {
        Ok(update) => {
            if let Some(e) = &update.discarded {
                writeln!(
                    output,
                    "Warning: Could not read or decode {}. Starting fresh list. Error: {}",
                    config.index_file.display(),
                    e
                )?;
            }
            writeln!(output, "Blog index file updated: {}", config.index_file.display())?;
            tracing::debug!(entries = update.entries, "index now lists posts");
        }
        Err(e) => writeln!(output, "{:#}", e)?,
    }

    writeln!(output, "\n--- Process Complete ---")?;
    Ok(SUCCESS)
}

fn read_request<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<PostRequest> {
    let title = prompt_required(input, output, "Enter blog title/topic: ")?;
    let details = prompt_optional(input, output, "Enter extra details about topic (optional): ")?;

    Ok(PostRequest { title, details })
}
