use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use service_example::client::ServiceClient;
use service_example::config::Config;
use service_example::lint;
use service_example::models::{Method, RequestExample, ServicePayload};
use service_example::snippet::{self, Language};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "service-example")]
#[command(about = "Example snippets for calling the service API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print or write one example snippet
    Render {
        #[arg(short, long, default_value = "javascript")]
        lang: Language,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write a snippet for every language into a docs directory
    Docs {
        #[arg(short, long, default_value = "docs")]
        dir: PathBuf,
    },
    /// Lint the example and the snippets in a docs directory
    Check {
        #[arg(short, long, default_value = "docs")]
        dir: PathBuf,
    },
    /// Run the example call and print the parsed response
    Call {
        #[arg(short, long)]
        endpoint: Option<String>,
        #[arg(short, long, default_value = "POST")]
        method: Method,
        #[arg(short, long)]
        input: Option<String>,
        /// Extra parameter as key=value; repeatable
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
}

fn parse_param(raw: &str) -> Result<(String, String)> {
    let (key, value) = raw
        .split_once('=')
        .with_context(|| format!("expected key=value, got `{}`", raw))?;
    Ok((key.trim().to_string(), value.to_string()))
}

fn build_payload(input: Option<String>, params: Vec<(String, String)>) -> ServicePayload {
    let mut payload = ServicePayload::placeholder();
    if let Some(input) = input {
        payload.input = input;
    }
    for (key, value) in params {
        payload.parameters.insert(key, value.into());
    }
    payload
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let example = RequestExample::placeholder();

    match cli.command {
        Commands::Render { lang, output } => {
            let rendered = snippet::render(&example, lang)?;
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, rendered)?;
                    println!("{} example saved to: {}", lang, path.display());
                }
                None => print!("{}", rendered),
            }
        }
        Commands::Docs { dir } => {
            std::fs::create_dir_all(&dir)?;
            for lang in Language::all() {
                let path = dir.join(snippet::file_name(lang));
                std::fs::write(&path, snippet::render(&example, lang)?)?;
                println!("{} example saved to: {}", lang, path.display());
            }
        }
        Commands::Check { dir } => {
            let mut problems = 0;
            for (lang, finding) in lint::check_example(&example) {
                match lang {
                    Some(lang) => println!("rendered {}: {}", lang, finding),
                    None => println!("example payload: {}", finding),
                }
                problems += 1;
            }
            for report in lint::check_dir(&dir)? {
                for finding in &report.findings {
                    println!("{}: {}", report.path.display(), finding);
                }
                problems += report.findings.len();
            }
            if problems > 0 {
                anyhow::bail!("{} problem(s) found", problems);
            }
            println!("All examples passed");
        }
        Commands::Call {
            endpoint,
            method,
            input,
            params,
        } => {
            let config = Config::from_env();
            let mut example = example
                .with_endpoint(endpoint.unwrap_or(config.endpoint))
                .with_body(build_payload(input, params));
            example.method = method;

            tracing::info!(method = %example.method, endpoint = %example.endpoint, "running example call");
            let client = ServiceClient::new(config.api_key);
            let result = client.call(&example).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
