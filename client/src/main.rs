/// userboard - terminal rendition of the userboard page
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use userboard_client::{ApiClient, App, BuildMode, ClientConfig};

#[derive(Parser)]
#[command(name = "userboard")]
#[command(about = "Show and add users through the userboard API", long_about = None)]
struct Cli {
    /// API base URL; overrides API_BASE_URL and the build-mode default
    #[arg(long, global = true)]
    api_base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the page and print it
    Show,
    /// Fill in the form, submit it and print the page
    Add {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
    },
    /// Print the API health report
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "userboard_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match cli.api_base_url {
        Some(url) => ClientConfig::resolve(BuildMode::current(), Some(url))?,
        None => ClientConfig::for_build()?,
    };
    let api = ApiClient::new(&config.base_url)?;

    match cli.command {
        Commands::Show => {
            let mut app = App::new(api);
            app.mount().await;
            println!("{}", app.render());
        }
        Commands::Add { name, email } => {
            let mut app = App::new(api);
            app.mount().await;
            app.set_name(name);
            app.set_email(email);
            app.submit().await;
            println!("{}", app.render());
        }
        Commands::Health => {
            let health = api.health().await?;
            println!("{}", serde_json::to_string_pretty(&health)?);
        }
    }

    Ok(())
}
