use clap::Parser;
use colored::Colorize;
use dotenv::dotenv;
use foodsearch::commands::food_cmd;
use log::debug;

#[derive(Parser, Debug, Clone)]
#[command(name = "foodsearch", author, version, about = "Search fast food menu items", long_about = None)]
struct Args {
    /// Food item to search
    #[arg(short, long)]
    query: String,
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse command line arguments
    let args = Args::parse();

    match food_cmd::handle_command(&args.query).await {
        Ok(outcome) => debug!("session finished: {:?}", outcome),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(e.exit_code());
        }
    }
}
