use clap::Parser;
use vocab_quiz::Args;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = vocab_quiz::run(args).await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
