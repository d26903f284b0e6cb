mod cli;

fn main() {
    if let Err(e) = cli::commands::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
