use colored::Colorize;

fn main() {
    if let Err(err) = folio::run() {
        eprintln!("{} {}", "error:".bright_red().bold(), err);
        std::process::exit(1);
    }
}
