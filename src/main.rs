pub mod cli;
pub mod config;
pub mod error;
pub mod infer;
pub mod ir;
pub mod names;
pub mod path_de;
pub mod render;

use colored::Colorize;

fn main() {
    let command_line_interface = cli::CommandLineInterface::load();
    if let Err(error) = command_line_interface.run() {
        eprintln!("{} {error:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
