use std::env::args_os;

use cpt_palette::{generate_color_table, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match generate_color_table(&arguments) {
        Ok(colors) => {
            println!(
                "Color table saved as {}",
                arguments.output_file().display()
            );
            for (index, color) in colors.iter().enumerate() {
                println!("{:>2} {} ({})", index, color.hex(), color);
            }
        }
        Err(e) => {
            eprintln!("Generating color table failed because of: {}", e);
            std::process::exit(1);
        }
    }
}
