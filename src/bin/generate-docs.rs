//! Generates the task and configuration reference documentation.
use clap::{Parser, Subcommand};
use nvram_task::docs::DocsGenerator;

#[derive(Parser)]
#[command(name = "generate-docs")]
#[command(about = "Generate documentation for the nvram task")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write markdown reference pages
    All {
        #[arg(short, long, default_value = "docs")]
        output: String,
    },
    /// Print the JSON Schema of the task arguments
    TaskSchema,
    /// Print the JSON Schema of the task result
    ReportSchema,
    /// Print the JSON Schema of the configuration file
    ConfigSchema,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let generator = DocsGenerator::new();

    match cli.command {
        Commands::All { output } => {
            generator.with_output_dir(output).generate_all()?;
        }
        Commands::TaskSchema => println!("{}", generator.task_schema()?),
        Commands::ReportSchema => println!("{}", generator.report_schema()?),
        Commands::ConfigSchema => println!("{}", generator.config_schema()?),
    }

    Ok(())
}
