use crate::cli::ConfigCommand;
use crate::config::Config;
use crate::error::Result;

pub fn execute(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Init => {
            let config_path = Config::config_file_path()?;
            Config::create_sample_at(&config_path)?;
            println!("Created sample config file at: {}", config_path.display());
        }
        ConfigCommand::Path => {
            let config_path = Config::config_file_path()?;
            println!("Config file path: {}", config_path.display());

            if config_path.exists() {
                println!("Status: File exists");

                match Config::load() {
                    Ok(config) => {
                        println!("Valid: Yes");
                        println!("User: {}", config.user().login);
                        match config.profiles_file() {
                            Ok(path) => println!("Profiles file: {}", path.display()),
                            Err(e) => println!("Profiles file: unavailable ({})", e),
                        }
                    }
                    Err(e) => {
                        println!("Valid: No");
                        println!("Error: {}", e);
                    }
                }
            } else {
                println!("Status: File does not exist");
                println!("\nTo create a sample config file, run:");
                println!("  ec2prefs config init");
            }
        }
    }

    Ok(())
}
