use crate::config;
use crate::generator::{self, prefix};
use crate::logger::Logger;
use crate::middle_code;
use crate::{log_error, log_info};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub struct App {
    pub logger: Logger,
    config_path: PathBuf,
    output_path: PathBuf,
}

impl App {
    pub fn new() -> Self {
        App {
            logger: Logger::new(),
            config_path: PathBuf::from(config::DEFAULT_CONFIG_PATH),
            output_path: PathBuf::from(generator::DEFAULT_OUTPUT_PATH),
        }
    }

    /// Main interactive loop: resolve middle codes, generate, ask to repeat.
    /// A single iteration per run, never recursion, so repeated runs do not
    /// accumulate pending stack frames.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        let prefixes = prefix::all_prefixes();
        println!("Loaded built-in operator prefixes:");
        println!(
            "China Mobile: {} | China Unicom: {} | China Telecom: {}",
            prefix::MOBILE_PREFIXES.len(),
            prefix::UNICOM_PREFIXES.len(),
            prefix::TELECOM_PREFIXES.len()
        );

        let stdin = io::stdin();
        let mut input = stdin.lock();

        loop {
            let middle_codes = self.resolve_middle_codes(&mut input)?;

            match generator::generate_phonedict(
                &prefixes,
                &middle_codes,
                &self.output_path,
                &self.logger,
            ) {
                Ok(_) => log_info!(
                    self.logger,
                    "Phone numbers exported to {}",
                    self.output_path.display()
                ),
                Err(e) => log_error!(self.logger, "Phone number generation failed: {}", e),
            }

            if self.confirm_exit(&mut input)? {
                println!("Exiting program...");
                return Ok(());
            }
            println!("-------------------------- Restart --------------------------");
        }
    }

    /// Prompts for the input method until a middle-code list is resolved.
    /// Config and manual-entry errors are reported and re-prompted, never
    /// propagated.
    fn resolve_middle_codes(&self, input: &mut impl BufRead) -> io::Result<Vec<String>> {
        println!();
        println!("Please select 4-digit middle code input method:");
        println!("1. Read from config.json (file will be auto-created if it doesn't exist)");
        println!("2. Manual input via command line (separate multiple codes with commas, e.g., 0537,0100,0210)");

        loop {
            let choice = prompt_line(input, "Enter option (1/2): ")?;
            match choice.as_str() {
                "1" => match config::load_or_create(&self.config_path, &self.logger) {
                    Ok(cfg) => {
                        log_info!(
                            self.logger,
                            "Read {} middle codes from config file: {:?}",
                            cfg.middle_codes.len(),
                            cfg.middle_codes
                        );
                        return Ok(cfg.middle_codes);
                    }
                    Err(e) => {
                        log_error!(self.logger, "Config file processing failed: {}", e);
                    }
                },
                "2" => {
                    let line = prompt_line(
                        input,
                        "Enter multiple 4-digit middle codes (separate with commas, e.g., 0537,0100,0210): ",
                    )?;
                    match middle_code::parse_manual(&line) {
                        Ok(codes) => {
                            log_info!(
                                self.logger,
                                "Manual input successful, {} middle codes: {:?}",
                                codes.len(),
                                codes
                            );
                            return Ok(codes);
                        }
                        Err(e) => log_error!(self.logger, "Input error: {}", e),
                    }
                }
                _ => println!("Invalid option, please enter 1 or 2"),
            }
        }
    }

    /// Asks whether to exit; anything other than y/n is re-prompted.
    fn confirm_exit(&self, input: &mut impl BufRead) -> io::Result<bool> {
        loop {
            let answer = prompt_line(
                input,
                "\nExit program? (y/n, 'n' to reselect middle code input method): ",
            )?;
            match answer.to_ascii_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => println!("Invalid input, please enter y or n"),
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints a prompt and reads one trimmed line. A closed input stream is an
/// `UnexpectedEof` error, which callers treat as fatal.
fn prompt_line(input: &mut impl BufRead, prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "console input closed",
        ));
    }
    Ok(line.trim().to_string())
}
