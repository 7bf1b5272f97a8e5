mod app;
mod config;
mod generator;
mod logger;
mod middle_code;

use app::App;
use std::process;

fn main() {
    let mut app = App::new();
    if let Err(e) = app.run() {
        eprintln!("Application error: {}", e);
        process::exit(1);
    }
}
