mod cli;
mod demo;
mod render;
mod score;

use trustlayer::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
