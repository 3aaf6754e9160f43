mod cli;
mod infra;
mod render;

use mindscope::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
