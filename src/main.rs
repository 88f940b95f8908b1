use anyhow::Result;

fn main() -> Result<()> {
    chatlog_analyzer::cli::run()
}
