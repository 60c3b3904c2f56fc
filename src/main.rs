use hangman::cli::{parse_cli, run};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = parse_cli();
    run(&cli)
}
