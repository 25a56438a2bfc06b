use anyhow::Result;
use mirror_cli::MirrorCli;

fn main() -> Result<()> {
    env_logger::init();

    MirrorCli::new().parse_and_run()
}
