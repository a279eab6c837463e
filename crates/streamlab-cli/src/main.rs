mod command;
mod data;
mod report;
mod scenario;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    command::run()
}
