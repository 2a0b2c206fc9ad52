fn main() -> anyhow::Result<()> {
    functimer_cli::run()
}
