fn main() -> anyhow::Result<()> {
    prompt_catalog::cli::run()
}
