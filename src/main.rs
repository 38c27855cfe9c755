use miette::Result;

/// Main entry point for the chain-loop CLI tool
fn main() -> Result<()> {
    miette::set_panic_hook();

    chain_loop::run()
}
