#[derive(Debug, Default)]
struct CliArgs {
    demo: bool,
}

fn main() -> anyhow::Result<()> {
    let args = parse_args(std::env::args().skip(1).collect())?;
    jukebox::app::run(jukebox::app::AppOptions {
        seed_demo: args.demo,
    })
}

fn parse_args(args: Vec<String>) -> anyhow::Result<CliArgs> {
    let mut out = CliArgs::default();
    for arg in &args {
        match arg.as_str() {
            "--demo" => out.demo = true,
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => anyhow::bail!("unknown argument {other}"),
        }
    }
    Ok(out)
}

fn print_help() {
    println!("jukebox");
    println!("  --demo    Start with a small preloaded catalog");
}
