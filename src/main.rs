use std::{fs, io, time::Duration};

use clap::Parser;
use moonscribe::{
    cli::Args,
    config::{ClientConfig, API_KEY_ENV},
    errors::ChatError,
    logging::init_logger,
    openai::ChatClient,
    persist::Recorder,
    session::Session,
};

fn main() {
    init_logger();
    let args = Args::parse();

    let mut config = ClientConfig::from_env().unwrap_or_else(|e| {
        println!("❌ {}", e);
        println!("👉 请先在系统中设置 {} 后再运行程序", API_KEY_ENV);
        std::process::exit(1);
    });

    run(&args, &mut config).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
}

fn run(args: &Args, config: &mut ClientConfig) -> Result<(), ChatError> {
    if let Some(model) = &args.model {
        config.model = model.clone();
    }
    config.timeout = Duration::from_secs(args.timeout);

    let system_prompt = match &args.system_prompt_file {
        Some(path) => fs::read_to_string(path)?,
        None => args.profile.system_prompt().to_string(),
    };

    let client = ChatClient::new(config.clone())?;
    let session = Session::new(
        &client,
        system_prompt,
        Recorder::new(&args.output_dir, args.profile.template()),
        args.profile.console(),
    );
    session.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
